//! `campus benefits` command - premium member benefits

use serde_json::json;
use tracing::debug;

use campus_core::config::AccessConfig;
use campus_core::content::Content;
use campus_core::error::Result;
use campus_core::format::escape_quotes;
use campus_core::session::{require_premium, resolve_role, SessionContext};

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format;

/// Execute the benefits command
///
/// Requires a signed-in student whose role grants premium access. A role
/// that cannot be read falls back to `access.fallback_role`.
pub fn execute(cli: &Cli, session: &SessionContext, access: &AccessConfig) -> Result<()> {
    let student = session.require()?;
    let role = resolve_role(&access.role_table(), &student.user_id, access.fallback_role);
    debug!(user = %student.user_id, role = %role, "benefits_access");
    require_premium(role)?;

    let benefits = &Content::builtin()?.benefits;

    output_by_format!(cli.format,
        json => print_json(&json!({
            "user": student.user_id,
            "role": role,
            "benefits": benefits,
        })),
        human => {
            if !cli.quiet {
                println!("Benefits for {} ({})", student.user_id, role);
                println!();
            }
            for benefit in benefits {
                println!("* {}", benefit.title);
                println!("  {}", benefit.description);
                if let Some(code) = &benefit.code {
                    println!("  Code: {}", code);
                }
            }
        },
        records => {
            print_records_header(
                "benefits",
                &[("user", student.user_id.clone()), ("role", role.to_string())],
            );
            for benefit in benefits {
                println!(
                    "B \"{}\" code={}",
                    escape_quotes(&benefit.title),
                    benefit.code.as_deref().unwrap_or("-")
                );
            }
        }
    )
}
