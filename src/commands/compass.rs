//! `campus compass` command - ask the Brújula
//!
//! Drives the compass popup for a single question: open, submit, wait for
//! the answer, print it. A rate-limited shared key is reported with a hint
//! to retry using `--api-key`.

use tracing::debug;

use campus_core::bail_usage;
use campus_core::catalog::{Catalog, CatalogKind};
use campus_core::compass::prompt::catalog_digest;
use campus_core::compass::{
    CompassAnswer, CompassPopup, CompassReply, CompassService, GeminiBackend, PopupState,
};
use campus_core::config::CompassConfig;
use campus_core::error::{CampusError, Result};
use campus_core::format::escape_quotes;
use campus_core::session::SessionContext;

use crate::cli::{Cli, CompassArgs, OutputFormat};
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format;

/// Execute the compass command
pub fn execute(
    cli: &Cli,
    args: &CompassArgs,
    session: &SessionContext,
    config: &CompassConfig,
) -> Result<()> {
    let student = session.require()?;
    debug!(user = %student.user_id, "compass_open");

    let mut popup = CompassPopup::new();
    popup.open();
    popup.set_mode(args.mode);

    let (ticket, request) = match popup.submit(&args.query_text(), args.api_key.as_deref()) {
        Ok(submitted) => submitted,
        Err(refusal) => bail_usage!(refusal),
    };

    let catalogs = CatalogKind::ALL
        .iter()
        .map(|kind| Catalog::builtin(*kind))
        .collect::<Result<Vec<_>>>()?;
    let service = CompassService::new(
        GeminiBackend::new(&config.endpoint, &config.model),
        config.api_key.clone(),
        catalog_digest(&catalogs),
    );

    let result = service.handle(&request);
    popup.deliver(ticket, result);

    match popup.state() {
        PopupState::Answered(answer) => output_answer(cli, answer),
        PopupState::Failed(err) => {
            if cli.format == OutputFormat::Json {
                print_json(&CompassReply::from(Err::<CompassAnswer, _>(err.clone())))?;
            } else if popup.offers_own_key() && !cli.quiet {
                eprintln!("hint: the shared Brújula key is out of quota; retry with --api-key <your key>");
            }
            Err(CampusError::Compass(err.clone()))
        }
        PopupState::Idle | PopupState::Pending { .. } => {
            Err(CampusError::failed("ask the Brújula", "no answer was delivered"))
        }
    }
}

fn output_answer(cli: &Cli, answer: &CompassAnswer) -> Result<()> {
    output_by_format!(cli.format,
        json => print_json(&CompassReply::Answer(answer.clone())),
        human => {
            println!("{}", answer.answer);
            if !answer.links.is_empty() {
                println!();
                for link in &answer.links {
                    println!("→ {} <{}>", link.title, link.url);
                    if !link.description.is_empty() {
                        println!("  {}", link.description);
                    }
                }
            }
        },
        records => {
            print_records_header("compass", &[("links", answer.links.len().to_string())]);
            println!("A \"{}\"", escape_quotes(&answer.answer));
            for link in &answer.links {
                println!(
                    "L \"{}\" {} \"{}\"",
                    escape_quotes(&link.title),
                    link.url,
                    escape_quotes(&link.description)
                );
            }
        }
    )
}
