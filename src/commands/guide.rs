//! `campus guide` command - the step-by-step program guide

use campus_core::content::Content;
use campus_core::error::Result;
use campus_core::format::escape_quotes;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format;

/// Execute the guide command
pub fn execute(cli: &Cli) -> Result<()> {
    let content = Content::builtin()?;

    output_by_format!(cli.format,
        json => print_json(&content.guide),
        human => {
            for step in &content.guide {
                println!("{}. {}", step.number, step.title);
                println!("   {}", step.summary);
                for item in &step.checklist {
                    println!("   [ ] {}", item);
                }
                println!();
            }
        },
        records => {
            print_records_header("guide", &[("steps", content.guide.len().to_string())]);
            for step in &content.guide {
                println!("S {} \"{}\"", step.number, escape_quotes(&step.title));
                for item in &step.checklist {
                    println!("K {} \"{}\"", step.number, escape_quotes(item));
                }
            }
        }
    )
}
