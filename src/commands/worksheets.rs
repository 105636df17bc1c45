//! `campus worksheets` command - list worksheets or print one in full

use campus_core::content::{Content, Worksheet};
use campus_core::error::Result;
use campus_core::format::escape_quotes;

use crate::cli::{Cli, WorksheetsArgs};
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format;

/// Execute the worksheets command
pub fn execute(cli: &Cli, args: &WorksheetsArgs) -> Result<()> {
    let content = Content::builtin()?;

    match &args.id {
        Some(id) => show_worksheet(cli, content.worksheet(id)?),
        None => list_worksheets(cli, &content.worksheets),
    }
}

fn list_worksheets(cli: &Cli, worksheets: &[Worksheet]) -> Result<()> {
    output_by_format!(cli.format,
        json => print_json(worksheets),
        human => {
            for sheet in worksheets {
                println!("{}  {}", sheet.id, sheet.title);
            }
            if !cli.quiet {
                println!();
                println!("Run `campus worksheets <id>` to open one.");
            }
        },
        records => {
            print_records_header("worksheets", &[("count", worksheets.len().to_string())]);
            for sheet in worksheets {
                println!("W {} \"{}\"", sheet.id, escape_quotes(&sheet.title));
            }
        }
    )
}

fn show_worksheet(cli: &Cli, sheet: &Worksheet) -> Result<()> {
    output_by_format!(cli.format,
        json => print_json(sheet),
        human => {
            println!("{}", sheet.title);
            println!();
            println!("{}", sheet.objective);
            println!();
            for (i, prompt) in sheet.prompts.iter().enumerate() {
                println!("{}. {}", i + 1, prompt);
                println!();
            }
        },
        records => {
            print_records_header("worksheet", &[("id", sheet.id.clone())]);
            println!("W {} \"{}\"", sheet.id, escape_quotes(&sheet.title));
            for prompt in &sheet.prompts {
                println!("P \"{}\"", escape_quotes(prompt));
            }
        }
    )
}
