//! Command implementations for all campus commands

use campus_core::error::Result;

use super::command::{Command, CommandContext};
use super::trace_command;
use crate::cli::Commands;
use crate::commands;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::List(args) => commands::list::execute(ctx.cli, args),
            Commands::Show(args) => commands::show::execute(ctx.cli, args),
            Commands::Categories(args) => commands::categories::execute(ctx.cli, args),
            Commands::Faq(args) => commands::faq::execute(ctx.cli, args),
            Commands::Guide => commands::guide::execute(ctx.cli),
            Commands::Worksheets(args) => commands::worksheets::execute(ctx.cli, args),
            Commands::Benefits => {
                let session = ctx.session()?;
                let config = ctx.config()?;
                trace_command!(ctx.cli, ctx.start, "load_session");
                commands::benefits::execute(ctx.cli, &session, &config.access)
            }
            Commands::Compass(args) => {
                let session = ctx.session()?;
                let config = ctx.config()?;
                trace_command!(ctx.cli, ctx.start, "load_session");
                commands::compass::execute(ctx.cli, args, &session, &config.compass)
            }
            Commands::Validate => commands::validate::execute(ctx.cli),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
