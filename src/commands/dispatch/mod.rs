//! Command dispatch logic for campus

use std::time::Instant;

use campus_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);
    debug!(
        elapsed = ?start.elapsed(),
        signed_in = cli.user.is_some(),
        "dispatch"
    );

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
