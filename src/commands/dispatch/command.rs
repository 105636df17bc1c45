//! Command trait and context for dispatching commands

use std::time::Instant;

use campus_core::config::CampusConfig;
use campus_core::error::Result;
use campus_core::session::{IdentitySource, SessionContext};

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn config(&self) -> Result<CampusConfig> {
        CampusConfig::load(self.cli.config_dir.as_deref())
    }

    /// Session of the student named by `--user` / `CAMPUS_USER`
    pub fn session(&self) -> Result<SessionContext> {
        SessionContext::load(&IdentitySource::new(self.cli.user.clone()))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("campus {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Student dashboard for the No-Code & AI program.");
        println!();
        println!("Run `campus --help` for usage information.");
        Ok(())
    }
}
