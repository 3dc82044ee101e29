//! The `completions` command: generate shell completion scripts.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::Output;

use super::{Command, CommandResult};

/// Emits a completion script for the requested shell on stdout.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _out: &mut Output) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "rigup", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
