//! Command implementations and dispatching.

pub mod completions;
pub mod init;
pub mod list;
pub mod run;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing status through `out`.
    fn execute(&self, out: &mut Output) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Exit codes are stable: 0 = success, 1 = mandatory step failure (or any
/// non-prerequisite error), 2 = prerequisite error.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command. A missing subcommand runs the
    /// pipeline.
    pub fn dispatch(&self, cli: &Cli, out: &mut Output) -> Result<CommandResult> {
        match &cli.command {
            None | Some(Commands::Run) => {
                run::RunCommand::new(cli.config.clone()).execute(out)
            }
            Some(Commands::List) => list::ListCommand::new(cli.config.clone()).execute(out),
            Some(Commands::Init) => init::InitCommand::new(cli.config.clone()).execute(out),
            Some(Commands::Completions(args)) => {
                completions::CompletionsCommand::new(args.shell).execute(out)
            }
        }
    }
}
