//! External command execution.
//!
//! Provisioning actions shell out through these helpers. Interactive
//! installers run with inherited stdio so the operator sees their output
//! live; probes and quiet configuration commands capture instead.

use std::process::{Command, Stdio};

use anyhow::{anyhow, Context};

use crate::error::{Result, RigupError};

/// Run a command with inherited stdio (output shows in real time).
pub fn run(program: &str, args: &[&str]) -> Result<()> {
    run_with_env(program, args, &[])
}

/// Run a command with inherited stdio and extra environment variables.
pub fn run_with_env(program: &str, args: &[&str], env: &[(&str, &str)]) -> Result<()> {
    let rendered = render(program, args);
    tracing::debug!(command = %rendered, "running");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    for (key, value) in env {
        cmd.env(key, value);
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to execute: {}", rendered))?;

    if status.success() {
        Ok(())
    } else {
        Err(RigupError::CommandFailed {
            command: rendered,
            code: status.code(),
        })
    }
}

/// Run a command and capture its trimmed stdout.
///
/// A non-zero exit reports the captured stderr in the error.
pub fn run_capture(program: &str, args: &[&str]) -> Result<String> {
    let rendered = render(program, args);
    tracing::debug!(command = %rendered, "capturing");

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to execute: {}", rendered))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(anyhow!("`{}` failed: {}", rendered, stderr.trim()).into())
    }
}

/// Run a command silently, returning success/failure.
pub fn run_quiet(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Check if a command is available on PATH.
pub fn command_exists(program: &str) -> bool {
    run_quiet("which", &[program])
}

fn render(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
