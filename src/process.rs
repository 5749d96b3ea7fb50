use std::process::{Command, Output};

use tracing::debug;

use crate::error::AppError;

/// Runs external programs to completion
pub trait CommandRunner {
    /// Runs `program` with `args`, failing on spawn errors or a non-zero exit
    fn run(&mut self, program: &str, args: &[&str]) -> Result<(), AppError>;
}

/// Runs commands found on `PATH`, blocking until they exit
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let command = display_command(program, args);
        debug!("running `{command}`");

        let output: Output = Command::new(program)
            .args(args)
            .output()
            .map_err(|err| AppError::Process {
                command: command.clone(),
                reason: err.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {stderr}", output.status)
            };
            return Err(AppError::Process { command, reason });
        }

        Ok(())
    }
}

/// Renders a program and its arguments the way a shell user would type them
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
