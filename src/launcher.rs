//! Process execution: the final blocking hand-off to an opener program.

use std::process::{Command, ExitStatus};

use crate::error::Error;
use crate::types::Invocation;

/// Launch the invocation as a child process and block until it exits.
///
/// The exit status is returned for the caller to log; this module never
/// interprets it. No cancellation or timeout — once launched, the child
/// runs to completion.
///
/// # Errors
///
/// Returns `Error::Launch` if the program cannot be spawned.
pub fn launch(invocation: &Invocation) -> Result<ExitStatus, Error> {
    return Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
        .map_err(|source| {
            return Error::Launch {
                program: invocation.program.clone(),
                source,
            };
        });
}
