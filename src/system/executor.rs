// src/system/executor.rs

use crate::{
    models::{Invocation, LaunchOutcome},
    system::signals::InterruptState,
};
use std::io;
use std::path::Path;
use std::process::{Child, Command as StdCommand, Stdio};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command '{command}' could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Lost track of command '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Runs a fully built invocation. The menu never looks at what the child printed.
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation) -> Result<LaunchOutcome, ExecutionError>;
}

/// Builds the command line for `path` and hands it to `launcher`.
///
/// Blocks until the child is gone.
pub fn execute<L: Launcher + ?Sized>(
    path: &Path,
    args: &[String],
    elevate: bool,
    launcher: &mut L,
) -> Result<LaunchOutcome, ExecutionError> {
    let invocation = Invocation::new(path, args, elevate);
    log::debug!("Launching: {}", invocation.display());
    launcher.launch(&invocation)
}

/// Launches real processes with the menu's own stdin, stdout and stderr.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    interrupts: InterruptState,
    poll_interval: Duration,
}

impl ProcessLauncher {
    /// A launcher that polls its child every 100 ms and kills it on ^C.
    pub fn new(interrupts: InterruptState) -> Self {
        Self {
            interrupts,
            poll_interval: Duration::from_millis(100),
        }
    }

    fn wait_for(&self, child: Child, command: &str) -> Result<LaunchOutcome, ExecutionError> {
        // Whatever happens below, the child does not outlive this function.
        let mut child = scopeguard::guard(child, |mut child| {
            if let Err(e) = child.kill() {
                log::warn!("Failed to kill child process {}: {}", child.id(), e);
            }
            child.wait().ok();
        });

        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    let child = scopeguard::ScopeGuard::into_inner(child);
                    log::debug!("Child {} exited with {:?}", child.id(), status.code());
                    // The child usually dies of the same SIGINT before we poll again.
                    if self.interrupts.take_interrupt() {
                        return Ok(LaunchOutcome::Interrupted);
                    }
                    return Ok(LaunchOutcome::Completed {
                        code: status.code(),
                    });
                }
                Ok(None) => {
                    if self.interrupts.take_interrupt() {
                        // The guard kills and reaps the child on the way out.
                        log::debug!(
                            "Interrupt received, killing child process (PID: {})...",
                            child.id()
                        );
                        return Ok(LaunchOutcome::Interrupted);
                    }
                    std::thread::sleep(self.poll_interval);
                }
                Err(e) => {
                    return Err(ExecutionError::Wait {
                        command: command.to_string(),
                        source: e,
                    });
                }
            }
        }
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<LaunchOutcome, ExecutionError> {
        let command = invocation.display();
        // A stale ^C from a prompt must not kill the next script.
        self.interrupts.take_interrupt();

        let child = StdCommand::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ExecutionError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        self.wait_for(child, &command)
    }
}
