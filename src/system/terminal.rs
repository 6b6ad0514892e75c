// src/system/terminal.rs

//! Re-launching the menu inside a terminal emulator.
//!
//! When racoon is started from a desktop launcher there is no terminal to talk to.
//! In that case the binary starts itself again inside the configured emulator and
//! waits for it, before any menu code runs.

use crate::{constants::RELAUNCH_ENV_VAR, models::Invocation};
use std::{
    ffi::OsString,
    io,
    path::Path,
    process::Command,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("Terminal command '{0}' could not be parsed.")]
    CommandParse(String),
    #[error("No terminal command configured.")]
    EmptyCommand,
    #[error("Could not locate the running executable: {0}")]
    CurrentExe(#[source] io::Error),
    #[error("Terminal '{command}' could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Whether the menu should move itself into a terminal emulator.
pub fn should_relaunch(stdout_is_tty: bool, already_relaunched: bool, terminal: &str) -> bool {
    !stdout_is_tty && !already_relaunched && !terminal.trim().is_empty()
}

/// `<terminal tokens> <exe> <original args>`.
pub fn relaunch_invocation(
    terminal: &str,
    exe: &Path,
    args: &[OsString],
) -> Result<Invocation, TerminalError> {
    let mut tokens = shlex::split(terminal)
        .ok_or_else(|| TerminalError::CommandParse(terminal.to_string()))?
        .into_iter();
    let program = tokens.next().ok_or(TerminalError::EmptyCommand)?;

    let mut rest: Vec<OsString> = tokens.map(OsString::from).collect();
    rest.push(exe.as_os_str().to_os_string());
    rest.extend(args.iter().cloned());

    Ok(Invocation {
        program: program.into(),
        args: rest,
    })
}

/// Runs this executable again inside `terminal` and waits for the window to close.
pub fn relaunch_in_terminal(terminal: &str, args: &[OsString]) -> Result<(), TerminalError> {
    let exe = std::env::current_exe().map_err(TerminalError::CurrentExe)?;
    let invocation = relaunch_invocation(terminal, &exe, args)?;
    log::debug!("Re-launching inside terminal: {}", invocation.display());

    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .env(RELAUNCH_ENV_VAR, "1")
        .status()
        .map_err(|e| TerminalError::Spawn {
            command: invocation.display(),
            source: e,
        })?;
    log::debug!("Terminal exited with {:?}", status.code());
    Ok(())
}
