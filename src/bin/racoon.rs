// src/bin/racoon.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use racoon::{
    cli::{Cli, RunOptions, prompt::TerminalPrompter},
    config::{self, Settings},
    constants::RELAUNCH_ENV_VAR,
    core::{
        color::{self, Palette},
        navigator::Navigator,
    },
    system::{executor::ProcessLauncher, signals::InterruptState, terminal},
    t,
};
use std::{
    env,
    io::{self, IsTerminal},
};

/// Entry point: sets up logging, parses arguments, runs the menu and reports any
/// error in one place.
fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}: {:#}", t!("startup.error.label").red().bold(), e);
        std::process::exit(1);
    }
    std::process::exit(0);
}

fn run(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let settings = load_settings(&cli)?;
    let options = cli.resolve(&settings)?;
    log::debug!("Effective options: {:?}", options);

    let stdout_is_tty = io::stdout().is_terminal();
    let already_relaunched = env::var_os(RELAUNCH_ENV_VAR).is_some();
    if terminal::should_relaunch(stdout_is_tty, already_relaunched, &options.terminal) {
        let args: Vec<_> = env::args_os().skip(1).collect();
        match terminal::relaunch_in_terminal(&options.terminal, &args) {
            Ok(()) => return Ok(()),
            Err(e) => log::warn!("Could not re-launch inside a terminal, running here: {}", e),
        }
    }

    let rich = color::supports_rich_output(
        options.color,
        stdout_is_tty,
        env::var("TERM").ok().as_deref(),
    );
    colored::control::set_override(rich);
    let palette = Palette::new(rich);

    run_menu(&options, palette)
}

/// An explicit `--config` must load. The default file is best effort.
fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => config::load_settings(Some(path.as_path())).context("Could not load settings"),
        None => Ok(config::load_settings(None).unwrap_or_else(|e| {
            log::warn!("Using default settings: {}", e);
            Settings::default()
        })),
    }
}

fn run_menu(options: &RunOptions, palette: Palette) -> Result<()> {
    options.validate_root()?;

    let interrupts = InterruptState::install().context("Could not install the Ctrl+C handler")?;
    let prompter = TerminalPrompter::new(palette, interrupts.clone());
    let launcher = ProcessLauncher::new(interrupts);

    Navigator::new(prompter, launcher, io::stdout(), palette)
        .with_banner(options.banner)
        .run(&options.menu_root)?;
    Ok(())
}
