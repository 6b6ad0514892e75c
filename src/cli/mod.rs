//! Command line surface and the interactive terminal layer.

use crate::{
    config::Settings,
    core::paths::{self, PathError},
    models::ColorChoice,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod prompt;
pub mod render;
pub mod theme;

/// Builds the color-aware help text from the localized template.
fn build_help_string() -> &'static str {
    // Replaces the semantic tags of the template (`<title>`, `<cmd>`...) with ANSI
    // styles, or with nothing when colors are off.
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let template = t!("cli.help.template");

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let hl = if use_colors { "\x1b[1;36m" } else { "" }; // Bold Cyan
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan
    let group = if use_colors { "\x1b[1;32m" } else { "" }; // Bold Green
    let err = if use_colors { "\x1b[91m" } else { "" }; // Bright Red
    let dim = if use_colors { "\x1b[2m" } else { "" }; // Dim
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let formatted_string = template
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<hl>", hl)
        .replace("</hl>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset)
        .replace("<group>", group)
        .replace("</group>", reset)
        .replace("<err>", err)
        .replace("</err>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset);

    Box::leak(formatted_string.into_boxed_str())
}

/// racoon: a file-based terminal menu.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    help_template = { build_help_string() },
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
pub struct Cli {
    /// Directory used as the menu root. Defaults to `menu_dir` from the settings (`menu`).
    pub path: Option<String>,

    /// When to use colors.
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Do not print the banner above the top-level menu.
    #[arg(long)]
    pub no_banner: bool,

    /// Read settings from FILE instead of the default settings file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Startup problems that stop the menu before it is shown.
#[derive(Error, Debug)]
pub enum StartupError {
    /// The menu root is missing or is not a directory.
    #[error("{}", not_a_directory_message(.0))]
    NotADirectory(PathBuf),
}

fn not_a_directory_message(path: &Path) -> String {
    format!(t!("startup.error.not_a_directory"), path = paths::display_path(path))
}

/// Effective options after merging the command line over the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory shown as the top-level menu, after `~` and `$VAR` expansion.
    pub menu_root: PathBuf,
    /// When to use colors.
    pub color: ColorChoice,
    /// Whether the banner is printed above the top-level menu.
    pub banner: bool,
    /// Terminal emulator command used for re-launching.
    pub terminal: String,
}

impl RunOptions {
    /// Fails unless the menu root exists and is a directory (symlinks are followed).
    pub fn validate_root(&self) -> Result<(), StartupError> {
        if self.menu_root.is_dir() {
            Ok(())
        } else {
            Err(StartupError::NotADirectory(self.menu_root.clone()))
        }
    }
}

impl Cli {
    /// Command line flags win over settings, settings win over built-in defaults.
    pub fn resolve(&self, settings: &Settings) -> Result<RunOptions, PathError> {
        let raw_root = self.path.as_deref().unwrap_or(&settings.menu_dir);
        Ok(RunOptions {
            menu_root: paths::expand_user_path(raw_root)?,
            color: self.color.unwrap_or(settings.color),
            banner: settings.banner && !self.no_banner,
            terminal: settings.terminal.clone(),
        })
    }
}
