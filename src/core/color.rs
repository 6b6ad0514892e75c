// src/core/color.rs

use crate::models::ColorChoice;
use colored::{ColoredString, Colorize};

/// The roles text can play in menu output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Indices, labels and the banner.
    Accent,
    /// Directory names, prompts and the farewell.
    Muted,
    /// Echo of what the user typed.
    Input,
}

/// Color decision computed once at startup and handed to every renderer.
///
/// Rendering code asks the palette to paint; it never inspects the environment itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that paints when `enabled` is true.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Paints `text` for the given role, or returns it untouched when colors are off.
    pub fn paint(&self, text: &str, role: Role) -> String {
        if !self.enabled {
            return text.to_string();
        }
        role_style(text, role).to_string()
    }
}

fn role_style(text: &str, role: Role) -> ColoredString {
    match role {
        Role::Accent => text.bright_green(),
        Role::Muted => text.green(),
        Role::Input => text.yellow(),
    }
}

/// Decides whether the menu may use colors.
///
/// `auto` requires a terminal on stdout, a `TERM` that is set and not `dumb`, and
/// `colored`'s own environment checks (`NO_COLOR`, `CLICOLOR`) to agree.
pub fn supports_rich_output(choice: ColorChoice, stdout_is_tty: bool, term: Option<&str>) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            let term_ok = matches!(term, Some(t) if !t.is_empty() && t != "dumb");
            stdout_is_tty && term_ok && colored::control::SHOULD_COLORIZE.should_colorize()
        }
    }
}
