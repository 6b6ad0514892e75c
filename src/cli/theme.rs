// src/cli/theme.rs

use crate::core::color::{Palette, Role};
use dialoguer::theme::Theme;
use std::fmt;

/// `dialoguer` theme that lays prompts out the way the menu prints everything else:
/// two-space indent, `prompt [default]: `.
#[derive(Debug, Clone, Copy)]
pub struct MenuTheme {
    palette: Palette,
}

impl MenuTheme {
    /// A theme that paints prompts with `palette`.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn write_prompt(&self, f: &mut dyn fmt::Write, prompt: &str, default: Option<&str>) -> fmt::Result {
        write!(f, "  {}", self.palette.paint(prompt, Role::Muted))?;
        match default {
            Some(default) => write!(f, " [{}]: ", self.palette.paint(default, Role::Accent)),
            None => write!(f, " "),
        }
    }
}

impl Theme for MenuTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.write_prompt(f, prompt, None)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        write!(f, "  {} {}", self.palette.paint("*", Role::Accent), err)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.write_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.write_prompt(f, prompt, None)?;
        write!(f, "{}", self.palette.paint(sel, Role::Input))
    }
}
