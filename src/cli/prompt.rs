// src/cli/prompt.rs

use crate::{
    cli::theme::MenuTheme,
    core::color::Palette,
    system::signals::InterruptState,
};
use dialoguer::{Input, console::Term};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input was interrupted.")]
    Interrupted,
    #[error("Could not read from the terminal: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        // ^C in raw mode and a closed stdin both mean the user is done.
        match e.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => Self::Interrupted,
            _ => Self::Io(e),
        }
    }
}

impl From<dialoguer::Error> for PromptError {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io_error) => io_error.into(),
        }
    }
}

/// The three kinds of line the menu ever asks for.
pub trait Prompter {
    /// The menu selection typed after the `>` glyph.
    fn read_selection(&mut self) -> Result<String, PromptError>;

    /// One value for a declared script argument. Returns the raw line.
    fn read_argument(&mut self, prompt: &str, default: &str) -> Result<String, PromptError>;

    /// Blocks until the user acknowledges a finished script.
    fn acknowledge(&mut self) -> Result<(), PromptError>;
}

/// Interactive prompts on stdout through `dialoguer`.
#[derive(Debug)]
pub struct TerminalPrompter {
    term: Term,
    theme: MenuTheme,
    interrupts: InterruptState,
}

impl TerminalPrompter {
    /// A prompter on stdout that gives up when `interrupts` has a pending ^C.
    pub fn new(palette: Palette, interrupts: InterruptState) -> Self {
        Self {
            term: Term::stdout(),
            theme: MenuTheme::new(palette),
            interrupts,
        }
    }

    fn read_line(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        // A ^C that arrived while nothing was reading still ends the session.
        if self.interrupts.take_interrupt() {
            return Err(PromptError::Interrupted);
        }

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string()).show_default(true);
        }
        let line = input.interact_text_on(&self.term)?;
        log::debug!("Read line for prompt '{}': {:?}", prompt, line);
        Ok(line)
    }
}

impl Prompter for TerminalPrompter {
    fn read_selection(&mut self) -> Result<String, PromptError> {
        self.read_line(t!("menu.prompt.selection"), None)
    }

    fn read_argument(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        // dialoguer substitutes the default on an empty line, which is what the
        // collector would do anyway.
        self.read_line(prompt, Some(default))
    }

    fn acknowledge(&mut self) -> Result<(), PromptError> {
        self.term.write_line("")?;
        self.read_line(t!("menu.prompt.continue"), None).map(|_| ())
    }
}
