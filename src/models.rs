// src/models.rs

//! Plain data shared between the menu engine, the prompt layer and the executor.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::ELEVATION_PREFIX;

/// What a menu entry leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A nested menu.
    Directory,
    /// A runnable action.
    Executable,
}

/// One item shown at a menu level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// File name inside the parent directory.
    pub name: String,
    /// Path used for every later filesystem or process operation.
    pub path: PathBuf,
    /// Submenu or action, decided once when the level is listed.
    pub kind: EntryKind,
}

impl MenuEntry {
    /// True for entries that open a nested menu.
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// A single `# ARG:` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    /// Identifier from the marker line. Never shown, only logged.
    pub name: String,
    /// Text shown when asking for the value.
    pub prompt: String,
    /// Value used when the answer is blank. May be empty.
    pub default: String,
}

/// Everything a script declares about itself through marker lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMetadata {
    /// Menu text: the first `# LABEL:` value or the file's base name.
    pub label: String,
    /// Whether the script is launched through `sudo -E`.
    pub requires_elevation: bool,
    /// Declared arguments, in file order.
    pub argument_specs: Vec<ArgSpec>,
}

/// Values gathered for a script, positionally aligned with its `ArgSpec`s.
pub type CollectedArguments = Vec<String>;

/// The final command line for a script: optional elevation prefix, target path, arguments.
///
/// Every token is passed to the process launcher as-is; nothing goes through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// First token: `sudo` when elevated, otherwise the script itself.
    pub program: OsString,
    /// Remaining tokens, in order.
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Builds `[sudo -E] <target> <arguments...>`.
    pub fn new(target: &Path, arguments: &[String], elevate: bool) -> Self {
        // 1. Elevation prefix, if any.
        let mut tokens: Vec<OsString> = Vec::with_capacity(arguments.len() + 3);
        if elevate {
            tokens.extend(ELEVATION_PREFIX.iter().map(OsString::from));
        }
        // 2. The script, then its collected values untouched.
        tokens.push(target.as_os_str().to_os_string());
        tokens.extend(arguments.iter().map(OsString::from));

        // 3. Split into program and arguments for `Command`.

        let mut tokens = tokens.into_iter();
        // `tokens` holds at least the target path.
        let program = tokens.next().unwrap_or_default();
        Self {
            program,
            args: tokens.collect(),
        }
    }

    /// The full argv, program first.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// A human readable rendering, for logs and notices only.
    pub fn display(&self) -> String {
        self.argv()
            .iter()
            .map(|token| token.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a launched script ended, from the menu's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The child exited on its own. The code is informational only.
    Completed { code: Option<i32> },
    /// The user interrupted the child.
    Interrupted,
}

/// Whether colors are used for menu output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Use colors when stdout is a capable terminal.
    #[default]
    Auto,
    Always,
    Never,
}
