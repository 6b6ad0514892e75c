//! `racoon` turns a directory tree into an interactive terminal menu.
//!
//! Directories become submenus and executable files become actions. Scripts can
//! describe themselves through comment markers (`# LABEL:`, `# SUDO:`, `# ARG:`),
//! which the menu reads on every render.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Shared flag raised by the signal handler and consumed by whoever is waiting.
pub type CancellationToken = Arc<AtomicBool>;

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
