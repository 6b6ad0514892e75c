//! # System Interaction Layer
//!
//! The boundary between the menu engine and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: spawns scripts with inherited standard streams and waits for them,
//!   killing the child when the user presses `Ctrl+C`.
//! - **`signals`**: installs the `Ctrl+C` handler and exposes the interrupt flag.
//! - **`terminal`**: re-launches racoon inside a terminal emulator when it was started
//!   without one.

pub mod executor;
pub mod signals;
pub mod terminal;
