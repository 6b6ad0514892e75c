// src/system/signals.rs

use crate::CancellationToken;
use std::sync::atomic::Ordering;

/// Routes SIGINT (Ctrl+C) to whoever is currently waiting.
///
/// The handler only records the interrupt. A running child is killed by the executor,
/// an idle prompt turns it into the end of the session.
#[derive(Debug, Clone, Default)]
pub struct InterruptState {
    interrupted: CancellationToken,
}

impl InterruptState {
    /// Installs the process-wide Ctrl+C handler. Only one may exist per process.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let state = Self::default();
        let handler_state = state.clone();
        ctrlc::set_handler(move || handler_state.record_interrupt())?;
        log::debug!("Ctrl+C handler installed.");
        Ok(state)
    }

    pub(crate) fn record_interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Returns whether an interrupt arrived since the last call, and clears it.
    pub fn take_interrupt(&self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }
}
