//! Terminal restore guard.

use std::io;
use tracing::{debug, warn};

/// Runs a restore function exactly once: on [`restore`](Self::restore), or on
/// drop if setup or the event loop bailed out early.
pub struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnMut() -> io::Result<()>> TerminalGuard<F> {
    /// Arms the guard.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Restores now and disarms, reporting any failure.
    pub fn restore(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(mut restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            debug!("Restoring terminal from guard");
            if let Err(e) = restore() {
                warn!(error = %e, "Failed to restore terminal");
            }
        }
    }
}
