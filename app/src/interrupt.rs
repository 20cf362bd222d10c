//! Ctrl-C routing.
//!
//! Once a search has installed the listener, Ctrl-C cancels the running
//! search, or exits the program when no search is running.

use careerwatch_scanner::CancellationToken;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Exit status for a Ctrl-C outside a search (128 + SIGINT).
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, Default)]
pub struct Interrupts {
    active: Arc<Mutex<Option<CancellationToken>>>,
    listening: Arc<AtomicBool>,
}

/// Clears the active search when dropped.
pub struct SearchGuard {
    active: Arc<Mutex<Option<CancellationToken>>>,
}

impl Drop for SearchGuard {
    fn drop(&mut self) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

impl Interrupts {
    /// Register `cancel` as the running search, installing the listener on
    /// first use. Must be called inside a tokio runtime.
    pub fn begin(&self, cancel: &CancellationToken) -> SearchGuard {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = Some(cancel.clone());

        if !self.listening.swap(true, Ordering::SeqCst) {
            let interrupts = self.clone();
            tokio::spawn(async move {
                while tokio::signal::ctrl_c().await.is_ok() {
                    if !interrupts.route() {
                        let _ = console::Term::stdout().show_cursor();
                        std::process::exit(INTERRUPTED_EXIT_CODE);
                    }
                }
            });
        }

        SearchGuard {
            active: self.active.clone(),
        }
    }

    /// Cancel the running search. Returns false when none is running.
    pub fn route(&self) -> bool {
        match self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(cancel) => {
                tracing::warn!("Interrupted, closing open browser sessions");
                cancel.cancel();
                true
            }
            None => false,
        }
    }
}
