use std::sync::{Mutex, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// What a Ctrl+C should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// A fetch was running and has been told to stop.
    Cancel,
    /// Nothing left to cancel; the process should quit.
    Exit,
}

/// Hands out one cancellation token per fetch.
///
/// Starting a fetch cancels the token of the previous one, so at most one
/// pipeline per controller can still be writing results.
#[derive(Debug, Default)]
pub struct FetchController {
    current: Mutex<Option<CancellationToken>>,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidates any in-flight fetch and returns the token for the next one.
    pub fn begin(&self) -> CancellationToken {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = current.take() {
            info!("superseding in-flight fetch");
            previous.cancel();
        }
        let token = CancellationToken::new();
        *current = Some(token.clone());
        token
    }

    /// Cancels the active fetch. Returns false when nothing was running.
    pub fn cancel(&self) -> bool {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        match current.take() {
            Some(token) => {
                info!("fetch cancelled");
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// First interrupt cancels the fetch; a repeated one (e.g. while a
    /// request hangs) asks the caller to quit.
    pub fn interrupt(&self) -> Interrupt {
        if self.cancel() {
            Interrupt::Cancel
        } else {
            Interrupt::Exit
        }
    }
}
