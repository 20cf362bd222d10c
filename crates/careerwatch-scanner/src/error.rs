use careerwatch_browser::BrowserError;
use careerwatch_core::CoreError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("transport error for {url}: {reason}")]
    Transport {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("request setup failed: {0}")]
    Setup(String),

    #[error("rendering failed: {0}")]
    Render(#[from] BrowserError),

    #[error("configuration error: {0}")]
    Configuration(#[from] CoreError),

    #[error("evaluation exceeded {0:?}")]
    TimedOut(Duration),

    #[error("evaluation cancelled")]
    Cancelled,
}

impl ScanError {
    /// Whether the static phase should try again after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScanError::Transport { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
