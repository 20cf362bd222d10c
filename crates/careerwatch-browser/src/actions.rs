use crate::error::Result;
use std::time::Duration;

/// Script that scrolls to the bottom of the document to trigger lazy loading.
pub const SCROLL_TO_BOTTOM_JS: &str = "window.scrollTo(0, document.body.scrollHeight)";

/// Starts rendering sessions.
///
/// One session is launched per rendered fetch; the scanner never pools them.
#[async_trait::async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// Launch a browser and open a blank page ready for navigation.
    async fn launch(&self) -> Result<Box<dyn PageRenderer>>;
}

/// A single rendering session (one browser, one page).
///
/// `close` consumes the session, so a caller that owns the box can release
/// it at most once.
#[async_trait::async_trait]
pub trait PageRenderer: Send {
    /// Navigate to a URL and wait for the load event, bounded by `timeout`.
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()>;

    /// Let asynchronous content populate.
    async fn settle(&mut self, delay: Duration) -> Result<()>;

    /// Scroll to the bottom of the document.
    async fn scroll_to_bottom(&mut self) -> Result<()>;

    /// Full rendered markup of the current document.
    async fn extract_text(&mut self) -> Result<String>;

    /// Shut the browser down.
    async fn close(self: Box<Self>) -> Result<()>;
}
