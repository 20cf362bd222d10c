//! Browser rendering for JavaScript-heavy careers pages.
//!
//! Provides the [`PageRenderer`] capability used by the scanner's rendering
//! fallback, a Chromium-backed implementation, and the request header
//! profile shared with the static fetcher.

pub mod actions;
pub mod engine;
pub mod error;
pub mod fingerprint;

pub use actions::{BrowserLauncher, PageRenderer};
pub use engine::{ChromiumLauncher, ChromiumSession};
pub use error::{BrowserError, Result};
pub use fingerprint::RequestProfile;
