//! careerwatch scanner - fetch-with-fallback keyword detection.
//!
//! For each (company, URL) target the scanner tries a fast static fetch,
//! falls back to a headless-browser render when the static fetch is
//! inconclusive or keeps failing, and classifies the outcome as
//! found, not found, or a fetch error.
//!
//! # Features
//!
//! - Word-boundary, case-insensitive keyword matching over raw markup
//! - Static fetch retries with a fixed backoff on transport failure
//! - Rendering fallback with settle and scroll delays for lazy content
//! - Per-target deadline and caller-driven cancellation
//! - Optional order-preserving concurrency across targets
//!
//! # Example
//!
//! ```rust,ignore
//! use careerwatch_scanner::{HttpFetcher, KeywordProbe, ProbeSettings, ScanOrchestrator};
//! use careerwatch_browser::ChromiumLauncher;
//! use std::sync::Arc;
//!
//! let probe = KeywordProbe::new(
//!     Arc::new(HttpFetcher::new(&config.fetch)?),
//!     Arc::new(ChromiumLauncher::new(config.browser.clone(), config.fetch.clone())),
//!     ProbeSettings::from_config(&config),
//! );
//! let orchestrator = ScanOrchestrator::new(probe);
//! let summary = orchestrator.run(&targets, &keyword, &mut sink, &cancel).await;
//! ```

pub mod error;
pub mod fetcher;
pub mod matcher;
pub mod orchestrator;
pub mod probe;
pub mod sink;

pub use error::{Result, ScanError};
pub use fetcher::{HttpFetcher, StaticFetcher};
pub use matcher::KeywordMatcher;
pub use orchestrator::{RunSummary, ScanOrchestrator};
pub use probe::{Evaluation, FetchAttempt, FetchMethod, KeywordProbe, MatchResult, ProbeSettings};
pub use sink::ResultSink;
pub use tokio_util::sync::CancellationToken;
