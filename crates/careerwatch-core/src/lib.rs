//! careerwatch core - foundation crate for the careerwatch keyword searcher.
//!
//! This crate provides the shared types, error handling and configuration
//! management that the browser, scanner and store crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Validated domain types (`Target`, `Keyword`)
//!
//! # Example
//!
//! ```rust
//! use careerwatch_core::{AppConfig, Keyword, Target};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! config.validate()?;
//!
//! let keyword = Keyword::new("engineer")?;
//! let target = Target::new("Acme", "https://acme.example/careers");
//! target.validate()?;
//! assert_eq!(keyword.as_str(), "engineer");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, BrowserConfig, FetchConfig, ScanningConfig, StorageConfig};
pub use error::{ConfigError, ConfigResult, CoreError, Result};
pub use types::{Keyword, Target};
