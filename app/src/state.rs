//! Application state shared by commands.

use crate::cli::Cli;
use crate::interrupt::Interrupts;
use anyhow::Context;
use careerwatch_core::AppConfig;
use careerwatch_store::UrlStore;

/// Loaded configuration plus the URL store it points at.
pub struct AppState {
    pub config: AppConfig,
    pub store: UrlStore,
    pub interrupts: Interrupts,
}

impl AppState {
    /// Build state from a config, validating it first.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid configuration")?;
        let store = UrlStore::new(config.storage.url_file.clone());
        Ok(Self {
            config,
            store,
            interrupts: Interrupts::default(),
        })
    }

    /// Load config (file, then environment, then command-line flags).
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut config =
            AppConfig::load_with_env(cli.config.as_deref()).context("failed to load config")?;

        if let Some(path) = &cli.url_file {
            config.storage.url_file = path.clone();
        }
        if let Some(path) = &cli.report {
            config.storage.report_path = path.clone();
        }
        if let Some(concurrency) = cli.concurrency {
            config.scanning.concurrent_scans = concurrency;
        }

        Self::new(config)
    }
}
