//! Static (non-rendering) page fetching.

use crate::error::{Result, ScanError};
use async_trait::async_trait;
use careerwatch_browser::RequestProfile;
use careerwatch_core::FetchConfig;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

/// Performs one plain HTTP GET.
///
/// Implementations return [`ScanError::Transport`] for failures worth
/// retrying (connection, timeout, non-2xx status) and [`ScanError::Setup`]
/// for failures that another attempt cannot fix.
#[async_trait]
pub trait StaticFetcher: Send + Sync {
    /// Fetch `url` and return the decoded body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// `reqwest`-backed fetcher sending a browser-like header set.
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Create a fetcher with the configured per-request timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ScanError::Setup(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl StaticFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let profile = RequestProfile::for_config(&self.config);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, profile.user_agent)
            .header(ACCEPT, profile.accept)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| classify(url, &e))?;

        response.text().await.map_err(|e| classify(url, &e))
    }
}

fn classify(url: &str, error: &reqwest::Error) -> ScanError {
    if error.is_builder() {
        ScanError::Setup(format!("{url}: {error}"))
    } else {
        ScanError::Transport {
            url: url.to_string(),
            status: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
