//! Fetch-with-fallback keyword probe.
//!
//! For one target the probe tries a static GET (with retries on transport
//! failure). A match there is final. A successful fetch without a match, or
//! exhausted retries, falls through to a single rendered fetch in a headless
//! browser whose session is closed on every exit path.

use crate::error::ScanError;
use crate::fetcher::StaticFetcher;
use crate::matcher::KeywordMatcher;
use careerwatch_browser::{BrowserLauncher, PageRenderer};
use careerwatch_core::{AppConfig, Keyword, Target};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Characters of fetched content shown in debug previews.
const PREVIEW_CHARS: usize = 200;

/// How a page was fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMethod {
    Static,
    Rendered,
}

/// One fetch attempt within a single evaluation.
///
/// Content is matched as soon as it arrives and only its length is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchAttempt {
    pub method: FetchMethod,
    pub succeeded: bool,
    pub content_len: Option<usize>,
    pub error: Option<String>,
}

impl FetchAttempt {
    fn succeeded(method: FetchMethod, content: &str) -> Self {
        Self {
            method,
            succeeded: true,
            content_len: Some(content.len()),
            error: None,
        }
    }

    fn failed(method: FetchMethod, error: &ScanError) -> Self {
        Self {
            method,
            succeeded: false,
            content_len: None,
            error: Some(error.to_string()),
        }
    }
}

/// Outcome of evaluating one target against one keyword.
#[derive(Debug)]
pub enum MatchResult {
    /// Keyword located via word-boundary match.
    Found,
    /// Rendered content fetched, keyword absent.
    NotFound,
    /// Every fetch attempt failed; carries the terminal cause.
    FetchError(ScanError),
}

impl MatchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found)
    }

    /// Human-readable cause for `FetchError`.
    pub fn cause(&self) -> Option<String> {
        match self {
            MatchResult::FetchError(e) => Some(e.to_string()),
            _ => None,
        }
    }

    /// Short lowercase name used in logs and report styling.
    pub fn label(&self) -> &'static str {
        match self {
            MatchResult::Found => "found",
            MatchResult::NotFound => "not-found",
            MatchResult::FetchError(_) => "error",
        }
    }
}

/// Everything known about one target after a run.
#[derive(Debug)]
pub struct Evaluation {
    pub target: Target,
    pub keyword: Keyword,
    pub result: MatchResult,
    pub attempts: Vec<FetchAttempt>,
    pub elapsed: Duration,
}

impl Evaluation {
    /// Whether the rendering fallback was reached.
    pub fn rendered(&self) -> bool {
        self.attempts
            .iter()
            .any(|a| a.method == FetchMethod::Rendered)
    }

    /// Number of attempts made with `method`.
    pub fn attempts_with(&self, method: FetchMethod) -> usize {
        self.attempts.iter().filter(|a| a.method == method).count()
    }
}

/// Timing and retry policy for a probe.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Static attempts (at least 1)
    pub retries: u32,
    pub retry_delay: Duration,
    pub navigation_timeout: Duration,
    pub settle_delay: Duration,
    pub scroll_delay: Duration,
    /// Bound on the whole evaluation of one target
    pub target_timeout: Duration,
    /// Bound on releasing a browser session, applied after the deadline
    pub close_timeout: Duration,
}

impl ProbeSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            retries: config.fetch.retries,
            retry_delay: config.fetch.retry_delay(),
            navigation_timeout: config.browser.navigation_timeout(),
            settle_delay: config.browser.settle_delay(),
            scroll_delay: config.browser.scroll_delay(),
            target_timeout: config.scanning.target_timeout(),
            close_timeout: config.browser.navigation_timeout(),
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

enum StaticOutcome {
    Found,
    NotMatched,
    Exhausted(ScanError),
    Fatal(ScanError),
}

/// Runs the fetch-with-fallback pipeline for single targets.
pub struct KeywordProbe {
    fetcher: Arc<dyn StaticFetcher>,
    launcher: Arc<dyn BrowserLauncher>,
    settings: ProbeSettings,
}

impl KeywordProbe {
    pub fn new(
        fetcher: Arc<dyn StaticFetcher>,
        launcher: Arc<dyn BrowserLauncher>,
        settings: ProbeSettings,
    ) -> Self {
        Self {
            fetcher,
            launcher,
            settings,
        }
    }

    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    /// Evaluate one target. Never fails: every error ends up in
    /// [`MatchResult::FetchError`].
    pub async fn fetch_and_match(
        &self,
        target: &Target,
        keyword: &Keyword,
        cancel: &CancellationToken,
    ) -> Evaluation {
        let started = Instant::now();
        let mut attempts = Vec::new();

        let result = self.evaluate(target, keyword, cancel, &mut attempts).await;

        match &result {
            MatchResult::FetchError(e) => {
                tracing::warn!("{} ({}): {}", target.company, target.url, e);
            }
            other => {
                tracing::info!(
                    "{} ({}): {} after {} attempt(s)",
                    target.company,
                    target.url,
                    other.label(),
                    attempts.len()
                );
            }
        }

        Evaluation {
            target: target.clone(),
            keyword: keyword.clone(),
            result,
            attempts,
            elapsed: started.elapsed(),
        }
    }

    async fn evaluate(
        &self,
        target: &Target,
        keyword: &Keyword,
        cancel: &CancellationToken,
        attempts: &mut Vec<FetchAttempt>,
    ) -> MatchResult {
        if let Err(e) = target.validate() {
            return MatchResult::FetchError(e.into());
        }
        let matcher = match KeywordMatcher::new(keyword) {
            Ok(matcher) => matcher,
            Err(e) => return MatchResult::FetchError(e),
        };

        let deadline = Instant::now() + self.settings.target_timeout;

        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => return MatchResult::FetchError(ScanError::Cancelled),
            outcome = tokio::time::timeout_at(
                deadline,
                self.static_phase(&target.url, &matcher, attempts),
            ) => match outcome {
                Ok(outcome) => outcome,
                Err(_) => {
                    return MatchResult::FetchError(ScanError::TimedOut(self.settings.target_timeout))
                }
            },
        };

        match outcome {
            StaticOutcome::Found => return MatchResult::Found,
            StaticOutcome::Fatal(e) => return MatchResult::FetchError(e),
            StaticOutcome::NotMatched => {
                tracing::debug!(
                    "'{}' not in static content of {}, rendering",
                    keyword,
                    target.url
                );
            }
            StaticOutcome::Exhausted(e) => {
                tracing::debug!(
                    "Static fetch exhausted for {} ({}), rendering",
                    target.url,
                    e
                );
            }
        }

        self.render_phase(&target.url, &matcher, deadline, cancel, attempts)
            .await
    }

    async fn static_phase(
        &self,
        url: &str,
        matcher: &KeywordMatcher,
        attempts: &mut Vec<FetchAttempt>,
    ) -> StaticOutcome {
        let retries = self.settings.retries.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.fetcher.fetch(url).await {
                Ok(body) => {
                    attempts.push(FetchAttempt::succeeded(FetchMethod::Static, &body));
                    tracing::debug!("Static preview for {}: {}...", url, preview(&body));

                    // A miss here is not conclusive; content may load dynamically.
                    return if matcher.matches(&body) {
                        StaticOutcome::Found
                    } else {
                        StaticOutcome::NotMatched
                    };
                }
                Err(e) if e.is_retryable() => {
                    attempts.push(FetchAttempt::failed(FetchMethod::Static, &e));
                    tracing::warn!(
                        "Static attempt {}/{} failed for {}: {}",
                        attempt,
                        retries,
                        url,
                        e
                    );

                    if attempt >= retries {
                        return StaticOutcome::Exhausted(e);
                    }
                    tokio::time::sleep(self.settings.retry_delay).await;
                }
                Err(e) => {
                    attempts.push(FetchAttempt::failed(FetchMethod::Static, &e));
                    return StaticOutcome::Fatal(e);
                }
            }
        }
    }

    async fn render_phase(
        &self,
        url: &str,
        matcher: &KeywordMatcher,
        deadline: Instant,
        cancel: &CancellationToken,
        attempts: &mut Vec<FetchAttempt>,
    ) -> MatchResult {
        let launched = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ScanError::Cancelled),
            launched = tokio::time::timeout_at(deadline, self.launcher.launch()) => match launched {
                Ok(session) => session.map_err(ScanError::Render),
                Err(_) => Err(ScanError::TimedOut(self.settings.target_timeout)),
            },
        };

        let mut session = match launched {
            Ok(session) => session,
            Err(e) => {
                attempts.push(FetchAttempt::failed(FetchMethod::Rendered, &e));
                return MatchResult::FetchError(e);
            }
        };

        let rendered = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ScanError::Cancelled),
            rendered = tokio::time::timeout_at(deadline, self.render(&mut *session, url)) => {
                match rendered {
                    Ok(content) => content.map_err(ScanError::Render),
                    Err(_) => Err(ScanError::TimedOut(self.settings.target_timeout)),
                }
            }
        };

        match tokio::time::timeout(self.settings.close_timeout, session.close()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Failed to close browser for {}: {}", url, e),
            Err(_) => tracing::warn!(
                "Browser for {} did not close within {:?}, abandoning session",
                url,
                self.settings.close_timeout
            ),
        }

        match rendered {
            Ok(content) => {
                attempts.push(FetchAttempt::succeeded(FetchMethod::Rendered, &content));
                tracing::debug!("Rendered preview for {}: {}...", url, preview(&content));

                if matcher.matches(&content) {
                    MatchResult::Found
                } else {
                    MatchResult::NotFound
                }
            }
            Err(e) => {
                attempts.push(FetchAttempt::failed(FetchMethod::Rendered, &e));
                MatchResult::FetchError(e)
            }
        }
    }

    async fn render(
        &self,
        page: &mut dyn PageRenderer,
        url: &str,
    ) -> careerwatch_browser::Result<String> {
        page.navigate(url, self.settings.navigation_timeout).await?;
        page.settle(self.settings.settle_delay).await?;
        page.scroll_to_bottom().await?;
        page.settle(self.settings.scroll_delay).await?;
        page.extract_text().await
    }
}

fn preview(content: &str) -> String {
    content.chars().take(PREVIEW_CHARS).collect()
}
