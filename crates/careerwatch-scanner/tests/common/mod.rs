#![allow(dead_code)]

use async_trait::async_trait;
use careerwatch_browser::{BrowserError, BrowserLauncher, PageRenderer};
use careerwatch_scanner::{ProbeSettings, ScanError, StaticFetcher};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Probe settings with no waiting, for tests that don't care about timing.
pub fn instant_settings() -> ProbeSettings {
    ProbeSettings {
        retries: 3,
        retry_delay: Duration::ZERO,
        navigation_timeout: Duration::from_secs(30),
        settle_delay: Duration::ZERO,
        scroll_delay: Duration::ZERO,
        target_timeout: Duration::from_secs(120),
        close_timeout: Duration::from_secs(30),
    }
}

pub fn connection_refused(url: &str) -> ScanError {
    ScanError::Transport {
        url: url.to_string(),
        status: None,
        reason: "error sending request: connection refused".to_string(),
    }
}

/// Static fetcher that replays a fixed script of responses, then repeats the last one.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<String, ScanError>>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<Result<String, ScanError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StaticFetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> careerwatch_scanner::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().unwrap();
        match script.pop_front() {
            Some(response) => response,
            None => Err(connection_refused(url)),
        }
    }
}

/// Static fetcher serving per-URL bodies after a per-URL delay.
pub struct RoutedFetcher {
    routes: HashMap<String, (Duration, String)>,
}

impl RoutedFetcher {
    pub fn new(routes: &[(&str, u64, &str)]) -> Arc<Self> {
        Arc::new(Self {
            routes: routes
                .iter()
                .map(|(url, delay_ms, body)| {
                    (
                        (*url).to_string(),
                        (Duration::from_millis(*delay_ms), (*body).to_string()),
                    )
                })
                .collect(),
        })
    }
}

#[async_trait]
impl StaticFetcher for RoutedFetcher {
    async fn fetch(&self, url: &str) -> careerwatch_scanner::Result<String> {
        match self.routes.get(url) {
            Some((delay, body)) => {
                tokio::time::sleep(*delay).await;
                Ok(body.clone())
            }
            None => Err(connection_refused(url)),
        }
    }
}

/// What the fake browser does once navigated.
#[derive(Clone)]
pub enum RenderScript {
    Content(String),
    LaunchFails,
    NavigationFails(String),
    NavigationHangs,
    /// Renders the content, then never finishes closing.
    CloseHangs(String),
}

/// Counts launches and closes so tests can check session release.
#[derive(Clone)]
pub struct FakeLauncher {
    script: RenderScript,
    pub launches: Arc<AtomicUsize>,
    pub closes: Arc<AtomicUsize>,
}

impl FakeLauncher {
    pub fn new(script: RenderScript) -> Arc<Self> {
        Arc::new(Self {
            script,
            launches: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn content(html: &str) -> Arc<Self> {
        Self::new(RenderScript::Content(html.to_string()))
    }

    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrowserLauncher for FakeLauncher {
    async fn launch(&self) -> careerwatch_browser::Result<Box<dyn PageRenderer>> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        if matches!(self.script, RenderScript::LaunchFails) {
            return Err(BrowserError::LaunchError(
                "could not find chromium executable".to_string(),
            ));
        }
        Ok(Box::new(FakePage {
            script: self.script.clone(),
            closes: self.closes.clone(),
            navigated: false,
        }))
    }
}

struct FakePage {
    script: RenderScript,
    closes: Arc<AtomicUsize>,
    navigated: bool,
}

#[async_trait]
impl PageRenderer for FakePage {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> careerwatch_browser::Result<()> {
        match &self.script {
            RenderScript::NavigationFails(reason) => {
                Err(BrowserError::NavigationError(format!("{url}: {reason}")))
            }
            RenderScript::NavigationHangs => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(BrowserError::Timeout(format!("{url} after {timeout:?}")))
            }
            _ => {
                self.navigated = true;
                Ok(())
            }
        }
    }

    async fn settle(&mut self, delay: Duration) -> careerwatch_browser::Result<()> {
        tokio::time::sleep(delay).await;
        Ok(())
    }

    async fn scroll_to_bottom(&mut self) -> careerwatch_browser::Result<()> {
        Ok(())
    }

    async fn extract_text(&mut self) -> careerwatch_browser::Result<String> {
        match &self.script {
            RenderScript::Content(html) | RenderScript::CloseHangs(html) if self.navigated => {
                Ok(html.clone())
            }
            _ => Err(BrowserError::ContentError("page not loaded".to_string())),
        }
    }

    async fn close(self: Box<Self>) -> careerwatch_browser::Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if matches!(self.script, RenderScript::CloseHangs(_)) {
            std::future::pending::<()>().await;
        }
        Ok(())
    }
}
