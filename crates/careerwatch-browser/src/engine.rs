use crate::actions::{BrowserLauncher, PageRenderer, SCROLL_TO_BOTTOM_JS};
use crate::error::{BrowserError, Result};
use crate::fingerprint::RequestProfile;
use careerwatch_core::{BrowserConfig, FetchConfig};
use chromiumoxide::browser::{Browser, BrowserConfig as ChromiumConfig};
use chromiumoxide::cdp::browser_protocol::network::{
    Headers, SetExtraHttpHeadersParams, SetUserAgentOverrideParams,
};
use chromiumoxide::page::Page;
use futures_util::stream::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a closed browser gets to exit before it is killed.
const PROCESS_EXIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Launches a fresh Chromium per rendered fetch.
#[derive(Debug, Clone)]
pub struct ChromiumLauncher {
    browser: BrowserConfig,
    fetch: FetchConfig,
}

impl ChromiumLauncher {
    pub fn new(browser: BrowserConfig, fetch: FetchConfig) -> Self {
        Self { browser, fetch }
    }

    fn chromium_config(&self, profile: &RequestProfile) -> Result<ChromiumConfig> {
        let mut builder = ChromiumConfig::builder()
            .no_sandbox()
            .window_size(self.browser.window_width, self.browser.window_height)
            .arg(format!("--user-agent={}", profile.user_agent));

        if !self.browser.headless {
            builder = builder.with_head();
        }

        builder.build().map_err(BrowserError::ChromiumError)
    }
}

#[async_trait::async_trait]
impl BrowserLauncher for ChromiumLauncher {
    async fn launch(&self) -> Result<Box<dyn PageRenderer>> {
        let profile = RequestProfile::for_config(&self.fetch);
        let config = self.chromium_config(&profile)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BrowserError::LaunchError(e.to_string()))?;

        // Spawn browser handler
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::trace!("browser handler event error: {}", e);
                }
            }
        });

        let mut session = ChromiumSession {
            browser,
            page: None,
            handler_task,
        };

        match open_page(&session.browser, &profile).await {
            Ok(page) => {
                session.page = Some(page);
                tracing::debug!("Launched headless browser session");
                Ok(Box::new(session))
            }
            Err(e) => {
                // The browser process is already running; release it before reporting.
                if let Err(close_err) = Box::new(session).close().await {
                    tracing::warn!("Failed to close browser after setup error: {}", close_err);
                }
                Err(e)
            }
        }
    }
}

async fn open_page(browser: &Browser, profile: &RequestProfile) -> Result<Page> {
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| BrowserError::ChromiumError(format!("failed to create page: {e}")))?;

    page.execute(SetUserAgentOverrideParams::new(profile.user_agent.clone()))
        .await
        .map_err(|e| BrowserError::ChromiumError(format!("failed to set user agent: {e}")))?;

    let headers = Headers::new(serde_json::json!({ "Accept": profile.accept }));
    page.execute(SetExtraHttpHeadersParams::new(headers))
        .await
        .map_err(|e| BrowserError::ChromiumError(format!("failed to set headers: {e}")))?;

    Ok(page)
}

/// One Chromium process with a single page.
pub struct ChromiumSession {
    browser: Browser,
    page: Option<Page>,
    handler_task: JoinHandle<()>,
}

impl ChromiumSession {
    fn page(&self) -> Result<&Page> {
        self.page
            .as_ref()
            .ok_or_else(|| BrowserError::ChromiumError("session has no page".to_string()))
    }

    async fn kill_process(&mut self) {
        match self.browser.kill().await {
            Some(Err(e)) => tracing::warn!("Failed to kill browser process: {}", e),
            Some(Ok(())) | None => {}
        }
    }
}

#[async_trait::async_trait]
impl PageRenderer for ChromiumSession {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()> {
        let page = self.page()?;
        match tokio::time::timeout(timeout, page.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(BrowserError::NavigationError(format!("{url}: {e}"))),
            Err(_) => Err(BrowserError::Timeout(format!(
                "navigation to {url} did not finish within {timeout:?}"
            ))),
        }
    }

    async fn settle(&mut self, delay: Duration) -> Result<()> {
        tokio::time::sleep(delay).await;
        Ok(())
    }

    async fn scroll_to_bottom(&mut self) -> Result<()> {
        self.page()?
            .evaluate(SCROLL_TO_BOTTOM_JS)
            .await
            .map_err(|e| BrowserError::ScriptError(e.to_string()))?;
        Ok(())
    }

    async fn extract_text(&mut self) -> Result<String> {
        self.page()?
            .content()
            .await
            .map_err(|e| BrowserError::ContentError(e.to_string()))
    }

    async fn close(mut self: Box<Self>) -> Result<()> {
        let closed = self
            .browser
            .close()
            .await
            .map(|_| ())
            .map_err(|e| BrowserError::ChromiumError(format!("failed to close browser: {e}")));

        if closed.is_ok() {
            match tokio::time::timeout(PROCESS_EXIT_TIMEOUT, self.browser.wait()).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::debug!("Waiting for browser process exit failed: {}", e),
                Err(_) => {
                    tracing::warn!(
                        "Browser process still running after {:?}, killing it",
                        PROCESS_EXIT_TIMEOUT
                    );
                    self.kill_process().await;
                }
            }
        } else {
            self.kill_process().await;
        }

        self.handler_task.abort();
        tracing::debug!("Closed headless browser session");

        closed
    }
}

impl Drop for ChromiumSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}
