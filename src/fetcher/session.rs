//! Scoped browser process for rendered fetches
//!
//! A `BrowserSession` owns one Chromium process, its CDP event handler task
//! and a throwaway profile directory. Call [`BrowserSession::close`] when
//! done; if the session is dropped instead (early return, panic) the handler
//! is aborted and the process is killed. Profile removal on that path is
//! best-effort: the kill is asynchronous, so removal is deferred briefly and
//! any failure is logged with the leftover path.

use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::task::{self, JoinHandle};
use tracing::{error, info, trace, warn};

use super::FetchError;
use crate::browser_setup::resolve_browser_executable;

/// Settings needed to start a browser for one fetch
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub chrome_executable: Option<PathBuf>,
    pub headless: bool,
    pub user_agent: String,
    pub request_timeout: Duration,
}

/// Delay before removing the profile of a session dropped without `close()`
const PROFILE_REMOVAL_GRACE: Duration = Duration::from_millis(500);

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    // Taken and removed explicitly once the process has exited.
    profile_dir: Option<TempDir>,
    closed: bool,
}

impl BrowserSession {
    /// Start a headless Chromium with a fresh profile
    pub async fn launch(options: &LaunchOptions) -> Result<Self, FetchError> {
        let chrome_path = resolve_browser_executable(options.chrome_executable.as_deref()).await?;

        let profile_dir = tempfile::Builder::new()
            .prefix("featured_snippet_chrome_")
            .tempdir()?;

        let mut config_builder = BrowserConfigBuilder::default()
            .request_timeout(options.request_timeout)
            .window_size(1920, 1080)
            .user_data_dir(profile_dir.path().to_path_buf())
            .chrome_executable(chrome_path);

        if options.headless {
            config_builder = config_builder.headless_mode(HeadlessMode::default());
        } else {
            config_builder = config_builder.with_head();
        }

        let browser_config = config_builder
            .arg(format!("--user-agent={}", options.user_agent))
            .arg("--disable-gpu")
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--disable-infobars")
            .arg("--disable-notifications")
            .arg("--disable-extensions")
            .arg("--disable-popup-blocking")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--password-store=basic")
            .arg("--use-mock-keychain")
            .arg("--mute-audio")
            .build()
            .map_err(|e| FetchError::Browser(format!("Failed to build browser config: {e}")))?;

        info!("Launching browser");
        let (browser, mut handler) = Browser::launch(browser_config).await?;

        let handler_task = task::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    let error_msg = e.to_string();
                    // CDP events chromiumoxide does not model surface as
                    // deserialization errors; they do not affect the session.
                    if error_msg.contains("data did not match any variant of untagged enum Message")
                        || error_msg.contains("Failed to deserialize WS response")
                    {
                        trace!("Suppressed benign CDP serialization error: {}", error_msg);
                    } else {
                        error!("Browser handler error: {:?}", e);
                    }
                }
            }
            trace!("Browser handler task completed");
        });

        Ok(Self {
            browser,
            handler: handler_task,
            profile_dir: Some(profile_dir),
            closed: false,
        })
    }

    #[must_use]
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser gracefully and wait for the process to exit
    ///
    /// Failures are logged, not returned: by the time the session closes the
    /// fetch result is already decided.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        self.closed = true;
        if let Some(dir) = self.profile_dir.take() {
            remove_profile(dir);
        }
        info!("Browser closed");
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        if self.closed {
            return;
        }
        let Some(dir) = self.profile_dir.take() else {
            return;
        };
        warn!(
            "BrowserSession dropped without close(); killing browser and removing {}",
            dir.path().display()
        );
        // Browser::drop starts the kill after this returns; give the process
        // time to release the profile before deleting it.
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(PROFILE_REMOVAL_GRACE).await;
                    remove_profile(dir);
                });
            }
            Err(_) => {
                remove_profile(dir);
            }
        }
    }
}

/// Delete a browser profile directory, logging the path if it survives
fn remove_profile(dir: TempDir) -> bool {
    let path = dir.path().to_path_buf();
    match dir.close() {
        Ok(()) => {
            trace!("Removed browser profile {}", path.display());
            true
        }
        Err(e) => {
            warn!("Failed to remove browser profile {}: {}", path.display(), e);
            false
        }
    }
}
