//! Browser session launcher
//!
//! Opens a WebDriver session against chromedriver, bound to the operator's
//! on-disk Chrome profile so existing cookies carry the login.

use thirtyfour::prelude::*;
use thirtyfour::ChromeCapabilities;
use tracing::{info, warn};

use crate::core::{BotError, Config, Result};

/// An exclusive Chrome session for the lifetime of one run
pub struct Session {
    driver: WebDriver,
}

impl Session {
    /// Launch Chrome attached to the configured profile.
    ///
    /// Fails fatally when the session cannot be created; the most common
    /// causes are a profile locked by an already-running Chrome and an
    /// unreachable chromedriver.
    pub async fn launch(config: &Config) -> Result<Self> {
        let caps = build_capabilities(config)?;

        info!(url = %config.webdriver_url, profile = %config.profile_name, "Starting browser session");
        let driver = WebDriver::new(&config.webdriver_url, caps)
            .await
            .map_err(|e| {
                BotError::session(format!(
                    "Failed to start Chrome via {}: {}. Close any Chrome window holding \
                     the profile, and make sure chromedriver is running.",
                    config.webdriver_url, e
                ))
            })?;

        Ok(Self { driver })
    }

    /// The underlying WebDriver handle
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Quit the browser. Errors are logged, not propagated; the run outcome
    /// is already decided by the time this is called.
    pub async fn close(self) {
        if let Err(e) = self.driver.quit().await {
            warn!("Failed to close browser session: {e}");
        }
    }
}

fn build_capabilities(config: &Config) -> Result<ChromeCapabilities> {
    let mut caps = DesiredCapabilities::chrome();

    // Use installed Chrome with the operator's real profile so the session
    // cookies are already in place
    caps.add_arg(&format!(
        "--user-data-dir={}",
        config.user_data_dir.display()
    ))?;
    caps.add_arg(&format!("--profile-directory={}", config.profile_name))?;
    caps.add_arg("--disable-gpu")?;
    caps.add_arg("--disable-dev-shm-usage")?;
    caps.add_arg("--no-sandbox")?;
    caps.add_arg("--window-size=1280,1000")?;
    if config.headless {
        caps.add_arg("--headless=new")?;
    }

    Ok(caps)
}
