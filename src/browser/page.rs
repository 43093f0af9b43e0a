//! Page interaction layer
//!
//! `StoryPage` is the seam between the step loop and the live DOM: the loop
//! is written against the trait so its policy can be tested with a scripted
//! page. `DriverPage` is the WebDriver-backed implementation. The DOM is
//! treated as an externally-owned resource; absent elements are reported as
//! `false`, never as errors.

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::browser::selectors;
use crate::core::Result;

/// One story page's interactive surface, as the step loop sees it
#[async_trait]
pub trait StoryPage {
    /// Click a continue/next/check control if one is present
    async fn click_continue(&self) -> Result<bool>;

    /// Tap every token of a word-bank challenge, if one is shown
    async fn tap_tokens(&self) -> Result<bool>;

    /// Click a random multiple-choice option, if any are shown.
    /// Best-effort guess only; there is deliberately no correctness logic.
    async fn choose_option(&self) -> Result<bool>;

    /// Type a throwaway answer into a text challenge, if one is shown
    async fn fill_text_input(&self) -> Result<bool>;

    /// Best-effort click of a check/submit control after answering
    async fn submit_answer(&self) -> Result<()>;

    /// Whether an end-of-story indicator is visible
    async fn is_complete(&self) -> Result<bool>;
}

/// Live implementation over a WebDriver session
pub struct DriverPage<'a> {
    driver: &'a WebDriver,
}

impl<'a> DriverPage<'a> {
    pub fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    async fn click_first(&self, css: &[&str]) -> bool {
        for sel in css {
            if let Ok(el) = self.driver.find(By::Css(*sel)).await {
                if safe_click(self.driver, &el).await {
                    debug!(selector = *sel, "Clicked");
                    return true;
                }
            }
        }
        false
    }

    async fn click_labeled(&self, labels: &[&str]) -> bool {
        for xpath in selectors::label_xpaths(labels) {
            if let Ok(el) = self.driver.find(By::XPath(xpath.as_str())).await {
                if safe_click(self.driver, &el).await {
                    debug!(%xpath, "Clicked by label");
                    return true;
                }
            }
        }
        false
    }
}

#[async_trait]
impl StoryPage for DriverPage<'_> {
    async fn click_continue(&self) -> Result<bool> {
        if self.click_first(selectors::CONTINUE_BUTTONS).await {
            return Ok(true);
        }
        Ok(self.click_labeled(selectors::ADVANCE_LABELS).await)
    }

    async fn tap_tokens(&self) -> Result<bool> {
        for sel in selectors::TAP_TOKENS {
            let tokens = self
                .driver
                .find_all(By::Css(*sel))
                .await
                .unwrap_or_default();
            // A lone "token" is usually a mismatched control; word banks
            // have at least two
            if tokens.len() >= 2 {
                for token in &tokens {
                    safe_click(self.driver, token).await;
                    sleep(Duration::from_millis(50)).await;
                }
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn choose_option(&self) -> Result<bool> {
        for sel in selectors::CHOICE_OPTIONS {
            let choices = self
                .driver
                .find_all(By::Css(*sel))
                .await
                .unwrap_or_default();
            let pick = choices.choose(&mut rand::rng()).cloned();
            if let Some(choice) = pick {
                safe_click(self.driver, &choice).await;
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn fill_text_input(&self) -> Result<bool> {
        for sel in selectors::TEXT_INPUTS {
            if let Ok(el) = self.driver.find(By::Css(*sel)).await {
                if el.clear().await.is_err() || el.send_keys("a").await.is_err() {
                    continue;
                }
                let _ = el.send_keys(Key::Enter + "").await;
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn submit_answer(&self) -> Result<()> {
        self.click_first(selectors::CHECK_BUTTONS).await;
        Ok(())
    }

    async fn is_complete(&self) -> Result<bool> {
        for sel in selectors::COMPLETION_INDICATORS {
            let found = self
                .driver
                .find_all(By::Css(*sel))
                .await
                .unwrap_or_default();
            if !found.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// First element matching any of the selectors, or None
pub(crate) async fn find_first(driver: &WebDriver, css: &[&str]) -> Option<WebElement> {
    for sel in css {
        if let Ok(el) = driver.find(By::Css(*sel)).await {
            return Some(el);
        }
    }
    None
}

/// Poll for any of the selectors until one appears or the wait elapses
pub(crate) async fn wait_for_first(
    driver: &WebDriver,
    css: &[&str],
    wait: Duration,
    poll_interval: Duration,
) -> Option<WebElement> {
    let deadline = Instant::now() + wait;
    loop {
        if let Some(el) = find_first(driver, css).await {
            return Some(el);
        }
        if Instant::now() >= deadline {
            return None;
        }
        sleep(poll_interval).await;
    }
}

/// Scroll into view and click; if the click is intercepted by an overlay,
/// fall back to a JavaScript click.
pub(crate) async fn safe_click(driver: &WebDriver, el: &WebElement) -> bool {
    let _ = el.scroll_into_view().await;
    if el.click().await.is_ok() {
        return true;
    }
    match el.to_json() {
        Ok(arg) => driver
            .execute("arguments[0].click();", vec![arg])
            .await
            .is_ok(),
        Err(_) => false,
    }
}
