//! Story navigation
//!
//! Resolves the target URL and drives the browser there. With no explicit
//! story, the stories grid is opened and the first available card clicked.

use thirtyfour::prelude::*;
use tracing::info;
use url::Url;

use crate::browser::{page, selectors};
use crate::core::{BotError, Config, Result};

/// Resolve the activity URL: full URLs pass through, paths are joined onto
/// the stories base, absent means the stories grid itself.
pub fn target_url(story_path: Option<&str>) -> String {
    match story_path {
        Some(s) if Url::parse(s).is_ok() => s.to_string(),
        Some(s) if s.starts_with('/') => format!("{}{}", selectors::STORIES_URL, s),
        Some(s) => format!("{}/{}", selectors::STORIES_URL, s),
        None => selectors::STORIES_URL.to_string(),
    }
}

/// Navigate to the configured story, opening the first card from the grid
/// when no explicit story was given.
pub async fn open_story(driver: &WebDriver, config: &Config) -> Result<()> {
    let url = target_url(config.story_path.as_deref());
    info!(%url, "Opening story");
    driver.goto(&url).await?;

    page::wait_for_first(driver, &["body"], config.wait(), config.poll_interval())
        .await
        .ok_or_else(|| BotError::navigation("story page failed to load"))?;

    if config.story_path.is_some() {
        return Ok(());
    }

    // On the grid: open the first available story card
    let current = driver.current_url().await?;
    if current.as_str().contains("duolingo.com/stories") {
        let card = page::wait_for_first(
            driver,
            selectors::STORY_CARDS,
            config.wait(),
            config.poll_interval(),
        )
        .await
        .ok_or_else(|| BotError::navigation("could not find a story to open"))?;

        if !page::safe_click(driver, &card).await {
            return Err(BotError::navigation("could not open the first story card"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url_default_is_grid() {
        assert_eq!(target_url(None), "https://www.duolingo.com/stories");
    }

    #[test]
    fn test_target_url_joins_path() {
        assert_eq!(
            target_url(Some("/en/es-juan-1")),
            "https://www.duolingo.com/stories/en/es-juan-1"
        );
    }

    #[test]
    fn test_target_url_adds_missing_slash() {
        assert_eq!(
            target_url(Some("en/es-juan-1")),
            "https://www.duolingo.com/stories/en/es-juan-1"
        );
    }

    #[test]
    fn test_target_url_passes_full_urls_through() {
        let full = "https://www.duolingo.com/stories/en/fr-lily-2";
        assert_eq!(target_url(Some(full)), full);
    }
}
