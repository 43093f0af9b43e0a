//! Run orchestration
//!
//! Strictly linear: launch → authenticate → navigate → step loop → quit.
//! One browser session, one logical thread of control.

pub mod auth;
pub mod navigate;
pub mod stepper;

pub use stepper::{Outcome, StopReason, Stepper};

use std::time::Duration;
use thirtyfour::WebDriver;
use tokio::time::sleep;

use crate::browser::{page, selectors, DriverPage, Session};
use crate::core::{BotError, Config, Result};

/// Pause before quitting so the site can persist the finished state
const EXIT_COOLDOWN: Duration = Duration::from_millis(1500);

/// Run one story to completion or budget exhaustion.
///
/// The browser session is closed on every path; only the happy path gets
/// the cooldown pause first.
pub async fn run(config: &Config) -> Result<Outcome> {
    let session = Session::launch(config).await?;

    let result = drive(session.driver(), config).await;
    if result.is_ok() {
        sleep(EXIT_COOLDOWN).await;
    }
    session.close().await;
    result
}

async fn drive(driver: &WebDriver, config: &Config) -> Result<Outcome> {
    // Load the homepage first so the profile's session state settles
    driver.goto(selectors::HOME_URL).await?;
    page::wait_for_first(driver, &["body"], config.wait(), config.poll_interval())
        .await
        .ok_or_else(|| BotError::navigation("homepage failed to load"))?;

    auth::ensure_logged_in(driver, config).await?;
    navigate::open_story(driver, config).await?;

    let stepper = Stepper::from_config(config);
    stepper.run(&DriverPage::new(driver)).await
}
