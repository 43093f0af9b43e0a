//! Login handling
//!
//! The profile normally carries the session. When it does not, logged-out
//! state is detected from the presence of login-form elements, and stored or
//! interactively-entered credentials are submitted. The password prompt is
//! always masked; there is no plaintext default.

use std::io::{self, BufRead, Write};
use thirtyfour::prelude::*;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::browser::{page, selectors};
use crate::core::{BotError, Config, Result};

/// A resolved username/password pair
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Resolve credentials from config, falling back to an interactive prompt.
pub fn resolve_credentials(config: &Config) -> Result<Credentials> {
    let username = match config.username.as_deref() {
        Some(u) if !u.is_empty() => u.to_string(),
        _ => prompt_line("Duolingo username or email: ")?,
    };
    let password = match config.password.as_deref() {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => rpassword::prompt_password("Duolingo password: ")?,
    };

    if username.is_empty() || password.is_empty() {
        return Err(BotError::auth(
            "credentials are required to log in automatically",
        ));
    }
    Ok(Credentials { username, password })
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Log in if the loaded page shows a logged-out state; no-op otherwise.
pub async fn ensure_logged_in(driver: &WebDriver, config: &Config) -> Result<()> {
    if page::find_first(driver, selectors::LOGGED_OUT_MARKERS)
        .await
        .is_none()
    {
        debug!("Profile session is already logged in");
        return Ok(());
    }

    info!("Profile is logged out, submitting credentials");
    let creds = resolve_credentials(config)?;

    driver.goto(selectors::LOGIN_URL).await?;

    let email_input = page::wait_for_first(
        driver,
        selectors::LOGIN_EMAIL_INPUTS,
        config.wait(),
        config.poll_interval(),
    )
    .await
    .ok_or_else(|| BotError::auth("could not load the login form"))?;

    let password_input = page::wait_for_first(
        driver,
        selectors::LOGIN_PASSWORD_INPUTS,
        config.wait(),
        config.poll_interval(),
    )
    .await
    .ok_or_else(|| BotError::auth("could not locate the password input"))?;

    email_input.clear().await?;
    email_input.send_keys(&creds.username).await?;
    password_input.clear().await?;
    password_input.send_keys(&creds.password).await?;

    let mut submitted = false;
    for sel in selectors::LOGIN_SUBMIT_BUTTONS {
        if let Ok(el) = driver.find(By::Css(*sel)).await {
            if page::safe_click(driver, &el).await {
                submitted = true;
                break;
            }
        }
    }
    if !submitted {
        password_input.send_keys(Key::Enter + "").await?;
    }

    // Wait briefly for the post-login navigation
    let deadline = Instant::now() + config.wait();
    while Instant::now() < deadline {
        if page::find_first(driver, selectors::LOGIN_PASSWORD_INPUTS)
            .await
            .is_none()
        {
            info!("Logged in");
            return Ok(());
        }
        sleep(config.poll_interval()).await;
    }

    Err(BotError::auth("login did not complete within the wait budget"))
}
