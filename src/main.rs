//! duostory - auto-completes a Duolingo story to keep a streak alive
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use duostory::{Config, Overrides, StopReason};

/// Auto-complete a Duolingo story to keep a streak alive
#[derive(Parser, Debug)]
#[command(name = "duostory")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chrome user data dir (so your session cookies are used)
    #[arg(long)]
    user_data_dir: Option<PathBuf>,

    /// Chrome profile directory name (e.g. 'Default', 'Profile 1')
    #[arg(long)]
    profile_name: Option<String>,

    /// Stories path or full URL (e.g. '/en/es-juan-1')
    #[arg(long)]
    story_path: Option<String>,

    /// Run Chrome in headless mode
    #[arg(long)]
    headless: bool,

    /// Maximum click/fill actions before stopping
    #[arg(long)]
    max_steps: Option<u32>,

    /// Seconds to keep polling when expected elements are absent
    #[arg(long)]
    wait_secs: Option<u64>,

    /// Milliseconds between step-loop ticks
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// chromedriver endpoint
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Duolingo username or email
    #[arg(long, short = 'u')]
    username: Option<String>,

    /// Duolingo password (omit to be prompted securely)
    #[arg(long)]
    password: Option<String>,

    /// Path to a JSON config file with the same keys as the flags
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            user_data_dir: self.user_data_dir.clone(),
            profile_name: self.profile_name.clone(),
            // A bool flag can only assert; leave None so the file can
            // still enable headless mode
            headless: self.headless.then_some(true),
            story_path: self.story_path.clone(),
            max_steps: self.max_steps,
            wait_secs: self.wait_secs,
            poll_interval_ms: self.poll_interval_ms,
            webdriver_url: self.webdriver_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug {
        "duostory=debug"
    } else {
        "duostory=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let file = match &args.config {
        Some(path) => Some(Overrides::load(path).context("Failed to load config file")?),
        None => None,
    };
    let config = Config::resolve(args.overrides(), file);

    let outcome = duostory::run(&config).await?;
    match outcome.reason {
        StopReason::Completed => info!(steps = outcome.steps, "Story completed"),
        StopReason::StepLimit => warn!(
            steps = outcome.steps,
            "Stopped before completion: step limit reached"
        ),
        StopReason::TimedOut => warn!(
            steps = outcome.steps,
            "Stopped before completion: nothing actionable within the wait budget"
        ),
    }

    Ok(())
}
