//! The step loop
//!
//! Policy only: what to try on each tick and when to stop. All page access
//! goes through `StoryPage`, so the polling/timeout behavior is testable
//! without a browser.

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::browser::StoryPage;
use crate::core::{Config, Result};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A completion indicator appeared
    Completed,
    /// The configured step budget ran out
    StepLimit,
    /// Nothing actionable appeared within the wait budget
    TimedOut,
}

/// Outcome of a step-loop run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub reason: StopReason,
    /// Click/fill actions performed
    pub steps: u32,
}

impl Outcome {
    pub fn is_complete(&self) -> bool {
        self.reason == StopReason::Completed
    }
}

/// Step-loop policy: step budget, wait budget, fixed poll interval
#[derive(Debug, Clone)]
pub struct Stepper {
    max_steps: u32,
    wait: Duration,
    poll_interval: Duration,
}

impl Stepper {
    pub fn new(max_steps: u32, wait: Duration, poll_interval: Duration) -> Self {
        Self {
            max_steps,
            wait,
            poll_interval,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_steps, config.wait(), config.poll_interval())
    }

    /// Drive the page until a completion indicator, the step budget, or the
    /// wait budget stops it. The wait budget is measured from the last
    /// successful action, so a slow story is not cut off mid-flight.
    pub async fn run<P: StoryPage>(&self, page: &P) -> Result<Outcome> {
        let mut steps = 0u32;
        let mut last_progress = Instant::now();

        loop {
            if page.is_complete().await? {
                info!(steps, "Story complete");
                return Ok(Outcome {
                    reason: StopReason::Completed,
                    steps,
                });
            }

            if steps >= self.max_steps {
                return Ok(Outcome {
                    reason: StopReason::StepLimit,
                    steps,
                });
            }

            if self.try_step(page).await? {
                steps += 1;
                last_progress = Instant::now();
                debug!(steps, "Step performed");
            } else if last_progress.elapsed() >= self.wait {
                return Ok(Outcome {
                    reason: StopReason::TimedOut,
                    steps,
                });
            }

            sleep(self.poll_interval).await;
        }
    }

    /// One tick: advance control first, then challenge answering
    async fn try_step<P: StoryPage>(&self, page: &P) -> Result<bool> {
        if page.click_continue().await? {
            return Ok(true);
        }

        // Challenges can mix forms; attempt every kind before submitting
        let mut acted = false;
        acted |= page.tap_tokens().await?;
        acted |= page.choose_option().await?;
        acted |= page.fill_text_input().await?;

        if acted {
            page.submit_answer().await?;
        }
        Ok(acted)
    }
}
