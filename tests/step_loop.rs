//! Step-loop policy tests
//!
//! Exercises the polling/timeout behavior against a scripted page; no
//! browser involved. Paused tokio time keeps the timeout cases instant.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use duostory::{Result, Stepper, StopReason, StoryPage};

/// Scripted page: accepts a fixed number of clicks, then goes inert;
/// optionally shows a completion indicator after N actions.
struct MockPage {
    /// Clicks the page will accept before going inert
    actionable: u32,
    /// Show completion once this many actions happened (None = never)
    complete_after: Option<u32>,
    clicks: AtomicU32,
}

impl MockPage {
    fn new(actionable: u32, complete_after: Option<u32>) -> Self {
        Self {
            actionable,
            complete_after,
            clicks: AtomicU32::new(0),
        }
    }

    fn clicks(&self) -> u32 {
        self.clicks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryPage for MockPage {
    async fn click_continue(&self) -> Result<bool> {
        if self.clicks() < self.actionable {
            self.clicks.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn tap_tokens(&self) -> Result<bool> {
        Ok(false)
    }

    async fn choose_option(&self) -> Result<bool> {
        Ok(false)
    }

    async fn fill_text_input(&self) -> Result<bool> {
        Ok(false)
    }

    async fn submit_answer(&self) -> Result<()> {
        Ok(())
    }

    async fn is_complete(&self) -> Result<bool> {
        Ok(self.complete_after.is_some_and(|n| self.clicks() >= n))
    }
}

fn stepper(max_steps: u32) -> Stepper {
    Stepper::new(max_steps, Duration::from_secs(5), Duration::from_millis(100))
}

#[tokio::test(start_paused = true)]
async fn step_limit_is_exact() {
    // Endless story that never completes: exactly max_steps actions
    let page = MockPage::new(u32::MAX, None);
    let outcome = stepper(3).run(&page).await.unwrap();

    assert_eq!(outcome.reason, StopReason::StepLimit);
    assert_eq!(outcome.steps, 3);
    assert_eq!(page.clicks(), 3);
}

#[tokio::test(start_paused = true)]
async fn zero_step_budget_performs_no_actions() {
    let page = MockPage::new(u32::MAX, None);
    let outcome = stepper(0).run(&page).await.unwrap();

    assert_eq!(outcome.reason, StopReason::StepLimit);
    assert_eq!(outcome.steps, 0);
    assert_eq!(page.clicks(), 0);
}

#[tokio::test(start_paused = true)]
async fn completion_wins_over_step_budget() {
    // Completion shown after 2 actions: stop at 2 despite max_steps=100
    let page = MockPage::new(u32::MAX, Some(2));
    let outcome = stepper(100).run(&page).await.unwrap();

    assert_eq!(outcome.reason, StopReason::Completed);
    assert!(outcome.is_complete());
    assert_eq!(outcome.steps, 2);
    assert_eq!(page.clicks(), 2);
}

#[tokio::test(start_paused = true)]
async fn already_complete_page_needs_no_actions() {
    let page = MockPage::new(u32::MAX, Some(0));
    let outcome = stepper(100).run(&page).await.unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.steps, 0);
    assert_eq!(page.clicks(), 0);
}

#[tokio::test(start_paused = true)]
async fn inert_page_times_out_instead_of_hanging() {
    let page = MockPage::new(0, None);
    let outcome = stepper(100).run(&page).await.unwrap();

    assert_eq!(outcome.reason, StopReason::TimedOut);
    assert_eq!(outcome.steps, 0);
}

#[tokio::test(start_paused = true)]
async fn timeout_is_measured_from_last_action() {
    // Two actions, then inert: stops with the steps it managed, not zero
    let page = MockPage::new(2, None);
    let outcome = stepper(100).run(&page).await.unwrap();

    assert_eq!(outcome.reason, StopReason::TimedOut);
    assert_eq!(outcome.steps, 2);
}
