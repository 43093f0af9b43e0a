//! duostory - keeps a Duolingo streak alive by auto-completing one story
//!
//! Launches Chrome bound to the operator's on-disk profile, logs in if the
//! profile turns out to be logged out, navigates to a story, and clicks
//! through its prompts until it completes or a step/time budget runs out.
//!
//! # Architecture
//!
//! - **Core**: configuration resolution and error handling
//! - **Browser**: session launch, the selector table, page interaction
//! - **Bot**: login, navigation, and the step loop
//!
//! Control flow is strictly linear; async is only the shape the WebDriver
//! client imposes.

pub mod bot;
pub mod browser;
pub mod core;

// Re-export commonly used items
pub use bot::{run, Outcome, StopReason, Stepper};
pub use browser::StoryPage;
pub use core::{BotError, Config, Overrides, Result};
