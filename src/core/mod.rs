//! Core types shared across duostory modules

pub mod config;
pub mod error;

pub use config::{Config, Overrides};
pub use error::{BotError, Result};
