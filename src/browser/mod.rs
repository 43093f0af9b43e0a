//! Browser session bootstrapping and page interaction

pub mod page;
pub mod selectors;
pub mod session;

pub use page::{DriverPage, StoryPage};
pub use session::Session;
