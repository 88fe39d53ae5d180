//! Platform-agnostic state and logic behind the page.

pub mod language;
pub mod platform;
pub mod sections;
pub mod title;
pub mod tracker;
pub mod viewport;
