//! User preferences consulted by the navigation logic.

pub mod preferences;

pub use preferences::{ConfigError, Preferences};
