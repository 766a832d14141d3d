//! Keyed staging area for passing large values (primarily a playback queue)
//! across boundaries that only accept small primitive messages.

pub mod store;
#[cfg(test)]
mod tests;

pub use store::{HandoffStore, QueueStager};
