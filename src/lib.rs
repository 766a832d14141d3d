//! playroute library core functionality
//!
//! Playback-queue management and player-surface routing for a streaming
//! client: queue items with lazy metadata resolution, a keyed handoff store
//! for passing queues across surface boundaries, and the decision logic that
//! arbitrates autoplay and player switching.

pub mod config;
pub mod handoff;
pub mod metadata;
pub mod nav;
pub mod player;
pub mod queue;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding shell.
///
/// Filter defaults to `info` and can be overridden with `RUST_LOG`
/// (e.g. `RUST_LOG=playroute::nav=debug`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
