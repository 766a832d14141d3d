//! Player-surface state: which surface is active, whether it is playing,
//! and the launch messages that start or feed a player surface.

pub mod coordinator;
pub mod launch;

pub use coordinator::{PlayerCoordinator, PlayerKind};
pub use launch::{LaunchAction, LaunchMessage};
