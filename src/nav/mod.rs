//! Navigation: deciding how and where a queue opens — which player surface,
//! whether playback auto-starts, and whether an existing detail surface is
//! reused or a new one installed.

pub mod autoplay;
pub mod director;
pub mod link;
pub mod surfaces;
#[cfg(test)]
mod tests;

pub use autoplay::decide_autoplay;
pub use director::{NavigationDirector, OpenTarget};
pub use link::{LinkKind, NavError, OpenRequest, ServiceDirectory, ServiceLink};
pub use surfaces::{DetailSurface, Notice, PlayerLauncher, SurfaceHost, UiSignals};
