//! Interfaces to the out-of-scope UI collaborators: the main detail
//! surface, the host that installs it, the player-surface launcher, and the
//! fire-and-forget user signals.

use std::sync::Arc;

use crate::player::LaunchMessage;
use crate::queue::PlaybackQueue;

use super::director::OpenTarget;

/// The main-surface detail view that embeds the main player.
///
/// All calls are synchronous notifications; the surface performs its own
/// loading asynchronously.
pub trait DetailSurface: Send + Sync {
    /// Sets whether playback starts as soon as the surface is ready.
    fn set_autoplay(&self, autoplay: bool);

    /// Continue an already-playing session that is being moved onto this
    /// surface. All data is already in the player; `fullscreen` requests
    /// starting directly in fullscreen.
    fn continue_switch(&self, fullscreen: bool);

    /// Load a newly selected item, with the queue it belongs to when one
    /// exists.
    fn select_item(&self, target: &OpenTarget, queue: Option<PlaybackQueue>);

    fn scroll_to_top(&self);
}

/// Owns the main-surface content slot.
pub trait SurfaceHost: Send + Sync {
    /// The currently installed detail surface, only when it is visible.
    fn visible_surface(&self) -> Option<Arc<dyn DetailSurface>>;

    /// Constructs a new detail surface for `target`, installs it as the
    /// main-surface content and returns it once the install is committed.
    /// Side effects that assume a live surface (the ready sequence) must
    /// wait until this returns.
    fn install(
        &self,
        target: &OpenTarget,
        queue: Option<PlaybackQueue>,
        autoplay: bool,
    ) -> Arc<dyn DetailSurface>;
}

/// Starts or feeds a player surface. Fire-and-forget; delivery failures are
/// not observable to the core.
pub trait PlayerLauncher: Send + Sync {
    fn launch(&self, message: LaunchMessage);
}

/// Transient, non-blocking user-facing notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Enqueued,
    EnqueuedNext,
    PlayingInPopup,
    PlayingInBackground,
    PopupPermissionNeeded,
}

/// Fire-and-forget UI signals; failure is not observable to the core.
pub trait UiSignals: Send + Sync {
    fn transient_notice(&self, notice: Notice);

    /// Ask the shell to expand the (possibly collapsed) main player.
    fn expand_main_player(&self);
}
