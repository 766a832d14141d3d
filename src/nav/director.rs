//! Orchestrates opening a queue on a chosen player surface.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::config::Preferences;
use crate::handoff::QueueStager;
use crate::player::{LaunchMessage, PlayerCoordinator, PlayerKind};
use crate::queue::PlaybackQueue;

use super::autoplay::decide_autoplay;
use super::link::{NavError, OpenRequest, ServiceDirectory};
use super::surfaces::{Notice, PlayerLauncher, SurfaceHost, UiSignals};

const NAV_LOG_TARGET: &str = "playroute::nav";

/// The item being opened: service, canonical URL, display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTarget {
    pub service_id: i32,
    pub url: String,
    pub title: String,
}

/// Decides autoplay and surface reuse for play requests, and routes
/// enqueue requests to the active player.
///
/// Holds its collaborators by handle; all state lives in the injected
/// coordinator and store so tests can substitute fresh instances.
pub struct NavigationDirector {
    coordinator: Arc<PlayerCoordinator>,
    handoff: Arc<dyn QueueStager>,
    host: Arc<dyn SurfaceHost>,
    launcher: Arc<dyn PlayerLauncher>,
    signals: Arc<dyn UiSignals>,
    directory: Arc<dyn ServiceDirectory>,
    prefs: Preferences,
}

impl NavigationDirector {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        coordinator: Arc<PlayerCoordinator>,
        handoff: Arc<dyn QueueStager>,
        host: Arc<dyn SurfaceHost>,
        launcher: Arc<dyn PlayerLauncher>,
        signals: Arc<dyn UiSignals>,
        directory: Arc<dyn ServiceDirectory>,
        prefs: Preferences,
    ) -> Self {
        NavigationDirector {
            coordinator,
            handoff,
            host,
            launcher,
            signals,
            directory,
            prefs,
        }
    }

    /// Opens the queue's current item on the main surface.
    /// No-op when the queue has no current item.
    pub fn play_on_main(&self, queue: &PlaybackQueue) {
        self.open_on_main(queue, false);
    }

    /// Moves an already-playing session from another surface onto the main
    /// surface, preserving its play/pause state.
    pub fn play_on_main_switching(&self, queue: &PlaybackQueue) {
        self.open_on_main(queue, true);
    }

    fn open_on_main(&self, queue: &PlaybackQueue, switching_players: bool) {
        let Some(item) = queue.current() else {
            warn!(target: NAV_LOG_TARGET, "Play on main requested with no current item; ignoring");
            return;
        };
        let target = OpenTarget {
            service_id: item.service_id(),
            url: item.url().to_string(),
            title: item.title().to_string(),
        };
        self.open_detail(&target, Some(queue.clone()), switching_players);
    }

    /// Opens `target` on the main detail surface, reusing the visible
    /// surface when there is one.
    pub fn open_detail(
        &self,
        target: &OpenTarget,
        queue: Option<PlaybackQueue>,
        switching_players: bool,
    ) {
        let previous_kind = self.coordinator.kind();
        let autoplay = decide_autoplay(
            previous_kind,
            self.coordinator.is_playing(),
            switching_players,
            self.prefs.autoplay,
        );
        debug!(
            target: NAV_LOG_TARGET,
            ?previous_kind, switching_players, autoplay, url = %target.url,
            "Opening detail surface"
        );

        let surface = match self.host.visible_surface() {
            Some(surface) => surface,
            // Install first; the ready sequence below assumes a committed
            // surface.
            None => self.host.install(target, queue.clone(), autoplay),
        };

        self.signals.expand_main_player();
        surface.set_autoplay(autoplay);
        if switching_players {
            // The player already holds all data; start watching where the
            // previous surface left off. Popup sessions land directly in
            // fullscreen.
            let fullscreen = previous_kind == Some(PlayerKind::Popup)
                || self.prefs.start_main_player_fullscreen;
            surface.continue_switch(fullscreen);
        } else {
            surface.select_item(target, queue);
        }
        surface.scroll_to_top();
    }

    /// Opens a queue on the popup player. Gated on the popup-enabled
    /// preference.
    pub fn play_on_popup(&self, queue: &PlaybackQueue, resume_playback: bool) {
        if !self.prefs.popup_enabled {
            self.signals.transient_notice(Notice::PopupPermissionNeeded);
            return;
        }
        self.signals.transient_notice(Notice::PlayingInPopup);
        let key = self.hand_off(queue);
        self.launcher
            .launch(LaunchMessage::open(PlayerKind::Popup, key, resume_playback));
    }

    /// Opens a queue on the background (audio-only) player.
    pub fn play_on_background(&self, queue: &PlaybackQueue, resume_playback: bool) {
        self.signals.transient_notice(Notice::PlayingInBackground);
        let key = self.hand_off(queue);
        self.launcher
            .launch(LaunchMessage::open(PlayerKind::Background, key, resume_playback));
    }

    /// Appends the queue's items to the active player's queue. Never starts
    /// playback and never touches the active player's play/pause state.
    pub fn enqueue(&self, queue: &PlaybackQueue) {
        let player_kind = self.active_or_background("Enqueueing");
        self.signals.transient_notice(Notice::Enqueued);
        let key = self.hand_off(queue);
        self.launcher.launch(LaunchMessage::enqueue(player_kind, key));
    }

    /// Inserts the queue's items right after the active player's current
    /// item. Never starts playback.
    pub fn enqueue_next(&self, queue: &PlaybackQueue) {
        let player_kind = self.active_or_background("Enqueueing next");
        self.signals.transient_notice(Notice::EnqueuedNext);
        self.launcher
            .launch(LaunchMessage::enqueue_next(player_kind, self.hand_off(queue)));
    }

    /// Routes a deep link to the service that handles it.
    pub fn route_link(&self, raw_url: &str) -> Result<OpenRequest, NavError> {
        let url = Url::parse(raw_url)?;
        match self.directory.lookup(&url) {
            Some(link) => {
                info!(target: NAV_LOG_TARGET, service_id = link.service_id, kind = ?link.kind, "Routed link");
                Ok(OpenRequest {
                    service_id: link.service_id,
                    kind: link.kind,
                    url: raw_url.to_string(),
                })
            }
            None => Err(NavError::UnknownDestination { url: raw_url.to_string() }),
        }
    }

    fn active_or_background(&self, action: &str) -> PlayerKind {
        match self.coordinator.kind() {
            Some(kind) => kind,
            None => {
                warn!(target: NAV_LOG_TARGET, "{} but no player is open; defaulting to background player", action);
                PlayerKind::Background
            }
        }
    }

    /// Hands the queue to the store; `None` degrades the launch message to
    /// "single item, no queue" mode.
    fn hand_off(&self, queue: &PlaybackQueue) -> Option<String> {
        let key = self.handoff.stage_queue(queue);
        if key.is_none() {
            warn!(target: NAV_LOG_TARGET, "Queue handoff failed; sending message without queue context");
        }
        key
    }
}
