//! Process-wide record of the active player surface.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

const PLAYER_LOG_TARGET: &str = "playroute::player";

/// The mutually-exclusive playback presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Main/fullscreen player embedded in the detail surface.
    Main,
    /// Floating popup player.
    Popup,
    /// Audio-only background player.
    Background,
}

#[derive(Debug, Default, Clone, Copy)]
struct CoordinatorState {
    kind: Option<PlayerKind>,
    playing: bool,
}

/// Records which player surface (if any) is active and whether it is
/// playing.
///
/// The coordinator does not drive transitions; player surfaces report their
/// own start/stop and the coordinator only keeps the latest snapshot.
/// Starting a surface while another is active simply overwrites the recorded
/// kind — that is the expected switching path, not an error. Created once at
/// process start and injected wherever the snapshot is needed; lifecycle
/// callbacks may arrive on any thread, hence the mutex.
#[derive(Default)]
pub struct PlayerCoordinator {
    state: Mutex<CoordinatorState>,
}

impl PlayerCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A player surface reports it has started (or taken over playback).
    pub fn player_started(&self, kind: PlayerKind, playing: bool) {
        let mut state = self.state.lock().expect("player coordinator lock poisoned");
        debug!(target: PLAYER_LOG_TARGET, ?kind, playing, previous = ?state.kind, "Player started");
        state.kind = Some(kind);
        state.playing = playing;
    }

    /// The active player surface reports it has stopped and torn down.
    pub fn player_stopped(&self) {
        let mut state = self.state.lock().expect("player coordinator lock poisoned");
        debug!(target: PLAYER_LOG_TARGET, previous = ?state.kind, "Player stopped");
        state.kind = None;
        state.playing = false;
    }

    /// Updates the play/pause flag of the active player. Ignored when no
    /// player is active (None always implies "not playing").
    pub fn set_playing(&self, playing: bool) {
        let mut state = self.state.lock().expect("player coordinator lock poisoned");
        if state.kind.is_some() {
            state.playing = playing;
        }
    }

    /// The active player kind, or `None` when no player is open.
    pub fn kind(&self) -> Option<PlayerKind> {
        self.state.lock().expect("player coordinator lock poisoned").kind
    }

    pub fn is_playing(&self) -> bool {
        self.state.lock().expect("player coordinator lock poisoned").playing
    }
}
