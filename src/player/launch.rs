//! Launch messages sent to player surfaces.
//!
//! A launch message is the primitive-only boundary payload that starts or
//! feeds a player surface: the queue travels separately through the
//! [`HandoffStore`](crate::handoff::HandoffStore) and only its key is
//! embedded here.

use serde::{Deserialize, Serialize};

use super::coordinator::PlayerKind;

/// What the receiving player surface should do with the message.
/// Exactly one action per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchAction {
    /// Replace the surface's queue and (depending on flags) start playback.
    Open,
    /// Append to the end of the active queue; never starts playback.
    Enqueue,
    /// Insert right after the current item; never starts playback.
    EnqueueNext,
}

/// Structured message for starting or feeding a player surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchMessage {
    /// Handoff key for the queue, absent when the handoff failed or no
    /// queue accompanies the message. The receiver must be able to operate
    /// in "single item, no queue" mode when this is `None`.
    pub queue_key: Option<String>,
    pub player_kind: PlayerKind,
    /// Whether the surface should seek to the items' recorded resume
    /// positions.
    pub resume_playback: bool,
    /// Explicit play/pause override for the receiving surface; `None`
    /// leaves the choice to the surface.
    pub play_when_ready: Option<bool>,
    pub action: LaunchAction,
}

impl LaunchMessage {
    /// Message that opens a queue on the given player surface.
    pub fn open(player_kind: PlayerKind, queue_key: Option<String>, resume_playback: bool) -> Self {
        LaunchMessage {
            queue_key,
            player_kind,
            resume_playback,
            play_when_ready: None,
            action: LaunchAction::Open,
        }
    }

    /// As [`open`](Self::open), with an explicit play/pause decision for the
    /// receiving surface. Only used when creating a player.
    pub fn open_with_play_when_ready(
        player_kind: PlayerKind,
        queue_key: Option<String>,
        resume_playback: bool,
        play_when_ready: bool,
    ) -> Self {
        let mut msg = Self::open(player_kind, queue_key, resume_playback);
        msg.play_when_ready = Some(play_when_ready);
        msg
    }

    /// Message that appends to the active queue.
    ///
    /// `resume_playback` is always false for enqueueing: with a player
    /// already running the flag makes no difference, and with nothing
    /// playing the enqueue action deliberately does not resume where a
    /// normal play action would.
    pub fn enqueue(player_kind: PlayerKind, queue_key: Option<String>) -> Self {
        LaunchMessage {
            queue_key,
            player_kind,
            resume_playback: false,
            play_when_ready: None,
            action: LaunchAction::Enqueue,
        }
    }

    /// Message that inserts after the current item of the active queue.
    /// Same `resume_playback` reasoning as [`enqueue`](Self::enqueue).
    pub fn enqueue_next(player_kind: PlayerKind, queue_key: Option<String>) -> Self {
        LaunchMessage {
            queue_key,
            player_kind,
            resume_playback: false,
            play_when_ready: None,
            action: LaunchAction::EnqueueNext,
        }
    }
}
