//! The autoplay decision, isolated as a pure function so the precedence
//! rules are testable without any surface in place.

use crate::player::PlayerKind;

/// Decides whether playback auto-starts when an item is opened on the main
/// surface.
///
/// Precedence, first match wins:
/// 1. no player open → the user's global autoplay preference;
/// 2. switching an existing session to the main surface → keep the previous
///    surface's play/pause state, the surface change alone must not start or
///    stop audio;
/// 3. main player already open → the autoplay preference, same as opening
///    with no player;
/// 4. a different player (popup/background) is open and this is not a
///    switch → never auto-start a second concurrent playback session.
pub fn decide_autoplay(
    active: Option<PlayerKind>,
    active_playing: bool,
    switching_players: bool,
    autoplay_pref: bool,
) -> bool {
    match active {
        None => autoplay_pref,
        Some(_) if switching_players => active_playing,
        Some(PlayerKind::Main) => autoplay_pref,
        Some(_) => false,
    }
}
