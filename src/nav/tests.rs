//! Unit tests for the autoplay decision table and link routing.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use url::Url;

    use crate::config::Preferences;
    use crate::handoff::HandoffStore;
    use crate::nav::{
        decide_autoplay, DetailSurface, LinkKind, NavError, NavigationDirector, Notice,
        PlayerLauncher, ServiceDirectory, ServiceLink, SurfaceHost, UiSignals,
    };
    use crate::player::{LaunchMessage, PlayerCoordinator, PlayerKind};
    use crate::queue::PlaybackQueue;

    use PlayerKind::{Background, Main, Popup};

    #[test]
    fn test_autoplay_no_player_follows_preference() {
        assert!(decide_autoplay(None, false, false, true));
        assert!(!decide_autoplay(None, false, false, false));
    }

    #[test]
    fn test_autoplay_switching_preserves_play_state() {
        // Continuity beats the preference in both directions.
        assert!(decide_autoplay(Some(Popup), true, true, false));
        assert!(!decide_autoplay(Some(Popup), false, true, true));
        assert!(decide_autoplay(Some(Background), true, true, false));
        assert!(decide_autoplay(Some(Main), true, true, false));
    }

    #[test]
    fn test_autoplay_main_player_follows_preference() {
        assert!(decide_autoplay(Some(Main), true, false, true));
        assert!(!decide_autoplay(Some(Main), true, false, false));
    }

    #[test]
    fn test_autoplay_other_player_never_starts_second_session() {
        assert!(!decide_autoplay(Some(Popup), true, false, true));
        assert!(!decide_autoplay(Some(Popup), false, false, true));
        assert!(!decide_autoplay(Some(Background), true, false, true));
    }

    // --- Minimal collaborators for director-level tests ---

    struct NullSurfaceHost;

    impl SurfaceHost for NullSurfaceHost {
        fn visible_surface(&self) -> Option<Arc<dyn DetailSurface>> {
            None
        }

        fn install(
            &self,
            _target: &crate::nav::OpenTarget,
            _queue: Option<PlaybackQueue>,
            _autoplay: bool,
        ) -> Arc<dyn DetailSurface> {
            unreachable!("not exercised by these tests")
        }
    }

    #[derive(Default)]
    struct RecordingLauncher {
        messages: Mutex<Vec<LaunchMessage>>,
    }

    impl PlayerLauncher for RecordingLauncher {
        fn launch(&self, message: LaunchMessage) {
            self.messages.lock().unwrap().push(message);
        }
    }

    #[derive(Default)]
    struct RecordingSignals {
        notices: Mutex<Vec<Notice>>,
    }

    impl UiSignals for RecordingSignals {
        fn transient_notice(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }

        fn expand_main_player(&self) {}
    }

    struct SingleServiceDirectory;

    impl ServiceDirectory for SingleServiceDirectory {
        fn lookup(&self, url: &Url) -> Option<ServiceLink> {
            match url.host_str() {
                Some("example.org") => Some(ServiceLink { service_id: 0, kind: LinkKind::Stream }),
                _ => None,
            }
        }
    }

    fn director(
        prefs: Preferences,
    ) -> (NavigationDirector, Arc<RecordingLauncher>, Arc<RecordingSignals>) {
        let launcher = Arc::new(RecordingLauncher::default());
        let signals = Arc::new(RecordingSignals::default());
        let director = NavigationDirector::new(
            Arc::new(PlayerCoordinator::new()),
            Arc::new(HandoffStore::default()),
            Arc::new(NullSurfaceHost),
            launcher.clone(),
            signals.clone(),
            Arc::new(SingleServiceDirectory),
            prefs,
        );
        (director, launcher, signals)
    }

    #[test]
    fn test_route_link_known_service() {
        let (director, _, _) = director(Preferences::default());
        let request = director.route_link("https://example.org/watch?v=abc").unwrap();
        assert_eq!(request.service_id, 0);
        assert_eq!(request.kind, LinkKind::Stream);
        assert_eq!(request.url, "https://example.org/watch?v=abc");
    }

    #[test]
    fn test_route_link_unknown_destination_is_typed_failure() {
        let (director, _, _) = director(Preferences::default());
        match director.route_link("https://unknown.example.net/video") {
            Err(NavError::UnknownDestination { url }) => {
                assert_eq!(url, "https://unknown.example.net/video");
            }
            other => panic!("expected UnknownDestination, got {:?}", other),
        }
    }

    #[test]
    fn test_route_link_invalid_url() {
        let (director, _, _) = director(Preferences::default());
        assert!(matches!(
            director.route_link("not a url"),
            Err(NavError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_popup_disabled_blocks_launch() {
        let prefs = Preferences { popup_enabled: false, ..Preferences::default() };
        let (director, launcher, signals) = director(prefs);

        director.play_on_popup(&PlaybackQueue::new(), false);

        assert!(launcher.messages.lock().unwrap().is_empty());
        assert_eq!(
            *signals.notices.lock().unwrap(),
            vec![Notice::PopupPermissionNeeded]
        );
    }
}
