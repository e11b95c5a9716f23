//! Per-frame playback polling
//!
//! rodio gives no end-of-track callback, so completion is noticed by asking
//! the session once per UI loop iteration.

use crate::audio::AudioBackend;
use super::AppController;

impl<B: AudioBackend> AppController<B> {
    /// Returns true when a track ran out and the continuation mode was applied.
    pub async fn poll_playback(&self) -> bool {
        let mut model = self.model.lock().await;
        if model.should_quit() {
            return false;
        }

        let advanced = model.session.tick();
        if advanced {
            match model.session.now_playing() {
                Some((album, track)) => tracing::debug!(
                    album = %album.title,
                    track = %track.name,
                    mode = ?model.session.mode(),
                    "Playback continued after completion"
                ),
                None => tracing::debug!("Playback reached the end of the album"),
            }
        }
        Self::surface_playback_error(&mut *model);
        advanced
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use crate::audio::testing::FakeBackend;
    use crate::catalog::{Album, Catalog, Track};
    use crate::config::ViewConfig;
    use crate::model::{AppModel, ContinuationMode, SessionState};

    use super::AppController;

    fn controller(config: ViewConfig) -> AppController<FakeBackend> {
        let catalog = Catalog::new(vec![Album::new(
            "Hot August Night",
            "Neil Diamond",
            None,
            vec![
                Track::new("Soolaimon", "h/0.mp3"),
                Track::new("Cherry, Cherry", "h/1.mp3"),
            ],
        )]);
        let model = AppModel::new(Arc::new(catalog), FakeBackend::new(), config);
        AppController::new(Arc::new(Mutex::new(model)))
    }

    #[tokio::test]
    async fn polling_without_completion_changes_nothing() {
        let c = controller(ViewConfig::default());
        c.select_album(0).await;
        c.select_track(0).await;

        assert!(!c.poll_playback().await);
        assert_eq!(c.model.lock().await.session.playing_track(), Some(0));
    }

    #[tokio::test]
    async fn polling_leaves_notifications_to_the_ui_loop() {
        let c = controller(ViewConfig::default());
        c.model.lock().await.set_error("boom".to_string());

        c.poll_playback().await;

        assert!(c.model.lock().await.has_error());
    }

    #[tokio::test]
    async fn completion_follows_sequential_order_then_ends() {
        let c = controller(ViewConfig::default());
        c.select_album(0).await;
        c.select_track(0).await;

        c.model.lock().await.session.backend_mut().finish_all();
        assert!(c.poll_playback().await);
        assert_eq!(c.model.lock().await.session.playing_track(), Some(1));

        c.model.lock().await.session.backend_mut().finish_all();
        assert!(c.poll_playback().await);
        let model = c.model.lock().await;
        assert_eq!(model.session.state(), SessionState::AlbumSelected);
    }

    #[tokio::test]
    async fn loop_mode_from_config_replays_the_track() {
        let config = ViewConfig {
            looping: true,
            ..ViewConfig::default()
        };
        let c = controller(config);
        assert_eq!(c.model.lock().await.session.mode(), ContinuationMode::Loop);
        c.select_album(0).await;
        c.select_track(1).await;

        c.model.lock().await.session.backend_mut().finish_all();
        assert!(c.poll_playback().await);
        assert_eq!(c.model.lock().await.session.playing_track(), Some(1));
    }
}
