//! Playback control methods

use crate::audio::AudioBackend;
use crate::model::{AppModel, UiAction};

use super::AppController;

impl<B: AudioBackend> AppController<B> {
    /// Run a transition under the model lock and surface any backend
    /// start failure it produced.
    async fn with_session<F>(&self, transition: F)
    where
        F: FnOnce(&mut AppModel<B>),
    {
        let mut model = self.model.lock().await;
        transition(&mut *model);
        Self::surface_playback_error(&mut *model);
    }

    pub(crate) fn surface_playback_error(model: &mut AppModel<B>) {
        if let Some(e) = model.session.take_error() {
            let error_msg = Self::format_error(&anyhow::Error::new(e));
            model.set_error(error_msg);
        }
    }

    /// Dispatch a resolved click or key press.
    pub async fn apply(&self, action: UiAction) {
        tracing::debug!(?action, "Applying action");
        match action {
            UiAction::SelectAlbum(index) => self.select_album(index).await,
            UiAction::SelectTrack(index) => self.select_track(index).await,
            UiAction::PlayCurrent => self.play_current().await,
            UiAction::PauseOrStop => self.pause().await,
            UiAction::TogglePlayPause => self.toggle_playback().await,
            UiAction::Stop => self.stop().await,
            UiAction::NextTrack => self.next_track().await,
            UiAction::PreviousTrack => self.previous_track().await,
            UiAction::ToggleLoop => self.toggle_loop().await,
            UiAction::ToggleShuffle => self.toggle_shuffle().await,
            UiAction::SetVolume(volume) => self.set_volume(volume).await,
            UiAction::VolumeUp => self.volume_up().await,
            UiAction::VolumeDown => self.volume_down().await,
            UiAction::GoToPage(delta) => self.step_page(delta).await,
        }
    }

    pub async fn toggle_playback(&self) {
        self.with_session(|model| model.session.toggle_play_pause()).await;
    }

    pub async fn play_current(&self) {
        self.with_session(|model| model.session.play_current()).await;
    }

    pub async fn pause(&self) {
        self.with_session(|model| model.session.pause_or_stop()).await;
    }

    pub async fn stop(&self) {
        self.with_session(|model| model.session.stop()).await;
    }

    pub async fn next_track(&self) {
        tracing::debug!("Skipping to next track");
        self.with_session(|model| model.session.next_track()).await;
    }

    pub async fn previous_track(&self) {
        self.with_session(|model| model.session.previous_track()).await;
    }

    pub async fn toggle_loop(&self) {
        self.with_session(|model| model.session.toggle_loop()).await;
    }

    pub async fn toggle_shuffle(&self) {
        self.with_session(|model| model.session.toggle_shuffle()).await;
    }

    pub async fn set_volume(&self, volume: f32) {
        self.with_session(|model| model.session.set_volume(volume)).await;
    }

    pub async fn volume_up(&self) {
        self.with_session(|model| {
            let step = model.config().volume_step;
            model.session.volume_up(step);
        })
        .await;
    }

    pub async fn volume_down(&self) {
        self.with_session(|model| {
            let step = model.config().volume_step;
            model.session.volume_down(step);
        })
        .await;
    }
}
