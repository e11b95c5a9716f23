//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that turns terminal input
//! into session transitions and keeps playback moving between frames.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key and mouse event handling, click resolution
//! - `playback`: Playback control methods and action dispatch
//! - `navigation`: Album/track selection and paging
//! - `player_events`: Per-frame completion polling

mod input;
mod playback;
mod navigation;
mod player_events;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::audio::{AudioBackend, AudioError, RodioBackend};
use crate::model::AppModel;

pub struct AppController<B: AudioBackend = RodioBackend> {
    pub(crate) model: Arc<Mutex<AppModel<B>>>,
}

// Derive would demand `B: Clone`, the backend itself is never cloned.
impl<B: AudioBackend> Clone for AppController<B> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

impl<B: AudioBackend> AppController<B> {
    pub fn new(model: Arc<Mutex<AppModel<B>>>) -> Self {
        Self { model }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        match error.downcast_ref::<AudioError>() {
            Some(AudioError::Device(_)) => {
                "No audio output device available. Check your sound settings.".to_string()
            }
            Some(AudioError::Io { path, .. }) => {
                format!("Could not read {}", path.display())
            }
            Some(AudioError::Decode { path, .. }) => {
                format!("Unsupported or corrupt audio file: {}", path.display())
            }
            Some(AudioError::Start(reason)) => format!("Playback failed to start: {reason}"),
            None => format!("Error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn audio_errors_get_friendly_messages() {
        let err = anyhow::Error::new(AudioError::Decode {
            path: PathBuf::from("a.mp3"),
            reason: "bad header".into(),
        });
        let message = AppController::<RodioBackend>::format_error(&err);
        assert!(message.contains("a.mp3"));

        let other = anyhow::anyhow!("boom");
        assert_eq!(AppController::<RodioBackend>::format_error(&other), "Error: boom");
    }
}
