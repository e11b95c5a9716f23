//! Core type definitions for the application

use std::time::Instant;

use chrono::{DateTime, Local};
use ratatui::layout::Rect;

/// What plays when the current track finishes on its own
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContinuationMode {
    #[default]
    Sequential,
    Loop,
    Shuffle,
}

impl ContinuationMode {
    /// Collapse a pair of loop/shuffle switches into one mode. Loop wins when
    /// both are on.
    pub fn from_flags(looping: bool, shuffle: bool) -> Self {
        match (looping, shuffle) {
            (true, _) => Self::Loop,
            (false, true) => Self::Shuffle,
            (false, false) => Self::Sequential,
        }
    }

    pub fn is_loop(self) -> bool {
        self == Self::Loop
    }

    pub fn is_shuffle(self) -> bool {
        self == Self::Shuffle
    }

    pub fn toggled_loop(self) -> Self {
        if self.is_loop() { Self::Sequential } else { Self::Loop }
    }

    pub fn toggled_shuffle(self) -> Self {
        if self.is_shuffle() { Self::Sequential } else { Self::Shuffle }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::Loop => "Loop",
            Self::Shuffle => "Shuffle",
        }
    }
}

/// Coarse session state derived from the selection and the active handle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AlbumSelected,
    Playing,
    Stopped,
}

/// A resolved user intent, produced from a click or a key press
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiAction {
    SelectAlbum(usize),
    SelectTrack(usize),
    PlayCurrent,
    PauseOrStop,
    TogglePlayPause,
    Stop,
    NextTrack,
    PreviousTrack,
    ToggleLoop,
    ToggleShuffle,
    SetVolume(f32),
    VolumeUp,
    VolumeDown,
    /// Relative page step, -1 or +1
    GoToPage(isize),
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Absolute catalog index of the album cell under the mouse
    pub hovered_album: Option<usize>,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub error_logged_at: Option<DateTime<Local>>,
    pub show_help_popup: bool,
    /// Area of the last drawn frame, used to resolve clicks
    pub viewport: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_takes_precedence_over_shuffle() {
        assert_eq!(ContinuationMode::from_flags(true, true), ContinuationMode::Loop);
        assert_eq!(ContinuationMode::from_flags(true, false), ContinuationMode::Loop);
        assert_eq!(ContinuationMode::from_flags(false, true), ContinuationMode::Shuffle);
        assert_eq!(ContinuationMode::from_flags(false, false), ContinuationMode::Sequential);
    }

    #[test]
    fn toggles_are_mutually_exclusive() {
        let mode = ContinuationMode::Sequential.toggled_loop();
        assert_eq!(mode, ContinuationMode::Loop);

        let mode = mode.toggled_shuffle();
        assert_eq!(mode, ContinuationMode::Shuffle);
        assert!(!mode.is_loop());

        assert_eq!(mode.toggled_shuffle(), ContinuationMode::Sequential);
        assert_eq!(ContinuationMode::Loop.toggled_loop(), ContinuationMode::Sequential);
    }
}
