//! Main application model with state management

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use ratatui::layout::Rect;

use super::paging::PagingState;
use super::session::{PlaybackSession, SessionSnapshot};
use super::types::UiState;
use crate::audio::{AudioBackend, RodioBackend};
use crate::catalog::Catalog;
use crate::config::{Palette, ViewConfig};

const ERROR_DISPLAY_TIME: Duration = Duration::from_secs(5);

/// Everything the view reads for one frame
pub struct ViewState<'a> {
    pub catalog: &'a Catalog,
    pub session: SessionSnapshot,
    pub paging: PagingState,
    pub ui: &'a UiState,
    pub config: &'a ViewConfig,
    pub palette: Palette,
    /// Tracks of the selected album that failed to open
    pub unusable_tracks: Vec<usize>,
}

/// Main application model containing all state
pub struct AppModel<B: AudioBackend = RodioBackend> {
    catalog: Arc<Catalog>,
    pub session: PlaybackSession<B>,
    pub paging: PagingState,
    pub ui_state: UiState,
    config: ViewConfig,
    palette: Palette,
    should_quit: bool,
}

impl<B: AudioBackend> AppModel<B> {
    pub fn new(catalog: Arc<Catalog>, backend: B, config: ViewConfig) -> Self {
        let session = PlaybackSession::new(
            Arc::clone(&catalog),
            backend,
            config.volume,
            config.initial_mode(),
        );
        let paging = PagingState::new(config.page_size());
        let palette = config.palette();

        let mut model = Self {
            catalog,
            session,
            paging,
            ui_state: UiState::default(),
            config,
            palette,
            should_quit: false,
        };

        let failures = model.session.open_failures();
        if failures > 0 {
            model.set_error(format!(
                "{failures} track(s) could not be opened and will be skipped. See the log for details."
            ));
        }
        model
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn view_state(&self) -> ViewState<'_> {
        let unusable_tracks = match (self.session.selected_album(), self.session.current_album()) {
            (Some(index), Some(album)) => (0..album.tracks.len())
                .filter(|&track| !self.session.is_playable(index, track))
                .collect(),
            _ => Vec::new(),
        };

        ViewState {
            catalog: &self.catalog,
            session: self.session.snapshot(),
            paging: self.paging,
            ui: &self.ui_state,
            config: &self.config,
            palette: self.palette,
            unusable_tracks,
        }
    }

    // ========================================================================
    // Paging
    // ========================================================================

    /// Absolute catalog index for a cell slot on the current page
    pub fn album_at_slot(&self, slot: usize) -> Option<usize> {
        let visible = self.paging.visible(self.catalog.len());
        let index = visible.start + slot;
        visible.contains(&index).then_some(index)
    }

    pub fn step_page(&mut self, delta: isize) -> bool {
        let moved = if delta < 0 {
            self.paging.previous_page()
        } else {
            self.paging.next_page(self.catalog.len())
        };
        if moved {
            self.ui_state.hovered_album = None;
            tracing::debug!(page = self.paging.page_index(), "Page changed");
        }
        moved
    }

    /// Bring the page holding the selected album into view.
    pub fn reveal_selected_album(&mut self) {
        if let Some(album) = self.session.selected_album() {
            let page = self.paging.page_of(album);
            if let Ok(page) = isize::try_from(page) {
                self.paging.go_to_page(page);
            }
        }
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub fn set_viewport(&mut self, area: Rect) {
        self.ui_state.viewport = area;
    }

    pub fn set_hovered_album(&mut self, album: Option<usize>) {
        self.ui_state.hovered_album = album;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn toggle_help_popup(&mut self) {
        self.ui_state.show_help_popup = !self.ui_state.show_help_popup;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!(message = %message, "Showing error notification");
        self.ui_state.error_message = Some(message);
        self.ui_state.error_timestamp = Some(Instant::now());
        self.ui_state.error_logged_at = Some(Local::now());
    }

    pub fn has_error(&self) -> bool {
        self.ui_state.error_message.is_some()
    }

    pub fn clear_error(&mut self) {
        self.ui_state.error_message = None;
        self.ui_state.error_timestamp = None;
        self.ui_state.error_logged_at = None;
    }

    pub fn auto_clear_old_errors(&mut self) {
        if let Some(timestamp) = self.ui_state.error_timestamp {
            if timestamp.elapsed() >= ERROR_DISPLAY_TIME {
                self.clear_error();
            }
        }
    }
}
