//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, truncation)
//! - `layout`: Screen geometry shared with click handling, header bar
//! - `content`: Album grid and track list
//! - `progress`: Transport bar and volume gauge
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod content;
mod progress;
mod overlays;

pub use layout::{Hit, ScreenLayout, TransportButton};

use ratatui::{layout::Rect, Frame};

use crate::model::ViewState;

/// Layout for the given frame area and the current selection
pub fn screen_layout(area: Rect, state: &ViewState) -> ScreenLayout {
    let track_count = state
        .session
        .selected_album
        .and_then(|i| state.catalog.album(i))
        .map_or(0, |album| album.tracks.len());
    ScreenLayout::compute(area, state.config, track_count, state.session.playing_track)
}

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, state: &ViewState) {
        let layout = screen_layout(frame.area(), state);

        // Top bar: title + paging
        layout::render_header(frame, &layout, state);

        // Middle: album grid and track list
        content::render_album_grid(frame, &layout, state);
        content::render_track_list(frame, &layout, state);

        // Bottom: transport buttons and volume
        progress::render_transport(frame, &layout, state);

        if state.ui.error_message.is_some() {
            overlays::render_error_notification(frame, state);
        }

        if state.ui.show_help_popup {
            overlays::render_help_popup(frame, state);
        }
    }
}
