//! Key and mouse event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::audio::AudioBackend;
use crate::model::{AppModel, UiAction};
use crate::view::{self, Hit, TransportButton};
use super::AppController;

/// Turn a layout hit into an action, using session state where the same
/// spot means different things (clicking the sounding track pauses it).
pub(crate) fn resolve_click<B: AudioBackend>(model: &AppModel<B>, hit: Hit) -> Option<UiAction> {
    let action = match hit {
        Hit::AlbumCell(slot) => UiAction::SelectAlbum(model.album_at_slot(slot)?),
        Hit::Track(index) => {
            let sounding = model.session.has_active_handle()
                && model.session.playing_track() == Some(index);
            if sounding {
                UiAction::PauseOrStop
            } else {
                UiAction::SelectTrack(index)
            }
        }
        Hit::Button(button) => match button {
            TransportButton::Play => UiAction::PlayCurrent,
            TransportButton::Pause => UiAction::PauseOrStop,
            TransportButton::Stop => UiAction::Stop,
            TransportButton::Loop => UiAction::ToggleLoop,
            TransportButton::Shuffle => UiAction::ToggleShuffle,
            TransportButton::VolumeDown => UiAction::VolumeDown,
            TransportButton::VolumeUp => UiAction::VolumeUp,
        },
        Hit::Volume(position) => UiAction::SetVolume(position),
        Hit::PreviousPage => UiAction::GoToPage(-1),
        Hit::NextPage => UiAction::GoToPage(1),
    };
    Some(action)
}

/// Layout hit under a screen position, computed from the last drawn frame.
fn hit_at<B: AudioBackend>(model: &AppModel<B>, column: u16, row: u16) -> Option<Hit> {
    let state = model.view_state();
    view::screen_layout(model.ui_state.viewport, &state).hit_test(column, row)
}

impl<B: AudioBackend> AppController<B> {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        // Handle error message first (blocks all other interactions)
        if model.has_error() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_error();
            }
            return Ok(());
        }

        // Handle help popup
        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup();
            }
            return Ok(());
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true);
                return Ok(());
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.toggle_help_popup();
                return Ok(());
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                drop(model);
                self.reveal_selected_album().await;
                return Ok(());
            }
            KeyCode::Char(digit @ '1'..='9') => {
                drop(model);
                self.select_visible_album(digit as usize - '1' as usize).await;
                return Ok(());
            }
            KeyCode::Char(' ') => UiAction::TogglePlayPause,
            KeyCode::Enter => UiAction::PlayCurrent,
            KeyCode::Char('s') | KeyCode::Char('S') => UiAction::Stop,
            KeyCode::Char('n') | KeyCode::Char('N') => UiAction::NextTrack,
            KeyCode::Char('p') | KeyCode::Char('P') => UiAction::PreviousTrack,
            KeyCode::Char('l') | KeyCode::Char('L') => UiAction::ToggleLoop,
            KeyCode::Char('r') | KeyCode::Char('R') => UiAction::ToggleShuffle,
            KeyCode::Char('+') | KeyCode::Char('=') => UiAction::VolumeUp,
            KeyCode::Char('-') => UiAction::VolumeDown,
            KeyCode::Left | KeyCode::PageUp => UiAction::GoToPage(-1),
            KeyCode::Right | KeyCode::PageDown => UiAction::GoToPage(1),
            _ => return Ok(()),
        };

        drop(model);
        self.apply(action).await;
        Ok(())
    }

    pub async fn handle_mouse_event(&self, mouse: MouseEvent) -> Result<()> {
        let mut model = self.model.lock().await;

        match mouse.kind {
            MouseEventKind::Moved => {
                let hovered = match hit_at(&*model, mouse.column, mouse.row) {
                    Some(Hit::AlbumCell(slot)) => model.album_at_slot(slot),
                    _ => None,
                };
                model.set_hovered_album(hovered);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                // Any click dismisses an open overlay instead of reaching the screen below
                if model.has_error() {
                    model.clear_error();
                    return Ok(());
                }
                if model.is_help_popup_open() {
                    model.hide_help_popup();
                    return Ok(());
                }

                let action = hit_at(&*model, mouse.column, mouse.row)
                    .and_then(|hit| resolve_click(&*model, hit));
                drop(model);

                match action {
                    Some(action) => self.apply(action).await,
                    None => tracing::trace!(column = mouse.column, row = mouse.row, "Click on empty space"),
                }
            }
            _ => {}
        }
        Ok(())
    }
}
