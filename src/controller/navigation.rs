//! Navigation-related controller methods (album selection, paging)

use crate::audio::AudioBackend;
use super::AppController;

impl<B: AudioBackend> AppController<B> {
    pub async fn select_album(&self, index: usize) {
        let mut model = self.model.lock().await;
        model.session.select_album(index);
    }

    pub async fn select_track(&self, index: usize) {
        let mut model = self.model.lock().await;
        model.session.select_track(index);
        Self::surface_playback_error(&mut *model);
    }

    /// Select the album shown in cell `slot` of the current page.
    pub async fn select_visible_album(&self, slot: usize) {
        let mut model = self.model.lock().await;
        match model.album_at_slot(slot) {
            Some(index) => model.session.select_album(index),
            None => tracing::trace!(slot, "No album in this cell, ignoring"),
        }
    }

    pub async fn step_page(&self, delta: isize) {
        let mut model = self.model.lock().await;
        model.step_page(delta);
    }

    pub async fn reveal_selected_album(&self) {
        let mut model = self.model.lock().await;
        model.reveal_selected_album();
    }
}
