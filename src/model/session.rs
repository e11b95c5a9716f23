//! Playback session state machine
//!
//! The session is the only writer of the selected album, the playing track and
//! the live audio handle. Every transition that starts a sound stops the
//! previous one first, so at most one handle is ever outstanding.
//!
//! Track completion is detected by polling: the UI loop calls [`PlaybackSession::tick`]
//! once per frame, so a finished track is noticed at most one tick late.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{ContinuationMode, SessionState};
use crate::audio::{AudioBackend, AudioError};
use crate::catalog::{Album, Catalog, Track};

/// Read-only copy of the session fields the view needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub selected_album: Option<usize>,
    pub playing_track: Option<usize>,
    pub is_playing: bool,
    pub volume: f32,
    pub mode: ContinuationMode,
}

pub struct PlaybackSession<B: AudioBackend> {
    catalog: Arc<Catalog>,
    backend: B,
    /// Opened resources, indexed `[album][track]`. `None` marks an unusable track.
    resources: Vec<Vec<Option<B::Resource>>>,
    open_failures: usize,
    selected_album: Option<usize>,
    playing_track: Option<usize>,
    active: Option<B::Handle>,
    /// Most recent backend start failure, drained by the controller
    last_error: Option<AudioError>,
    volume: f32,
    mode: ContinuationMode,
    rng: StdRng,
}

pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}

impl<B: AudioBackend> PlaybackSession<B> {
    /// Open every track of the catalog once and start in the idle state.
    pub fn new(catalog: Arc<Catalog>, mut backend: B, volume: f32, mode: ContinuationMode) -> Self {
        let mut open_failures = 0;
        let mut resources = Vec::with_capacity(catalog.len());

        for (album_index, album) in catalog.albums().iter().enumerate() {
            let mut opened = Vec::with_capacity(album.tracks.len());
            for (track_index, track) in album.tracks.iter().enumerate() {
                match backend.open(track) {
                    Ok(resource) => opened.push(Some(resource)),
                    Err(e) => {
                        tracing::warn!(
                            album = album_index,
                            track = track_index,
                            name = %track.name,
                            error = %e,
                            "Track cannot be opened, marking unusable"
                        );
                        open_failures += 1;
                        opened.push(None);
                    }
                }
            }
            resources.push(opened);
        }

        tracing::debug!(
            albums = catalog.len(),
            unusable = open_failures,
            "Playback session created"
        );

        Self {
            catalog,
            backend,
            resources,
            open_failures,
            selected_album: None,
            playing_track: None,
            active: None,
            last_error: None,
            volume: clamp_volume(volume),
            mode,
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn selected_album(&self) -> Option<usize> {
        self.selected_album
    }

    pub fn playing_track(&self) -> Option<usize> {
        self.playing_track
    }

    pub fn has_active_handle(&self) -> bool {
        self.active.is_some()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn mode(&self) -> ContinuationMode {
        self.mode
    }

    /// Drain the last backend start failure.
    pub fn take_error(&mut self) -> Option<AudioError> {
        self.last_error.take()
    }

    /// Number of tracks that failed to open when the session was created
    pub fn open_failures(&self) -> usize {
        self.open_failures
    }

    pub fn state(&self) -> SessionState {
        match (self.selected_album, self.playing_track, self.active.is_some()) {
            (None, _, _) => SessionState::Idle,
            (Some(_), None, _) => SessionState::AlbumSelected,
            (Some(_), Some(_), true) => SessionState::Playing,
            (Some(_), Some(_), false) => SessionState::Stopped,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state(),
            selected_album: self.selected_album,
            playing_track: self.playing_track,
            is_playing: self.active.is_some(),
            volume: self.volume,
            mode: self.mode,
        }
    }

    pub fn current_album(&self) -> Option<&Album> {
        self.selected_album.and_then(|i| self.catalog.album(i))
    }

    /// The album and track currently highlighted as playing, sounding or not
    pub fn now_playing(&self) -> Option<(&Album, &Track)> {
        let album = self.current_album()?;
        let track = album.track(self.playing_track?)?;
        Some((album, track))
    }

    pub fn is_playable(&self, album: usize, track: usize) -> bool {
        self.resources
            .get(album)
            .and_then(|tracks| tracks.get(track))
            .is_some_and(Option::is_some)
    }

    fn track_count(&self) -> usize {
        self.current_album().map_or(0, |a| a.tracks.len())
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    pub fn select_album(&mut self, index: usize) {
        let Some(album) = self.catalog.album(index) else {
            tracing::trace!(index, "Album index out of range, ignoring");
            return;
        };
        tracing::info!(
            album = index,
            title = %album.title,
            artist = %album.artist,
            "Album selected"
        );

        self.stop_active();
        self.selected_album = Some(index);
        self.playing_track = None;
    }

    pub fn select_track(&mut self, index: usize) {
        if self.selected_album.is_none() || index >= self.track_count() {
            tracing::trace!(index, "Track selection not actionable, ignoring");
            return;
        }
        self.start_track(index);
    }

    /// Replay the current track from the start, or start the album.
    pub fn play_current(&mut self) {
        if self.selected_album.is_none() {
            return;
        }
        let target = match self.playing_track {
            Some(track) => Some(track),
            None => self.first_playable(),
        };
        if let Some(track) = target {
            self.start_track(track);
        }
    }

    /// Stop the sound but keep the track highlighted so it can be replayed.
    pub fn pause_or_stop(&mut self) {
        if self.stop_active() {
            tracing::info!(track = ?self.playing_track, "Playback paused");
        }
    }

    pub fn toggle_play_pause(&mut self) {
        if self.active.is_some() {
            self.pause_or_stop();
        } else {
            self.play_current();
        }
    }

    /// Stop the sound and forget the track. The album stays selected.
    pub fn stop(&mut self) {
        self.stop_active();
        if self.playing_track.take().is_some() {
            tracing::info!("Playback stopped");
        }
    }

    pub fn next_track(&mut self) {
        let Some(current) = self.playing_track else {
            self.play_current();
            return;
        };
        let target = if self.mode.is_shuffle() {
            self.shuffle_pick(current)
        } else {
            self.next_playable_after(current)
        };
        if let Some(track) = target {
            self.start_track(track);
        }
    }

    pub fn previous_track(&mut self) {
        let Some(current) = self.playing_track else {
            return;
        };
        let target = if self.mode.is_shuffle() {
            self.shuffle_pick(current)
        } else {
            self.previous_playable_before(current)
        };
        if let Some(track) = target {
            self.start_track(track);
        }
    }

    /// Decide what plays after the current track ended naturally.
    pub fn advance_on_completion(&mut self) {
        let Some(current) = self.playing_track else {
            return;
        };
        self.stop_active();

        match self.mode {
            ContinuationMode::Loop => {
                self.start_track(current);
            }
            ContinuationMode::Shuffle => {
                if let Some(next) = self.shuffle_pick(current) {
                    self.start_track(next);
                }
            }
            ContinuationMode::Sequential => match self.next_playable_after(current) {
                Some(next) => {
                    self.start_track(next);
                }
                None => {
                    self.playing_track = None;
                    tracing::info!(album = ?self.selected_album, "End of album reached");
                }
            },
        }
    }

    /// Poll the active handle once. Returns true when a natural completion
    /// was handled.
    pub fn tick(&mut self) -> bool {
        let finished = self
            .active
            .as_ref()
            .is_some_and(|handle| !self.backend.is_sounding(handle));

        if finished {
            tracing::debug!(track = ?self.playing_track, mode = ?self.mode, "Track finished");
            self.advance_on_completion();
        }
        finished
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        if let Some(handle) = &self.active {
            self.backend.set_volume(handle, self.volume);
        }
        tracing::debug!(volume = self.volume, "Volume set");
    }

    pub fn volume_up(&mut self, step: f32) {
        self.set_volume(self.volume + step);
    }

    pub fn volume_down(&mut self, step: f32) {
        self.set_volume(self.volume - step);
    }

    pub fn toggle_loop(&mut self) {
        self.mode = self.mode.toggled_loop();
        tracing::info!(mode = ?self.mode, "Continuation mode changed");
    }

    pub fn toggle_shuffle(&mut self) {
        self.mode = self.mode.toggled_shuffle();
        tracing::info!(mode = ?self.mode, "Continuation mode changed");
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Returns whether a handle was stopped.
    fn stop_active(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                self.backend.stop(handle);
                true
            }
            None => false,
        }
    }

    /// Start `index` of the selected album. An unusable track leaves the
    /// session untouched; a backend failure leaves it without a handle and
    /// with the previous track index.
    fn start_track(&mut self, index: usize) -> bool {
        let Some(album) = self.selected_album else {
            return false;
        };
        let Some(resource) = self
            .resources
            .get(album)
            .and_then(|tracks| tracks.get(index))
            .and_then(Option::as_ref)
        else {
            tracing::warn!(album, track = index, "Track is unusable, skipping");
            return false;
        };

        if let Some(handle) = self.active.take() {
            self.backend.stop(handle);
        }

        let name = self
            .catalog
            .album(album)
            .and_then(|a| a.track(index))
            .map_or("", |t| t.name.as_str());

        match self.backend.play(resource, self.volume) {
            Ok(handle) => {
                tracing::info!(album, track = index, name, volume = self.volume, "Track started");
                self.active = Some(handle);
                self.playing_track = Some(index);
                true
            }
            Err(e) => {
                tracing::warn!(album, track = index, name, error = %e, "Backend failed to start track");
                self.last_error = Some(e);
                false
            }
        }
    }

    fn first_playable(&self) -> Option<usize> {
        let album = self.selected_album?;
        (0..self.track_count()).find(|&t| self.is_playable(album, t))
    }

    fn next_playable_after(&self, current: usize) -> Option<usize> {
        let album = self.selected_album?;
        (current + 1..self.track_count()).find(|&t| self.is_playable(album, t))
    }

    fn previous_playable_before(&self, current: usize) -> Option<usize> {
        let album = self.selected_album?;
        (0..current).rev().find(|&t| self.is_playable(album, t))
    }

    /// Uniform pick among the playable tracks, never the current one when
    /// there is an alternative.
    fn shuffle_pick(&mut self, current: usize) -> Option<usize> {
        let album = self.selected_album?;
        let playable: Vec<usize> = (0..self.track_count())
            .filter(|&t| self.is_playable(album, t))
            .collect();

        let choices: Vec<usize> = if playable.len() > 1 {
            playable.into_iter().filter(|&t| t != current).collect()
        } else {
            playable
        };
        if choices.is_empty() {
            return None;
        }
        Some(choices[self.rng.gen_range(0..choices.len())])
    }
}

impl<B: AudioBackend> Drop for PlaybackSession<B> {
    fn drop(&mut self) {
        self.stop_active();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::FakeBackend;
    use std::collections::HashSet;
    use std::path::Path;
    use std::sync::atomic::Ordering;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![
            Album::new(
                "Three",
                "A",
                None,
                vec![
                    Track::new("A0", "a/0.mp3"),
                    Track::new("A1", "a/1.mp3"),
                    Track::new("A2", "a/2.mp3"),
                ],
            ),
            Album::new(
                "Two",
                "B",
                None,
                vec![Track::new("B0", "b/0.mp3"), Track::new("B1", "b/1.mp3")],
            ),
            Album::new("Empty", "C", None, vec![]),
            Album::new(
                "Four",
                "D",
                None,
                vec![
                    Track::new("D0", "d/0.mp3"),
                    Track::new("D1", "d/1.mp3"),
                    Track::new("D2", "d/2.mp3"),
                    Track::new("D3", "d/3.mp3"),
                ],
            ),
        ]))
    }

    fn session_with(backend: FakeBackend) -> PlaybackSession<FakeBackend> {
        PlaybackSession::new(catalog(), backend, 0.5, ContinuationMode::Sequential).with_seed(7)
    }

    fn session() -> PlaybackSession<FakeBackend> {
        session_with(FakeBackend::new())
    }

    fn assert_invariants(s: &PlaybackSession<FakeBackend>) {
        if s.has_active_handle() {
            assert!(s.playing_track().is_some(), "handle without a track");
        }
        if let Some(track) = s.playing_track() {
            let album = s.selected_album().expect("track without an album");
            assert!(track < s.catalog.album(album).unwrap().tracks.len());
        }
        if let Some(album) = s.selected_album() {
            assert!(album < s.catalog.len());
        }
        assert!(s.backend().live_count() <= 1);
        assert_eq!(s.backend().live_count(), usize::from(s.has_active_handle()));
        assert!((0.0..=1.0).contains(&s.volume()));
    }

    #[test]
    fn starts_idle() {
        let s = session();
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.selected_album(), None);
        assert_eq!(s.playing_track(), None);
        assert!(!s.has_active_handle());
        assert_eq!(s.mode(), ContinuationMode::Sequential);
    }

    #[test]
    fn select_track_plays_at_current_volume() {
        let mut s = session();
        s.select_album(0);
        s.select_track(1);

        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.playing_track(), Some(1));
        assert_eq!(s.backend().live_path(), Some(Path::new("a/1.mp3")));
        assert_eq!(s.backend().live_volume(), Some(0.5));
    }

    #[test]
    fn selecting_another_album_clears_playback() {
        let mut s = session();
        s.select_album(0);
        s.select_track(2);
        assert!(s.has_active_handle());

        s.select_album(1);

        assert_eq!(s.selected_album(), Some(1));
        assert_eq!(s.playing_track(), None);
        assert!(!s.has_active_handle());
        assert_eq!(s.backend().live_count(), 0);
        assert_eq!(s.state(), SessionState::AlbumSelected);
    }

    #[test]
    fn reselecting_the_same_album_resets() {
        let mut s = session();
        s.select_album(0);
        s.select_track(0);

        s.select_album(0);

        assert_eq!(s.playing_track(), None);
        assert!(!s.has_active_handle());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut s = session();
        s.select_album(99);
        assert_eq!(s.state(), SessionState::Idle);

        s.select_track(0);
        assert_eq!(s.state(), SessionState::Idle);

        s.select_album(1);
        s.select_track(0);
        s.select_track(5);
        assert_eq!(s.playing_track(), Some(0));
        assert_eq!(s.backend().started.len(), 1);
    }

    #[test]
    fn starting_a_track_stops_the_previous_one() {
        let mut s = session();
        s.select_album(3);
        for track in [0, 1, 2, 3, 1] {
            s.select_track(track);
            assert_invariants(&s);
        }
        assert_eq!(s.backend().max_live, 1);
        assert_eq!(s.backend().stopped, 4);
    }

    #[test]
    fn play_current_starts_first_track() {
        let mut s = session();
        s.select_album(1);
        s.play_current();

        assert_eq!(s.playing_track(), Some(0));
        assert!(s.has_active_handle());
    }

    #[test]
    fn play_current_replays_with_a_fresh_handle() {
        let mut s = session();
        s.select_album(0);
        s.select_track(2);
        s.play_current();

        assert_eq!(s.playing_track(), Some(2));
        assert_eq!(s.backend().started.len(), 2);
        assert_eq!(s.backend().live_count(), 1);
    }

    #[test]
    fn play_current_without_album_is_a_no_op() {
        let mut s = session();
        s.play_current();
        assert_eq!(s.state(), SessionState::Idle);
        assert!(s.backend().started.is_empty());
    }

    #[test]
    fn empty_album_never_creates_a_handle() {
        let mut s = session();
        s.select_album(2);
        s.play_current();
        s.toggle_play_pause();
        s.select_track(0);
        s.next_track();
        s.tick();

        assert_eq!(s.state(), SessionState::AlbumSelected);
        assert!(s.backend().started.is_empty());
    }

    #[test]
    fn pause_keeps_the_track_and_is_idempotent() {
        let mut s = session();
        s.select_album(0);
        s.select_track(1);

        s.pause_or_stop();
        assert_eq!(s.playing_track(), Some(1));
        assert!(!s.has_active_handle());
        assert_eq!(s.state(), SessionState::Stopped);

        s.pause_or_stop();
        assert_eq!(s.playing_track(), Some(1));
        assert!(!s.has_active_handle());
        assert_eq!(s.backend().stopped, 1);
    }

    #[test]
    fn toggle_play_pause_resumes_from_the_start_of_the_same_track() {
        let mut s = session();
        s.select_album(0);
        s.select_track(1);

        s.toggle_play_pause();
        assert!(!s.has_active_handle());

        s.toggle_play_pause();
        assert!(s.has_active_handle());
        assert_eq!(s.playing_track(), Some(1));
        assert_eq!(s.backend().started.len(), 2);
    }

    #[test]
    fn stop_forgets_the_track_but_keeps_the_album() {
        let mut s = session();
        s.select_album(0);
        s.select_track(1);
        s.stop();

        assert_eq!(s.selected_album(), Some(0));
        assert_eq!(s.playing_track(), None);
        assert_eq!(s.state(), SessionState::AlbumSelected);
    }

    #[test]
    fn sequential_advances_then_ends_without_wrapping() {
        let mut s = session();
        s.select_album(0);
        s.select_track(0);

        s.advance_on_completion();
        assert_eq!(s.playing_track(), Some(1));
        assert!(s.has_active_handle());

        s.select_track(2);
        s.advance_on_completion();
        assert_eq!(s.playing_track(), None);
        assert!(!s.has_active_handle());
        assert_eq!(s.backend().live_count(), 0);
    }

    #[test]
    fn loop_replays_the_same_track() {
        let mut s = session();
        s.select_album(0);
        s.select_track(1);
        s.toggle_loop();

        s.advance_on_completion();

        assert_eq!(s.playing_track(), Some(1));
        assert!(s.has_active_handle());
        assert_eq!(s.backend().started, vec![Path::new("a/1.mp3"), Path::new("a/1.mp3")]);
        assert_eq!(s.backend().live_count(), 1);
    }

    #[test]
    fn shuffle_never_repeats_immediately() {
        let mut s = session();
        s.select_album(3);
        s.select_track(0);
        s.toggle_shuffle();

        for _ in 0..100 {
            let before = s.playing_track();
            s.advance_on_completion();
            assert_ne!(s.playing_track(), before);
            assert!(s.has_active_handle());
        }
    }

    #[test]
    fn shuffle_on_a_three_track_album_visits_every_other_track() {
        let mut s = session();
        s.select_album(0);
        s.select_track(0);
        s.toggle_shuffle();

        let mut seen = [false; 3];
        for _ in 0..100 {
            s.advance_on_completion();
            seen[s.playing_track().unwrap()] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn tick_only_advances_on_natural_completion() {
        let mut s = session();
        s.select_album(0);
        s.select_track(0);

        assert!(!s.tick());
        assert_eq!(s.playing_track(), Some(0));

        s.backend_mut().finish_all();
        assert!(s.tick());
        assert_eq!(s.playing_track(), Some(1));
        assert_invariants(&s);
    }

    #[test]
    fn explicit_pause_is_not_a_completion() {
        let mut s = session();
        s.select_album(0);
        s.select_track(0);
        s.pause_or_stop();

        assert!(!s.tick());
        assert_eq!(s.playing_track(), Some(0));
        assert!(!s.has_active_handle());
    }

    #[test]
    fn volume_is_clamped_and_applied_live() {
        let mut s = session();
        s.set_volume(-0.5);
        assert_eq!(s.volume(), 0.0);
        s.set_volume(1.7);
        assert_eq!(s.volume(), 1.0);
        s.set_volume(f32::NAN);
        assert_eq!(s.volume(), 0.0);

        s.select_album(0);
        s.select_track(0);
        s.set_volume(0.25);
        assert_eq!(s.backend().live_volume(), Some(0.25));
    }

    #[test]
    fn volume_steps_stay_in_range() {
        let mut s = session();
        s.set_volume(0.97);
        s.volume_up(0.05);
        assert_eq!(s.volume(), 1.0);

        s.set_volume(0.1);
        s.volume_down(0.05);
        assert!((s.volume() - 0.05).abs() < 1e-6);
        s.volume_down(0.5);
        assert_eq!(s.volume(), 0.0);
    }

    #[test]
    fn backend_start_failure_keeps_prior_selection() {
        let mut s = session();
        s.select_album(0);
        s.select_track(0);
        s.backend_mut().fail_play = true;

        s.select_track(2);

        assert_eq!(s.playing_track(), Some(0));
        assert!(!s.has_active_handle());
        assert!(matches!(s.take_error(), Some(AudioError::Start(_))));
        assert!(s.take_error().is_none());
        assert_invariants(&s);
    }

    #[test]
    fn unusable_track_is_skipped_without_touching_playback() {
        let mut s = session_with(FakeBackend::refusing(&["a/1.mp3"]));
        assert_eq!(s.open_failures(), 1);
        assert!(!s.is_playable(0, 1));

        s.select_album(0);
        s.select_track(0);
        s.select_track(1);
        assert_eq!(s.playing_track(), Some(0));
        assert!(s.has_active_handle());

        s.advance_on_completion();
        assert_eq!(s.playing_track(), Some(2));
    }

    #[test]
    fn next_and_previous_stay_within_the_album() {
        let mut s = session();
        s.select_album(1);
        s.next_track();
        assert_eq!(s.playing_track(), Some(0));

        s.next_track();
        assert_eq!(s.playing_track(), Some(1));
        s.next_track();
        assert_eq!(s.playing_track(), Some(1));

        s.previous_track();
        assert_eq!(s.playing_track(), Some(0));
        s.previous_track();
        assert_eq!(s.playing_track(), Some(0));
    }

    #[test]
    fn manual_skips_in_shuffle_never_repeat_the_current_track() {
        let mut s = session();
        s.select_album(3);
        s.select_track(2);
        s.toggle_shuffle();

        for _ in 0..100 {
            let before = s.playing_track();
            s.next_track();
            assert_ne!(s.playing_track(), before);
            assert_invariants(&s);

            let before = s.playing_track();
            s.previous_track();
            assert_ne!(s.playing_track(), before);
            assert_invariants(&s);
        }
    }

    #[test]
    fn previous_in_shuffle_is_not_a_plain_step_back() {
        let mut s = session();
        s.select_album(3);
        s.toggle_shuffle();

        let mut picks = HashSet::new();
        for _ in 0..50 {
            s.select_track(3);
            s.previous_track();
            picks.extend(s.playing_track());
        }
        assert!(!picks.contains(&3));
        assert!(picks.len() > 1, "shuffle always stepped back to {picks:?}");
    }

    #[test]
    fn dropping_a_playing_session_stops_its_handle() {
        let backend = FakeBackend::new();
        let stops = backend.stop_counter();
        let mut s = session_with(backend);
        s.select_album(0);
        s.select_track(1);
        assert_eq!(stops.load(Ordering::SeqCst), 0);

        drop(s);

        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_an_idle_session_stops_nothing() {
        let backend = FakeBackend::new();
        let stops = backend.stop_counter();
        drop(session_with(backend));
        assert_eq!(stops.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn invariants_hold_over_a_random_script() {
        let mut s = session_with(FakeBackend::refusing(&["d/2.mp3"]));
        let mut script = StdRng::seed_from_u64(42);

        for _ in 0..2_000 {
            match script.gen_range(0..13) {
                0 => s.select_album(script.gen_range(0..6)),
                1 => s.select_track(script.gen_range(0..6)),
                2 => s.play_current(),
                3 => s.pause_or_stop(),
                4 => s.toggle_play_pause(),
                5 => s.stop(),
                6 => s.next_track(),
                7 => s.previous_track(),
                8 => s.toggle_loop(),
                9 => s.toggle_shuffle(),
                10 => s.set_volume(script.gen_range(-1.0..2.0)),
                11 => {
                    s.backend_mut().finish_all();
                    s.tick();
                }
                _ => {
                    s.tick();
                }
            }
            assert_invariants(&s);
        }
    }
}
