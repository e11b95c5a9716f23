//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (continuation mode, UI state, actions)
//! - `session`: Playback session state machine
//! - `paging`: Album grid paging
//! - `app_model`: Main application model owning the session, paging and UI state

mod types;
mod session;
mod paging;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ContinuationMode, SessionState, UiAction, UiState};

pub use session::{clamp_volume, PlaybackSession, SessionSnapshot};

pub use paging::{visible_slice, PagingState};

pub use app_model::{AppModel, ViewState};
