use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;

use crate::catalog::Track;

pub const DEFAULT_VOLUME: f32 = 0.8;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Device(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("cannot start playback: {0}")]
    Start(String),
}

/// Playback capability used by the session.
///
/// There is no pause primitive: a handle is either sounding or stopped, and a
/// stopped handle is never restarted. Replaying a track means calling `play`
/// again on the same resource.
pub trait AudioBackend {
    /// A track opened once and playable any number of times.
    type Resource;
    /// One in-progress sounding of a resource.
    type Handle;

    fn open(&mut self, track: &Track) -> Result<Self::Resource, AudioError>;
    fn play(&mut self, resource: &Self::Resource, volume: f32) -> Result<Self::Handle, AudioError>;
    fn stop(&mut self, handle: Self::Handle);
    fn is_sounding(&self, handle: &Self::Handle) -> bool;
    fn set_volume(&mut self, handle: &Self::Handle, volume: f32);
}

/// Encoded audio kept in memory so every replay decodes from the start
#[derive(Clone)]
pub struct RodioResource {
    path: PathBuf,
    bytes: Arc<[u8]>,
}

pub struct RodioHandle {
    sink: Sink,
}

/// rodio-backed output. The `OutputStream` itself must stay alive for as long
/// as this backend is used, so it is returned to the caller by [`RodioBackend::open_default`].
pub struct RodioBackend {
    stream: OutputStreamHandle,
}

impl RodioBackend {
    pub fn open_default() -> Result<(OutputStream, Self), AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
        tracing::info!("Audio output opened on default device");
        Ok((stream, Self { stream: handle }))
    }

    fn decoder(resource: &RodioResource) -> Result<Decoder<Cursor<Arc<[u8]>>>, AudioError> {
        Decoder::new(Cursor::new(Arc::clone(&resource.bytes))).map_err(|e| AudioError::Decode {
            path: resource.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl AudioBackend for RodioBackend {
    type Resource = RodioResource;
    type Handle = RodioHandle;

    fn open(&mut self, track: &Track) -> Result<RodioResource, AudioError> {
        let bytes = fs::read(&track.audio).map_err(|source| AudioError::Io {
            path: track.audio.clone(),
            source,
        })?;
        let resource = RodioResource {
            path: track.audio.clone(),
            bytes: Arc::from(bytes),
        };
        // Probe once so a corrupt file is rejected at load rather than on click
        Self::decoder(&resource)?;
        Ok(resource)
    }

    fn play(&mut self, resource: &RodioResource, volume: f32) -> Result<RodioHandle, AudioError> {
        let sink = Sink::try_new(&self.stream).map_err(|e| AudioError::Start(e.to_string()))?;
        let source = Self::decoder(resource)?;
        sink.set_volume(volume);
        sink.append(source);
        sink.play();
        tracing::debug!(path = %resource.path.display(), volume, "Sink started");
        Ok(RodioHandle { sink })
    }

    fn stop(&mut self, handle: RodioHandle) {
        handle.sink.stop();
    }

    fn is_sounding(&self, handle: &RodioHandle) -> bool {
        !handle.sink.empty()
    }

    fn set_volume(&mut self, handle: &RodioHandle, volume: f32) {
        handle.sink.set_volume(volume);
    }
}
