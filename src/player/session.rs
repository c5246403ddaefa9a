use std::time::Duration;

use crate::audio::{AudioBackend, SoundHandle};
use crate::error::Result;
use crate::library::{Track, TrackId};

/// Transport state of a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// No audio handle exists.
    #[default]
    Idle,
    /// A handle exists and is paused.
    Paused,
    /// A handle exists and is playing.
    Playing,
}

/// Where the selected track sits in a freshly loaded sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartPosition {
    Found(usize),
    /// The selected identity is not part of the sequence.
    NotFound,
}

impl StartPosition {
    /// Locate `id` in `tracks`.
    pub fn resolve(tracks: &[Track], id: TrackId) -> Self {
        match tracks.iter().position(|t| t.id == id) {
            Some(i) => Self::Found(i),
            None => Self::NotFound,
        }
    }
}

pub struct PlaybackSession<H: SoundHandle> {
    tracks: Vec<Track>,
    index: usize,
    handle: Option<H>,
    state: PlaybackState,
}

impl<H: SoundHandle> PlaybackSession<H> {
    /// Create an idle session positioned at `start`. A start past the end of
    /// the sequence is clamped to the first track.
    pub fn new(tracks: Vec<Track>, start: usize) -> Self {
        let index = if start < tracks.len() { start } else { 0 };
        Self {
            tracks,
            index,
            handle: None,
            state: PlaybackState::default(),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.index)
    }

    /// Play/pause. Without a handle, one is created for the current track and
    /// starts immediately. On failure the session stays idle.
    pub fn toggle<B>(&mut self, audio: &B) -> Result<PlaybackState>
    where
        B: AudioBackend<Handle = H>,
    {
        if self.handle.is_none() {
            let Some(track) = self.tracks.get(self.index) else {
                return Ok(self.state);
            };
            let handle = audio.load(&track.audio)?;
            tracing::debug!(id = %track.id, title = %track.title, "playing");
            self.handle = Some(handle);
            self.state = PlaybackState::Playing;
            return Ok(self.state);
        }

        if let Some(handle) = &self.handle {
            self.state = if self.state == PlaybackState::Playing {
                handle.pause();
                PlaybackState::Paused
            } else {
                handle.play();
                PlaybackState::Playing
            };
        }
        Ok(self.state)
    }

    /// Release the handle and move to the following track, wrapping to the first.
    pub fn next(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        self.release();
        self.index = (self.index + 1) % len;
    }

    /// Release the handle and move to the preceding track, wrapping to the last.
    pub fn previous(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        self.release();
        self.index = (self.index + len - 1) % len;
    }

    /// Drop a handle whose source has played out so the next `toggle`
    /// restarts the current track.
    pub fn tick(&mut self) {
        if self.handle.as_ref().is_some_and(|h| h.is_finished()) {
            tracing::debug!(index = self.index, "track finished");
            self.release();
        }
    }

    /// Position within the current track, if a handle is live.
    pub fn elapsed(&self) -> Option<Duration> {
        self.handle.as_ref().map(|h| h.position())
    }

    fn release(&mut self) {
        if let Some(h) = self.handle.take() {
            h.unload();
        }
        self.state = PlaybackState::Idle;
    }
}

impl<H: SoundHandle> Drop for PlaybackSession<H> {
    fn drop(&mut self) {
        self.release();
    }
}
