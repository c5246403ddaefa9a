//! Traits shared by audio backends.
//!
//! A backend turns a [`MediaRef`] into a live handle that is already playing.
//! The handle is released with [`SoundHandle::unload`]; dropping it without
//! unloading is also allowed and silences it.

use std::time::Duration;

use crate::error::Result;
use crate::library::MediaRef;

pub trait SoundHandle {
    /// Resume playback.
    fn play(&self);
    /// Pause playback, keeping the position.
    fn pause(&self);
    /// Position within the current source.
    fn position(&self) -> Duration;
    /// Whether the source has played to its end.
    fn is_finished(&self) -> bool;
    /// Stop and release the handle.
    fn unload(self);
}

pub trait AudioBackend {
    type Handle: SoundHandle;

    /// Create a handle for `media` and start it immediately.
    fn load(&self, media: &MediaRef) -> Result<Self::Handle>;
}
