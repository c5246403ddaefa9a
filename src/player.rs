//! Playback controller for the now-playing screen.
//!
//! A [`PlaybackSession`] owns an ordered track sequence, a cursor into it and
//! at most one live audio handle. Skipping tracks never auto-plays; the user
//! starts each track with `toggle`.

mod session;

pub use session::*;
