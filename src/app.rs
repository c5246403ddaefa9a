//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` in `app::model` owns the track store and the audio backend and
//! routes between the library list and the player screen.

mod model;

pub use model::*;
