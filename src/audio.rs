//! Audio output: the backend seam used by the playback controller and its
//! rodio implementation.

mod player;
mod sink;
mod types;

pub use player::RodioBackend;
pub use types::*;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
