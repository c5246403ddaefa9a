//! Crate-wide error type.
//!
//! Store, asset and audio failures all surface through [`Error`]; callers in
//! the runtime log them and leave the current screen state untouched.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Opening the database or running a statement failed.
    #[error("track store: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An asset id that would escape the assets directory or is empty.
    #[error("invalid asset id {0:?}")]
    AssetPath(String),

    #[error("failed to decode audio from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("no audio output device: {0}")]
    Output(#[from] rodio::StreamError),

    #[error("failed to fetch {uri}: {source}")]
    Fetch {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The `songs` table carries a single locality flag per row.
    #[error("track {title:?} mixes local and remote media references")]
    MixedLocality { title: String },

    #[error("row {id} in songs table cannot be decoded: {reason}")]
    CorruptRow { id: i64, reason: String },
}
