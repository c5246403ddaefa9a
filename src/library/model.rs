use std::fmt;

/// Store-assigned identity of a track row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub i64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a file bundled under the assets directory, e.g. `apt.mp3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a piece of media (artwork or audio) comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRef {
    /// Bundled with the application, resolved through [`super::AssetResolver`].
    Local(AssetId),
    /// Fetched from a URI.
    Remote(String),
}

impl MediaRef {
    pub fn local(id: impl Into<String>) -> Self {
        Self::Local(AssetId::new(id))
    }

    #[cfg(test)]
    pub fn remote(uri: impl Into<String>) -> Self {
        Self::Remote(uri.into())
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// The text stored in the `imageUrl` / `audioUrl` columns.
    pub fn as_column(&self) -> &str {
        match self {
            Self::Local(id) => id.as_str(),
            Self::Remote(uri) => uri,
        }
    }

    /// Rebuild a reference from a stored column and the row's locality flag.
    pub fn from_column(value: String, is_local: bool) -> Option<Self> {
        if value.trim().is_empty() {
            return None;
        }
        Some(if is_local {
            Self::Local(AssetId(value))
        } else {
            Self::Remote(value)
        })
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(id) => write!(f, "asset:{id}"),
            Self::Remote(uri) => f.write_str(uri),
        }
    }
}

/// A track as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub image: MediaRef,
    pub audio: MediaRef,
}

impl Track {
    /// Whether the track's media is bundled with the application.
    pub fn is_local(&self) -> bool {
        self.audio.is_local()
    }
}

/// A track that has not been inserted yet (no identity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrack {
    pub title: String,
    pub artist: String,
    pub image: MediaRef,
    pub audio: MediaRef,
}

impl NewTrack {
    pub fn local(title: &str, artist: &str, image: &str, audio: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            image: MediaRef::local(image),
            audio: MediaRef::local(audio),
        }
    }

    #[cfg(test)]
    pub fn remote(title: &str, artist: &str, image: &str, audio: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            image: MediaRef::remote(image),
            audio: MediaRef::remote(audio),
        }
    }

    /// Locality of the row, or `None` when image and audio disagree.
    pub fn locality(&self) -> Option<bool> {
        let local = self.audio.is_local();
        (self.image.is_local() == local).then_some(local)
    }
}
