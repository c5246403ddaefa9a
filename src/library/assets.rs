use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

use super::model::{AssetId, MediaRef};

/// Maps bundled asset ids onto files below a root directory.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `id` to a path under the root. Ids must be relative and may not
    /// climb out of the root.
    pub fn resolve(&self, id: &AssetId) -> Result<PathBuf> {
        let rel = Path::new(id.as_str());
        if id.as_str().trim().is_empty() {
            return Err(Error::AssetPath(id.to_string()));
        }
        let only_normal = rel.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !only_normal {
            return Err(Error::AssetPath(id.to_string()));
        }
        Ok(self.root.join(rel))
    }

    /// Text shown where artwork would be drawn: a file path for bundled
    /// assets, the URI otherwise.
    pub fn describe(&self, media: &MediaRef) -> String {
        match media {
            MediaRef::Local(id) => match self.resolve(id) {
                Ok(p) => p.display().to_string(),
                Err(_) => format!("<invalid asset {id}>"),
            },
            MediaRef::Remote(uri) => uri.clone(),
        }
    }
}
