use std::path::Path;
use std::time::Duration;

use crate::audio::RodioBackend;
use crate::config;
use crate::error::Result;
use crate::library::{AssetResolver, seed_tracks};
use crate::store::TrackStore;

/// Open the track store, seeding it on first start when enabled.
pub fn open_store(path: &Path, settings: &config::Settings) -> Result<TrackStore> {
    let seed = if settings.library.seed {
        seed_tracks()
    } else {
        Vec::new()
    };

    TrackStore::open(path, &seed).inspect_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to open track store");
    })
}

/// Open the default audio output.
pub fn open_audio(settings: &config::Settings) -> Result<(RodioBackend, AssetResolver)> {
    let assets = AssetResolver::new(&settings.library.assets_dir);
    let timeout = Duration::from_millis(settings.audio.fetch_timeout_ms);

    let audio = RodioBackend::new(assets.clone(), timeout).inspect_err(|e| {
        tracing::error!(error = %e, "failed to open audio output");
    })?;
    Ok((audio, assets))
}
