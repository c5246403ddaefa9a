use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::error::{Error, Result};
use crate::library::{AssetResolver, MediaRef};

use super::sink::create_sink;
use super::types::{AudioBackend, SoundHandle};

/// Audio backend playing through the default output device.
pub struct RodioBackend {
    stream: OutputStream,
    assets: AssetResolver,
    client: reqwest::blocking::Client,
}

impl RodioBackend {
    pub fn new(assets: AssetResolver, fetch_timeout: Duration) -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        let client = reqwest::blocking::Client::builder()
            .timeout(fetch_timeout)
            .build()
            .map_err(|source| Error::Fetch {
                uri: String::new(),
                source,
            })?;

        Ok(Self {
            stream,
            assets,
            client,
        })
    }
}

impl AudioBackend for RodioBackend {
    type Handle = Sink;

    fn load(&self, media: &MediaRef) -> Result<Sink> {
        let sink = create_sink(&self.stream, media, &self.assets, &self.client)?;
        tracing::info!(media = %media, "audio handle created");
        Ok(sink)
    }
}

impl SoundHandle for Sink {
    fn play(&self) {
        Sink::play(self);
    }

    fn pause(&self) {
        Sink::pause(self);
    }

    fn position(&self) -> Duration {
        self.get_pos()
    }

    fn is_finished(&self) -> bool {
        self.empty()
    }

    fn unload(self) {
        self.stop();
    }
}
