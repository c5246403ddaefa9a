//! Opening media for `rodio`.
//!
//! Bundled assets are read from disk, remote references are downloaded in
//! full before decoding so the decoder can seek.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};

use rodio::{Decoder, OutputStream, Sink};

use crate::error::{Error, Result};
use crate::library::{AssetResolver, MediaRef};

/// A seekable reader over either a bundled file or downloaded bytes.
pub(super) enum MediaReader {
    File(BufReader<File>),
    Memory(Cursor<Vec<u8>>),
}

impl Read for MediaReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(r) => r.read(buf),
            Self::Memory(r) => r.read(buf),
        }
    }
}

impl Seek for MediaReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            Self::File(r) => r.seek(pos),
            Self::Memory(r) => r.seek(pos),
        }
    }
}

/// Open `media` and wrap it in a decoder.
pub(super) fn open_source(
    media: &MediaRef,
    assets: &AssetResolver,
    client: &reqwest::blocking::Client,
) -> Result<Decoder<MediaReader>> {
    let reader = match media {
        MediaRef::Local(id) => {
            let path = assets.resolve(id)?;
            let file = File::open(&path).map_err(|source| Error::Io { path, source })?;
            MediaReader::File(BufReader::new(file))
        }
        MediaRef::Remote(uri) => MediaReader::Memory(Cursor::new(fetch(client, uri)?)),
    };

    Decoder::new(reader).map_err(|source| Error::Decode {
        origin: media.to_string(),
        source,
    })
}

fn fetch(client: &reqwest::blocking::Client, uri: &str) -> Result<Vec<u8>> {
    let fetch_err = |source| Error::Fetch {
        uri: uri.to_string(),
        source,
    };

    let response = client
        .get(uri)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)?;
    let bytes = response.bytes().map_err(fetch_err)?;
    tracing::debug!(uri, len = bytes.len(), "fetched remote audio");
    Ok(bytes.to_vec())
}

/// Create a playing `Sink` for `media` on `stream`.
pub(super) fn create_sink(
    stream: &OutputStream,
    media: &MediaRef,
    assets: &AssetResolver,
    client: &reqwest::blocking::Client,
) -> Result<Sink> {
    let source = open_source(media, assets, client)?;
    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.play();
    Ok(sink)
}
