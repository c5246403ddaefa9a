use super::sink::open_source;
use crate::error::Error;
use crate::library::{AssetResolver, MediaRef};
use tempfile::tempdir;

fn client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::new()
}

#[test]
fn open_source_reports_missing_asset_file() {
    let dir = tempdir().unwrap();
    let assets = AssetResolver::new(dir.path());

    let err = open_source(&MediaRef::local("missing.mp3"), &assets, &client())
        .err()
        .unwrap();
    assert!(matches!(err, Error::Io { ref path, .. } if path.ends_with("missing.mp3")));
}

#[test]
fn open_source_rejects_escaping_asset_ids() {
    let dir = tempdir().unwrap();
    let assets = AssetResolver::new(dir.path());

    let err = open_source(&MediaRef::local("../x.mp3"), &assets, &client())
        .err()
        .unwrap();
    assert!(matches!(err, Error::AssetPath(_)));
}

#[test]
fn open_source_reports_undecodable_asset() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("noise.mp3"), b"definitely not audio").unwrap();
    let assets = AssetResolver::new(dir.path());

    let err = open_source(&MediaRef::local("noise.mp3"), &assets, &client())
        .err()
        .unwrap();
    assert!(matches!(err, Error::Decode { .. }));
}
