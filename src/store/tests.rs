use super::*;
use crate::library::{MediaRef, seed_tracks};
use tempfile::tempdir;

fn seed() -> Vec<NewTrack> {
    seed_tracks()
}

#[test]
fn empty_store_is_seeded_with_sequential_ids() {
    let store = TrackStore::open_in_memory(&seed()).unwrap();
    let tracks = store.all().unwrap();

    assert_eq!(tracks.len(), 4);
    let ids: Vec<i64> = tracks.iter().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    for (track, expected) in tracks.iter().zip(seed()) {
        assert_eq!(track.title, expected.title);
        assert_eq!(track.artist, expected.artist);
        assert_eq!(track.image, expected.image);
        assert_eq!(track.audio, expected.audio);
        assert!(track.is_local());
    }
}

#[test]
fn reopening_a_populated_store_inserts_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("musicdb.db");

    {
        let store = TrackStore::open(&path, &seed()).unwrap();
        assert_eq!(store.count().unwrap(), 4);
    }

    let store = TrackStore::open(&path, &seed()).unwrap();
    let tracks = store.all().unwrap();
    assert_eq!(tracks.len(), 4);
    assert_eq!(tracks.last().unwrap().id, TrackId(4));
}

#[test]
fn reopening_with_a_different_seed_keeps_existing_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicdb.db");

    TrackStore::open(&path, &seed()).unwrap();
    let other = vec![NewTrack::local("Other", "Someone", "o.jpg", "o.mp3")];
    let store = TrackStore::open(&path, &other).unwrap();

    let titles: Vec<String> = store.all().unwrap().into_iter().map(|t| t.title).collect();
    assert_eq!(titles.len(), 4);
    assert!(!titles.contains(&"Other".to_string()));
}

#[test]
fn empty_seed_leaves_store_empty() {
    let store = TrackStore::open_in_memory(&[]).unwrap();
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.all().unwrap().is_empty());
}

#[test]
fn remote_tracks_round_trip_as_remote_refs() {
    let seed = vec![NewTrack::remote(
        "Stream",
        "Radio",
        "https://cdn.example.com/s.jpg",
        "https://cdn.example.com/s.mp3",
    )];
    let store = TrackStore::open_in_memory(&seed).unwrap();
    let track = &store.all().unwrap()[0];

    assert!(!track.is_local());
    assert_eq!(track.audio, MediaRef::remote("https://cdn.example.com/s.mp3"));
}

#[test]
fn mixed_locality_seed_is_rejected_and_nothing_is_committed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicdb.db");
    let mut bad = seed();
    bad.push(NewTrack {
        title: "Mixed".into(),
        artist: "X".into(),
        image: MediaRef::remote("https://x/m.jpg"),
        audio: MediaRef::local("m.mp3"),
    });

    let err = TrackStore::open(&path, &bad).err().unwrap();
    assert!(matches!(err, Error::MixedLocality { ref title } if title == "Mixed"));

    let store = TrackStore::open(&path, &[]).unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn corrupt_locality_flag_is_reported() {
    let store = TrackStore::open_in_memory(&[]).unwrap();
    store
        .conn
        .execute(
            "INSERT INTO songs (title, artist, imageUrl, audioUrl, isLocal) VALUES ('a', 'b', 'c', 'd', 7)",
            [],
        )
        .unwrap();

    let err = store.all().unwrap_err();
    assert!(matches!(err, Error::CorruptRow { id: 1, .. }));
}

#[test]
fn open_fails_when_path_is_a_directory() {
    let dir = tempdir().unwrap();
    assert!(TrackStore::open(dir.path(), &seed()).is_err());
}
