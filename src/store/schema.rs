pub(super) const CREATE_SONGS: &str = "
    CREATE TABLE IF NOT EXISTS songs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        artist TEXT NOT NULL,
        imageUrl TEXT NOT NULL,
        audioUrl TEXT NOT NULL,
        isLocal INTEGER NOT NULL
    );
";

pub(super) const INSERT_SONG: &str =
    "INSERT INTO songs (title, artist, imageUrl, audioUrl, isLocal) VALUES (?1, ?2, ?3, ?4, ?5)";

pub(super) const SELECT_ALL: &str =
    "SELECT id, title, artist, imageUrl, audioUrl, isLocal FROM songs ORDER BY id ASC";

/// A `songs` row before the media columns are turned into `MediaRef`s.
pub(super) struct SongRow {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub image: String,
    pub audio: String,
    pub is_local: i64,
}
