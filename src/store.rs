//! SQLite-backed track store.
//!
//! A single `songs` table holds every track. The store is created on first
//! open and seeded once while empty; afterwards it is only read.

mod schema;

use std::fs;
use std::path::Path;

use rusqlite::{Connection, params};

use crate::error::{Error, Result};
use crate::library::{MediaRef, NewTrack, Track, TrackId};

pub struct TrackStore {
    conn: Connection,
}

impl TrackStore {
    /// Open (or create) the database at `path`, ensure the schema exists and
    /// insert `seed` if the table holds no rows yet.
    pub fn open(path: &Path, seed: &[NewTrack]) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;

        let mut store = Self { conn };
        let inserted = store.initialize(seed)?;
        tracing::info!(path = %path.display(), inserted, "track store opened");
        Ok(store)
    }

    /// Same as [`TrackStore::open`] against a private in-memory database.
    #[cfg(test)]
    pub(crate) fn open_in_memory(seed: &[NewTrack]) -> Result<Self> {
        let mut store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.initialize(seed)?;
        Ok(store)
    }

    /// Drop the `songs` table so that every later query fails.
    #[cfg(test)]
    pub(crate) fn drop_songs_table(&self) {
        self.conn.execute_batch("DROP TABLE songs").unwrap();
    }

    /// Remove every row while keeping the table.
    #[cfg(test)]
    pub(crate) fn clear_songs(&self) {
        self.conn.execute_batch("DELETE FROM songs").unwrap();
    }

    /// Create the table and seed it when empty. Returns the number of rows inserted.
    fn initialize(&mut self, seed: &[NewTrack]) -> Result<usize> {
        self.conn.execute_batch(schema::CREATE_SONGS)?;

        if self.count()? > 0 {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(schema::INSERT_SONG)?;
            for track in seed {
                let is_local = track.locality().ok_or_else(|| Error::MixedLocality {
                    title: track.title.clone(),
                })?;
                stmt.execute(params![
                    track.title,
                    track.artist,
                    track.image.as_column(),
                    track.audio.as_column(),
                    is_local,
                ])?;
            }
        }
        tx.commit()?;

        if !seed.is_empty() {
            tracing::debug!(count = seed.len(), "seeded empty track store");
        }
        Ok(seed.len())
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM songs", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Every track, ordered by identity.
    pub fn all(&self) -> Result<Vec<Track>> {
        let mut stmt = self.conn.prepare(schema::SELECT_ALL)?;
        let rows = stmt.query_map([], |row| {
            Ok(schema::SongRow {
                id: row.get(0)?,
                title: row.get(1)?,
                artist: row.get(2)?,
                image: row.get(3)?,
                audio: row.get(4)?,
                is_local: row.get(5)?,
            })
        })?;

        let mut tracks = Vec::new();
        for row in rows {
            tracks.push(decode_row(row?)?);
        }
        Ok(tracks)
    }
}

fn decode_row(row: schema::SongRow) -> Result<Track> {
    let corrupt = |reason: &str| Error::CorruptRow {
        id: row.id,
        reason: reason.to_string(),
    };

    let is_local = match row.is_local {
        0 => false,
        1 => true,
        _ => return Err(corrupt("isLocal must be 0 or 1")),
    };
    let image = MediaRef::from_column(row.image.clone(), is_local)
        .ok_or_else(|| corrupt("empty imageUrl"))?;
    let audio = MediaRef::from_column(row.audio.clone(), is_local)
        .ok_or_else(|| corrupt("empty audioUrl"))?;

    Ok(Track {
        id: TrackId(row.id),
        title: row.title,
        artist: row.artist,
        image,
        audio,
    })
}

#[cfg(test)]
mod tests;
