// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

use flashdeck_core::ErrorReport;
use flashdeck_core::Fallible;
use flashdeck_core::Flashcard;
use flashdeck_core::FlashcardSet;
use flashdeck_core::SetId;
use flashdeck_core::SetStore;
use log::debug;
use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::params;

/// A set store backed by an SQLite database. Each set is one row; its
/// flashcards are kept in their serialized JSON form.
pub struct SqliteStore {
    conn: Connection,
}

fn db_error(err: rusqlite::Error) -> ErrorReport {
    ErrorReport::wrap("database error", err)
}

impl SqliteStore {
    /// Open (or create) the library database at the given path.
    pub fn open(path: &Path) -> Fallible<Self> {
        debug!("Opening library database at {}.", path.display());
        let conn = Connection::open(path).map_err(db_error)?;
        Self::init(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Fallible<Self> {
        let conn = Connection::open_in_memory().map_err(db_error)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Fallible<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS flashcard_sets (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                flashcards TEXT NOT NULL
            )",
            (),
        )
        .map_err(db_error)?;
        Ok(Self { conn })
    }
}

type SetRow = (i64, String, String);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SetRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn decode((id, name, flashcards): SetRow) -> Fallible<FlashcardSet> {
    let flashcards: Vec<Flashcard> = serde_json::from_str(&flashcards).map_err(|e| {
        ErrorReport::new(format!(
            "flashcard set {id} has malformed flashcards in the database: {e}"
        ))
    })?;
    Ok(FlashcardSet::new(SetId::from_millis(id), name, flashcards))
}

impl SetStore for SqliteStore {
    fn load_all(&self) -> Fallible<Vec<FlashcardSet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, flashcards FROM flashcard_sets ORDER BY id")
            .map_err(db_error)?;
        let rows = stmt
            .query_map((), read_row)
            .map_err(db_error)?
            .collect::<Result<Vec<SetRow>, _>>()
            .map_err(db_error)?;
        rows.into_iter().map(decode).collect()
    }

    fn load(&self, id: SetId) -> Fallible<Option<FlashcardSet>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, flashcards FROM flashcard_sets WHERE id = ?1",
                params![id.as_millis()],
                read_row,
            )
            .optional()
            .map_err(db_error)?;
        row.map(decode).transpose()
    }

    fn put(&mut self, set: &FlashcardSet) -> Fallible<()> {
        let flashcards = serde_json::to_string(&set.flashcards)?;
        self.conn
            .execute(
                "INSERT INTO flashcard_sets (id, name, flashcards) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET name = excluded.name, flashcards = excluded.flashcards",
                params![set.id().as_millis(), set.name, flashcards],
            )
            .map_err(db_error)?;
        Ok(())
    }

    fn remove(&mut self, id: SetId) -> Fallible<bool> {
        let deleted = self
            .conn
            .execute(
                "DELETE FROM flashcard_sets WHERE id = ?1",
                params![id.as_millis()],
            )
            .map_err(db_error)?;
        Ok(deleted > 0)
    }
}
