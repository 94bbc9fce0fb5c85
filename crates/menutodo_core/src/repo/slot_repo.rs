//! Named key-value slots.
//!
//! # Responsibility
//! - Read and overwrite opaque byte payloads by slot key.
//! - Keep SQL details inside the persistence boundary.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage for named byte slots.
pub trait SlotRepository {
    /// Returns the slot payload, or `None` when the slot was never written.
    fn read_slot(&self, key: &str) -> RepoResult<Option<Vec<u8>>>;
    /// Overwrites the slot payload.
    fn write_slot(&self, key: &str, value: &[u8]) -> RepoResult<()>;
}

/// SQLite-backed slots in the `kv_slots` table.
///
/// The connection must come from `db::open_db` or `db::open_db_in_memory`
/// so the table exists.
pub struct SqliteSlotRepository {
    conn: Connection,
}

impl SqliteSlotRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl SlotRepository for SqliteSlotRepository {
    fn read_slot(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &[u8]) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local slots, used by tests and previews.
#[derive(Debug, Default)]
pub struct MemorySlotRepository {
    slots: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` currently holds a payload.
    pub fn has_slot(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }
}

impl SlotRepository for MemorySlotRepository {
    fn read_slot(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &[u8]) -> RepoResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

impl<R: SlotRepository + ?Sized> SlotRepository for &R {
    fn read_slot(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &[u8]) -> RepoResult<()> {
        (**self).write_slot(key, value)
    }
}
