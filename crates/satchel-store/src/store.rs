use tracing::instrument;

use crate::database::Database;
use crate::error::{fatal, StoreError};
use crate::statement::InsertStatement;

/// Append-only key-value store over an ephemeral SQLite database.
///
/// Construction opens the database, creates the `kv` table, and compiles
/// the insert statement; the store is then ready for the lifetime of the
/// value. Dropping it finalizes the statement and closes the connection,
/// in that order, and a dropped store cannot be reused.
///
/// There is no recovery path anywhere: an unexpected status from the
/// engine terminates the process (release builds abort outright). Callers
/// never see an error value.
pub struct KvStore {
    db: Database,
}

impl KvStore {
    /// Open a fresh store with its own private in-memory database.
    pub fn new() -> Self {
        match Self::open() {
            Ok(store) => store,
            Err(err) => fatal("open", &err),
        }
    }

    fn open() -> Result<Self, StoreError> {
        let db = Database::open_ephemeral()?;
        // Compile the insert statement up front so a broken literal fails
        // construction, not the first insert.
        InsertStatement::prepare(&db)?;
        Ok(Self { db })
    }

    /// Insert one key/value pair. Duplicate keys append additional rows.
    ///
    /// Exclusive access (`&mut self`) is part of the contract: one store
    /// instance serves one thread, with no internal synchronization.
    #[instrument(skip(self))]
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Err(err) = self.try_insert(key, value) {
            fatal("insert", &err);
        }
    }

    fn try_insert(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut stmt = InsertStatement::prepare(&self.db)?;
        stmt.bind(1, key)?;
        stmt.bind(2, value)?;
        stmt.exec()
    }
}

impl Default for KvStore {
    fn default() -> Self {
        Self::new()
    }
}
