use rusqlite::Connection;
use tracing::info;

use crate::error::{fatal, StoreError};
use crate::schema;

/// Owning guard around the SQLite connection.
///
/// One connection per store instance, for the instance's whole lifetime.
/// The handle is never shared or cloned, and there is no lock around it:
/// callers serialize access. Dropping the guard closes the connection
/// exactly once, and a close failure is unrecoverable.
pub(crate) struct Database {
    conn: Option<Connection>,
}

impl Database {
    /// Open a fresh, unnamed in-memory database and create the `kv` table.
    ///
    /// The table exists before this returns, so any statement compiled
    /// against the connection sees the final schema.
    pub(crate) fn open_ephemeral() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::CREATE_TABLE)?;

        info!("ephemeral database opened");

        Ok(Self { conn: Some(conn) })
    }

    /// Borrow the live connection.
    pub(crate) fn conn(&self) -> &Connection {
        match &self.conn {
            Some(conn) => conn,
            // Only `drop` takes the connection, and nothing borrows after it.
            None => unreachable!("connection already closed"),
        }
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            // close() flushes the prepared statement cache first, so the
            // insert statement is finalized before the handle goes away.
            if let Err((_conn, err)) = conn.close() {
                fatal("close", &StoreError::from(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_kv_table() {
        let db = Database::open_ephemeral().unwrap();
        let count: i64 = db
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn kv_table_has_two_columns() {
        let db = Database::open_ephemeral().unwrap();
        let mut stmt = db.conn().prepare("PRAGMA table_info(kv)").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(columns, ["key", "value"]);
    }

    #[test]
    fn instances_are_isolated() {
        let a = Database::open_ephemeral().unwrap();
        let b = Database::open_ephemeral().unwrap();

        a.conn()
            .execute("INSERT INTO kv(key, value) VALUES('k', 'v')", [])
            .unwrap();

        let count: i64 = b
            .conn()
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn drop_closes_cleanly() {
        let db = Database::open_ephemeral().unwrap();
        // A close failure would panic here.
        drop(db);
    }

    #[test]
    fn drop_finalizes_cached_statements_before_close() {
        let db = Database::open_ephemeral().unwrap();
        {
            let mut stmt = db.conn().prepare_cached(schema::INSERT).unwrap();
            stmt.raw_bind_parameter(1, "k").unwrap();
            stmt.raw_bind_parameter(2, "v").unwrap();
            stmt.raw_execute().unwrap();
        }
        // The compiled statement is still in the cache; close must flush it
        // before tearing down the connection.
        drop(db);
    }
}
