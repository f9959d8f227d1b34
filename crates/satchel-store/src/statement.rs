use rusqlite::CachedStatement;

use crate::database::Database;
use crate::error::StoreError;
use crate::schema;

/// Scoped handle to the compiled insert statement.
///
/// Compilation happens once per connection: `prepare` goes through the
/// connection's statement cache, so the first call compiles
/// [`schema::INSERT`] and every later call reuses the compiled statement.
/// Dropping the handle resets the statement and returns it to the cache;
/// the engine finalizes it when the cache is flushed at connection close.
pub(crate) struct InsertStatement<'conn> {
    stmt: CachedStatement<'conn>,
}

impl<'conn> InsertStatement<'conn> {
    pub(crate) fn prepare(db: &'conn Database) -> Result<Self, StoreError> {
        let stmt = db.conn().prepare_cached(schema::INSERT)?;
        Ok(Self { stmt })
    }

    /// Bind a positional text parameter (1-indexed).
    ///
    /// The engine receives the slice's exact byte length, no terminator,
    /// and the borrow keeps the buffer alive through execution.
    pub(crate) fn bind(&mut self, index: usize, value: &str) -> Result<(), StoreError> {
        self.stmt.raw_bind_parameter(index, value)?;
        Ok(())
    }

    /// Step the statement to completion.
    ///
    /// Anything other than a clean completion from the engine surfaces as
    /// an error, as does an insert that reports other than one changed row.
    pub(crate) fn exec(&mut self) -> Result<(), StoreError> {
        let changed = self.stmt.raw_execute()?;
        if changed != 1 {
            return Err(StoreError::Database(format!(
                "insert changed {changed} rows, expected 1"
            )));
        }
        Ok(())
    }
}
