#[derive(Debug, thiserror::Error)]
pub(crate) enum StoreError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

/// Terminate on an engine status the store cannot recover from.
///
/// There is no propagation path past this point: one error event for
/// whatever subscriber is installed, then the process goes down. Release
/// builds compile with `panic = "abort"`, so the panic does not unwind.
pub(crate) fn fatal(op: &'static str, err: &StoreError) -> ! {
    tracing::error!(op, error = %err, "unrecoverable engine failure");
    panic!("{op}: {err}");
}
