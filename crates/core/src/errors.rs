use thiserror::Error;

/// Unified error type for the entire trade-ledger-core library.
/// Every public function returns `Result<T, CoreError>`.
///
/// Unparseable numeric input is deliberately NOT an error: it flows into the
/// derived fields as `NaN` (see `services::trade_calculator`).
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Store ───────────────────────────────────────────────────────
    #[error("Store read failed for key '{key}': {message}")]
    StoreRead { key: String, message: String },

    #[error("Store write failed for key '{key}': {message}")]
    StoreWrite { key: String, message: String },

    // ── Ledger blob ─────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O ────────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
