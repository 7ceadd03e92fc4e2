use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the entire wallet-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / Persistence ───────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Insufficient balance: need {required:.2}, only {available:.2} available")]
    InsufficientBalance { required: f64, available: f64 },

    #[error(
        "Withdrawal is only allowed on or after {available_on}. {days_remaining} day(s) remaining"
    )]
    WithdrawalLocked {
        available_on: NaiveDate,
        days_remaining: i64,
    },

    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Confirmation failed: {0}")]
    ConfirmationFailed(String),

    // ── Lookups ─────────────────────────────────────────────────────
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),

    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),

    #[error("Filter preset not found: {0}")]
    PresetNotFound(Uuid),
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
