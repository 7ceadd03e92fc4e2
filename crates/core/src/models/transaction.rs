use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction. Amounts are always non-negative magnitudes;
/// direction is carried here, never by the sign of `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money flowing into the account
    Credit,
    /// Money flowing out of the account
    Debit,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "credit"),
            TransactionType::Debit => write!(f, "debit"),
        }
    }
}

/// A single ledger entry on one account.
///
/// **Important**: `running_balance` is a derived, cached value stamped by the
/// balance engine. It must be recomputed whenever the transaction or account
/// collections change and is never authoritative input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,

    /// Calendar day of the transaction
    pub date: NaiveDate,

    /// Exact instant, when known. Preferred over `date` for ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    pub merchant: String,

    pub category: String,

    /// Magnitude of the transaction (always >= 0)
    pub amount: f64,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub account_id: Uuid,

    /// Account balance immediately after this transaction, in chronological
    /// order. Derived — see the balance engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_balance: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Transaction {
    /// Create a transaction stamped at an explicit instant. Paired transfer
    /// legs pass the same `at` so both legs share one timestamp.
    pub fn new(
        account_id: Uuid,
        transaction_type: TransactionType,
        amount: f64,
        merchant: impl Into<String>,
        category: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: at.date_naive(),
            timestamp: Some(at),
            merchant: merchant.into(),
            category: category.into(),
            amount,
            transaction_type,
            account_id,
            running_balance: None,
            notes: None,
            tags: Vec::new(),
        }
    }

    /// The instant used for chronological ordering: the exact timestamp when
    /// present, otherwise midnight UTC of the calendar date.
    pub fn sort_instant(&self) -> DateTime<Utc> {
        self.timestamp
            .unwrap_or_else(|| self.date.and_time(NaiveTime::MIN).and_utc())
    }
}
