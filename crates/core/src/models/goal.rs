use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings goal: a dedicated pool of money carved out of (but tracked
/// separately from) the linked account's spendable balance.
///
/// Completion requires **both** predicates: `allocated_amount >=
/// target_amount` and today >= `target_date`. An over-funded goal whose date
/// has not arrived is not completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,

    pub title: String,

    pub target_amount: f64,

    /// Funds currently allocated to this goal. A separate ledger from the
    /// linked account's balance; money moves between the two only through
    /// allocate/withdraw operations.
    pub allocated_amount: f64,

    pub target_date: NaiveDate,

    /// Funding source/sink for allocations and withdrawals.
    pub account_id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: NaiveDate,

    /// Stamped on the first transition to completed; never cleared, even if
    /// a later withdrawal drops the goal back below its target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Live completion state — recomputed by the goal synchronizer and free
    /// to regress to false after a post-completion withdrawal.
    #[serde(default)]
    pub is_completed: bool,
}

impl Goal {
    pub fn new(
        title: impl Into<String>,
        target_amount: f64,
        target_date: NaiveDate,
        account_id: Uuid,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            target_amount,
            allocated_amount: 0.0,
            target_date,
            account_id,
            description,
            created_at: Utc::now().date_naive(),
            completed_at: None,
            is_completed: false,
        }
    }
}
