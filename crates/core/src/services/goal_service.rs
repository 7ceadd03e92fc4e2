use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::CoreError;
use crate::models::goal::Goal;

/// Derives goal completion from the two independent predicates: allocated
/// amount vs. target amount, and today vs. target date.
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }

    /// Recompute `is_completed` for every goal against `today` (date-only,
    /// midnight granularity).
    ///
    /// On a false → true transition, `completed_at` is stamped with `now`
    /// and never cleared afterwards — the historical completion record is
    /// immutable even though `is_completed` itself can regress if funds are
    /// withdrawn below target after completion.
    pub fn sync(&self, goals: &mut [Goal], today: NaiveDate, now: DateTime<Utc>) {
        for goal in goals.iter_mut() {
            let completed =
                goal.allocated_amount >= goal.target_amount && today >= goal.target_date;
            if completed && !goal.is_completed && goal.completed_at.is_none() {
                goal.completed_at = Some(now);
            }
            goal.is_completed = completed;
        }
    }

    /// The hard gate on withdrawals: funds stay locked until the target date.
    pub fn check_withdrawable(&self, goal: &Goal, today: NaiveDate) -> Result<(), CoreError> {
        if today < goal.target_date {
            let days_remaining = (goal.target_date - today).num_days();
            return Err(CoreError::WithdrawalLocked {
                available_on: goal.target_date,
                days_remaining,
            });
        }
        Ok(())
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
