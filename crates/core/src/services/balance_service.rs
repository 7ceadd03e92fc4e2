use std::collections::HashMap;

use uuid::Uuid;

use crate::models::account::Account;
use crate::models::transaction::{Transaction, TransactionType};

/// Rounds a monetary value to 2 decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Recomputes per-account running balances whenever the transaction set
/// changes.
///
/// Pure business logic — no I/O. The caller persists the result.
pub struct BalanceService;

impl BalanceService {
    pub fn new() -> Self {
        Self
    }

    /// Stamp a `running_balance` onto every transaction, consistent with
    /// chronological application order, and return the merged list sorted
    /// newest-first for display.
    ///
    /// The account's `balance` already includes the net effect of all its
    /// transactions, so per account this walks the sorted group *backwards*
    /// first, undoing each effect to reconstruct the balance before the
    /// earliest transaction, then replays forward stamping the resulting
    /// balance onto each transaction.
    pub fn recompute(
        &self,
        accounts: &[Account],
        transactions: Vec<Transaction>,
    ) -> Vec<Transaction> {
        if transactions.is_empty() || accounts.is_empty() {
            return transactions;
        }

        let mut by_account: HashMap<Uuid, Vec<Transaction>> = HashMap::new();
        for t in transactions {
            by_account.entry(t.account_id).or_default().push(t);
        }

        let mut stamped: Vec<Transaction> = Vec::new();

        for account in accounts {
            let Some(mut group) = by_account.remove(&account.id) else {
                continue;
            };
            Self::sort_chronological(&mut group);

            // Peel back from the anchor balance to before the first transaction.
            let mut balance = account.balance;
            for t in group.iter().rev() {
                match t.transaction_type {
                    TransactionType::Credit => balance -= t.amount,
                    TransactionType::Debit => balance += t.amount,
                }
            }

            // Replay forward, stamping the post-transaction balance.
            for mut t in group {
                match t.transaction_type {
                    TransactionType::Credit => balance += t.amount,
                    TransactionType::Debit => balance -= t.amount,
                }
                t.running_balance = Some(round2(balance));
                stamped.push(t);
            }
        }

        // Transactions pointing at an unknown account pass through untouched;
        // a derived-field recompute must not drop ledger entries.
        for (_, group) in by_account {
            stamped.extend(group);
        }

        // Newest first for display.
        stamped.sort_by(|a, b| {
            b.sort_instant()
                .cmp(&a.sort_instant())
                .then_with(|| b.id.cmp(&a.id))
        });

        stamped
    }

    /// Oldest first, with a deterministic id tiebreak so running balances
    /// stay stable across recomputations when timestamps collide.
    fn sort_chronological(group: &mut [Transaction]) {
        group.sort_by(|a, b| {
            a.sort_instant()
                .cmp(&b.sort_instant())
                .then_with(|| a.id.cmp(&b.id))
        });
    }
}

impl Default for BalanceService {
    fn default() -> Self {
        Self::new()
    }
}
