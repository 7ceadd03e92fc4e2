use serde::{Deserialize, Serialize};

use super::account::Account;
use super::filter::FilterPreset;
use super::goal::Goal;
use super::transaction::Transaction;
use super::user::User;

/// The main data container: everything the ledger store owns and persists.
///
/// Each field maps to one logical collection in the persistence adapter and
/// is read and written wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    /// All accounts, including archived ones.
    pub accounts: Vec<Account>,

    /// All transactions across accounts, newest first after recomputation.
    pub transactions: Vec<Transaction>,

    /// Savings goals.
    pub goals: Vec<Goal>,

    /// Saved filter specifications.
    pub filter_presets: Vec<FilterPreset>,

    /// The profile record, if one has been stored.
    pub user: Option<User>,
}

/// Initial data used to populate collections that are absent from the
/// persistence adapter on first boot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletSeed {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub filter_presets: Vec<FilterPreset>,
    pub user: Option<User>,
}
