use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use crate::models::wallet::{Wallet, WalletSeed};

use super::adapter::StorageAdapter;

/// Collection keys, compatible with the browser dashboard's localStorage.
pub const ACCOUNTS_KEY: &str = "wallet_accounts";
pub const TRANSACTIONS_KEY: &str = "wallet_transactions";
pub const GOALS_KEY: &str = "wallet_goals";
pub const FILTER_PRESETS_KEY: &str = "wallet_filter_presets";
pub const USER_KEY: &str = "wallet_user";

/// High-level persistence operations: typed load/save of each logical
/// collection through a pluggable [`StorageAdapter`].
pub struct StorageManager {
    adapter: Box<dyn StorageAdapter>,
}

impl std::fmt::Debug for StorageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageManager")
            .field("adapter", &self.adapter.name())
            .finish()
    }
}

impl StorageManager {
    pub fn new(adapter: Box<dyn StorageAdapter>) -> Self {
        Self { adapter }
    }

    /// Name of the underlying adapter (for logs).
    pub fn adapter_name(&self) -> &str {
        self.adapter.name()
    }

    /// Load one collection: adapter string → JSON → typed value.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        match self.adapter.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Save one collection: typed value → JSON → adapter string.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize {key}: {e}")))?;
        self.adapter.set(key, &raw)
    }

    /// Delete one collection.
    pub fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.adapter.remove(key)
    }

    /// Assemble a full wallet from storage. Collections absent from the
    /// adapter are populated from `seed` and written back once, so the seed
    /// only ever applies on first boot.
    pub fn load_wallet(&mut self, seed: WalletSeed) -> Result<Wallet, CoreError> {
        let accounts = match self.load(ACCOUNTS_KEY)? {
            Some(accounts) => accounts,
            None => {
                self.save(ACCOUNTS_KEY, &seed.accounts)?;
                seed.accounts
            }
        };
        let transactions = match self.load(TRANSACTIONS_KEY)? {
            Some(transactions) => transactions,
            None => {
                self.save(TRANSACTIONS_KEY, &seed.transactions)?;
                seed.transactions
            }
        };
        let goals = match self.load(GOALS_KEY)? {
            Some(goals) => goals,
            None => {
                self.save(GOALS_KEY, &seed.goals)?;
                seed.goals
            }
        };
        let filter_presets = match self.load(FILTER_PRESETS_KEY)? {
            Some(presets) => presets,
            None => {
                self.save(FILTER_PRESETS_KEY, &seed.filter_presets)?;
                seed.filter_presets
            }
        };
        let user = match self.load(USER_KEY)? {
            Some(user) => Some(user),
            None => {
                if let Some(ref user) = seed.user {
                    self.save(USER_KEY, user)?;
                }
                seed.user
            }
        };

        Ok(Wallet {
            accounts,
            transactions,
            goals,
            filter_presets,
            user,
        })
    }

    /// Write every collection back to the adapter.
    pub fn save_wallet(&mut self, wallet: &Wallet) -> Result<(), CoreError> {
        self.save(ACCOUNTS_KEY, &wallet.accounts)?;
        self.save(TRANSACTIONS_KEY, &wallet.transactions)?;
        self.save(GOALS_KEY, &wallet.goals)?;
        self.save(FILTER_PRESETS_KEY, &wallet.filter_presets)?;
        match &wallet.user {
            Some(user) => self.save(USER_KEY, user)?,
            None => self.remove(USER_KEY)?,
        }
        Ok(())
    }
}
