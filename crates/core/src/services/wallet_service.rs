use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::transaction::Transaction;
use crate::models::wallet::Wallet;

use super::balance_service::{round2, BalanceService};

/// Shared mutation and validation primitives used by every compound
/// operation on the ledger store.
///
/// Pure business logic — no I/O, no clock. Easy to test.
pub struct WalletService;

impl WalletService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a monetary input: finite, strictly positive, and at most
    /// 2 decimal places. Runs before any state is touched.
    pub fn validate_amount(&self, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Amount must be a positive number".into(),
            ));
        }
        let cents = amount * 100.0;
        if (cents - cents.round()).abs() > 1e-6 {
            return Err(CoreError::ValidationError(
                "Amount can have at most 2 decimal places".into(),
            ));
        }
        Ok(())
    }

    pub fn account<'a>(&self, wallet: &'a Wallet, id: Uuid) -> Result<&'a Account, CoreError> {
        wallet
            .accounts
            .iter()
            .find(|a| a.id == id)
            .ok_or(CoreError::AccountNotFound(id))
    }

    pub fn account_mut<'a>(
        &self,
        wallet: &'a mut Wallet,
        id: Uuid,
    ) -> Result<&'a mut Account, CoreError> {
        wallet
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::AccountNotFound(id))
    }

    /// Look up an account that must be usable in creation/allocation flows,
    /// i.e. not archived.
    pub fn active_account<'a>(
        &self,
        wallet: &'a Wallet,
        id: Uuid,
    ) -> Result<&'a Account, CoreError> {
        let account = self.account(wallet, id)?;
        if account.is_archived {
            return Err(CoreError::ValidationError(format!(
                "Account '{}' is archived",
                account.name
            )));
        }
        Ok(account)
    }

    /// Replace an account's anchor balance, rounded to 2 decimals.
    pub fn set_balance(
        &self,
        wallet: &mut Wallet,
        id: Uuid,
        new_balance: f64,
    ) -> Result<(), CoreError> {
        let account = self.account_mut(wallet, id)?;
        account.balance = round2(new_balance);
        Ok(())
    }

    /// Reject account names already used by a non-archived account.
    pub fn ensure_unique_name(
        &self,
        wallet: &Wallet,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let normalized = name.trim().to_lowercase();
        let taken = wallet.accounts.iter().any(|a| {
            !a.is_archived
                && Some(a.id) != exclude
                && a.name.trim().to_lowercase() == normalized
        });
        if taken {
            return Err(CoreError::ValidationError(format!(
                "An account named '{}' already exists",
                name.trim()
            )));
        }
        Ok(())
    }

    /// Append a transaction and restamp running balances.
    pub fn push_transaction(
        &self,
        balance_service: &BalanceService,
        wallet: &mut Wallet,
        transaction: Transaction,
    ) {
        wallet.transactions.insert(0, transaction);
        self.recompute(balance_service, wallet);
    }

    /// Restamp every running balance from the current accounts.
    pub fn recompute(&self, balance_service: &BalanceService, wallet: &mut Wallet) {
        let transactions = std::mem::take(&mut wallet.transactions);
        wallet.transactions = balance_service.recompute(&wallet.accounts, transactions);
    }
}

impl Default for WalletService {
    fn default() -> Self {
        Self::new()
    }
}
