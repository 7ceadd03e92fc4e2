pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use models::{
    account::{Account, AccountType},
    filter::{FilterPreset, Filters},
    goal::Goal,
    transaction::{Transaction, TransactionType},
    user::User,
    wallet::{Wallet, WalletSeed},
};
use providers::traits::{ConfirmationProvider, ConfirmationRequest};
use services::{
    balance_service::{round2, BalanceService},
    filter_service::FilterService,
    goal_service::GoalService,
    wallet_service::WalletService,
};
use storage::adapter::StorageAdapter;
use storage::manager::StorageManager;

use errors::CoreError;

/// Default category for wallet funding transactions.
const FUNDING_CATEGORY: &str = "Funding";
/// Default category for transfer transactions.
const TRANSFER_CATEGORY: &str = "Transfer";
/// Category for goal allocation/withdrawal transactions.
const SAVINGS_GOAL_CATEGORY: &str = "Savings Goal";

/// Main entry point for the wallet ledger core.
/// Holds the wallet state and all services needed to operate on it.
///
/// Every mutation is a compound transition: validate (state untouched on
/// failure), mutate the affected collections, restamp running balances, sync
/// goal completion, and persist. Money-moving operations additionally await
/// the injected [`ConfirmationProvider`]; a rejection restores the exact
/// pre-operation state.
#[must_use]
pub struct LedgerStore {
    wallet: Wallet,
    filters: Filters,
    balance_service: BalanceService,
    wallet_service: WalletService,
    goal_service: GoalService,
    filter_service: FilterService,
    storage: StorageManager,
    confirmer: Box<dyn ConfirmationProvider>,
    /// Tracks whether in-memory state has diverged from the adapter
    /// (set when a persist attempt fails).
    dirty: bool,
}

impl std::fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerStore")
            .field("accounts", &self.wallet.accounts.len())
            .field("transactions", &self.wallet.transactions.len())
            .field("goals", &self.wallet.goals.len())
            .field("adapter", &self.storage.adapter_name())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl LedgerStore {
    /// Open a store backed by `adapter`, starting from empty collections if
    /// the adapter holds nothing yet.
    pub fn open(
        adapter: Box<dyn StorageAdapter>,
        confirmer: Box<dyn ConfirmationProvider>,
    ) -> Result<Self, CoreError> {
        Self::open_with_seed(adapter, confirmer, WalletSeed::default())
    }

    /// Open a store backed by `adapter`. Collections absent from the adapter
    /// are populated from `seed` (and written back, so the seed applies only
    /// on first boot).
    pub fn open_with_seed(
        adapter: Box<dyn StorageAdapter>,
        confirmer: Box<dyn ConfirmationProvider>,
        seed: WalletSeed,
    ) -> Result<Self, CoreError> {
        let mut storage = StorageManager::new(adapter);
        let wallet = storage.load_wallet(seed)?;

        let mut store = Self {
            wallet,
            filters: Filters::default(),
            balance_service: BalanceService::new(),
            wallet_service: WalletService::new(),
            goal_service: GoalService::new(),
            filter_service: FilterService::new(),
            storage,
            confirmer,
            dirty: false,
        };

        // Cached running balances are never trusted across sessions.
        store
            .wallet_service
            .recompute(&store.balance_service, &mut store.wallet);
        store.sync_goals();
        store.persist();
        Ok(store)
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Write every collection through the adapter. The explicit, surfaced
    /// error channel for callers that want a retry/backoff policy.
    pub fn flush(&mut self) -> Result<(), CoreError> {
        self.storage.save_wallet(&self.wallet)?;
        self.dirty = false;
        Ok(())
    }

    /// True when the last persist attempt failed and in-memory state is
    /// ahead of the adapter.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Best-effort persist after a mutation. A storage failure must not
    /// corrupt the in-memory model: log it, mark the store dirty, move on.
    fn persist(&mut self) {
        match self.storage.save_wallet(&self.wallet) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                tracing::warn!(adapter = self.storage.adapter_name(), error = %e, "failed to persist wallet");
                self.dirty = true;
            }
        }
    }

    // ── Accounts ────────────────────────────────────────────────────

    /// Create an account. The opening balance must be non-negative with at
    /// most 2 decimal places; names are unique among non-archived accounts.
    #[allow(clippy::too_many_arguments)]
    pub fn add_account(
        &mut self,
        name: &str,
        account_type: AccountType,
        opening_balance: f64,
        color: Option<String>,
        icon: Option<String>,
        account_number: Option<String>,
        description: Option<String>,
    ) -> Result<Uuid, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError(
                "Account name is required".into(),
            ));
        }
        self.wallet_service.ensure_unique_name(&self.wallet, name, None)?;
        if !opening_balance.is_finite() || opening_balance < 0.0 {
            return Err(CoreError::ValidationError(
                "Opening balance cannot be negative".into(),
            ));
        }
        if opening_balance > 0.0 {
            self.wallet_service.validate_amount(opening_balance)?;
        }

        let mut account = Account::new(name, account_type, round2(opening_balance));
        account.color = color;
        account.icon = icon;
        account.account_number = account_number;
        account.description = description;
        let id = account.id;

        self.wallet.accounts.push(account);
        self.persist();
        Ok(id)
    }

    /// Update display details of an account. `None` leaves a field as-is.
    pub fn update_account_details(
        &mut self,
        account_id: Uuid,
        name: Option<&str>,
        color: Option<String>,
        icon: Option<String>,
        description: Option<String>,
    ) -> Result<(), CoreError> {
        if let Some(name) = name {
            let name = name.trim();
            if name.is_empty() {
                return Err(CoreError::ValidationError(
                    "Account name is required".into(),
                ));
            }
            self.wallet_service
                .ensure_unique_name(&self.wallet, name, Some(account_id))?;
            self.wallet_service
                .account_mut(&mut self.wallet, account_id)?
                .name = name.to_string();
        }
        let account = self.wallet_service.account_mut(&mut self.wallet, account_id)?;
        if let Some(color) = color {
            account.color = Some(color);
        }
        if let Some(icon) = icon {
            account.icon = Some(icon);
        }
        if let Some(description) = description {
            account.description = Some(description);
        }
        self.persist();
        Ok(())
    }

    /// Hide an account from pickers and allocation flows. Its history and
    /// balance remain intact.
    pub fn archive_account(&mut self, account_id: Uuid) -> Result<(), CoreError> {
        self.wallet_service
            .account_mut(&mut self.wallet, account_id)?
            .is_archived = true;
        self.persist();
        Ok(())
    }

    pub fn unarchive_account(&mut self, account_id: Uuid) -> Result<(), CoreError> {
        self.wallet_service
            .account_mut(&mut self.wallet, account_id)?
            .is_archived = false;
        self.persist();
        Ok(())
    }

    /// Delete an account. Rejected when the account has any transactions,
    /// linked goals, or a non-zero balance — archival is the only path for
    /// accounts with history.
    pub fn delete_account(&mut self, account_id: Uuid) -> Result<(), CoreError> {
        let account = self.wallet_service.account(&self.wallet, account_id)?;

        let transaction_count = self
            .wallet
            .transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .count();
        if transaction_count > 0 {
            return Err(CoreError::Integrity(format!(
                "Cannot delete '{}': it has {transaction_count} transaction(s). Archive it instead",
                account.name
            )));
        }

        let goal_count = self
            .wallet
            .goals
            .iter()
            .filter(|g| g.account_id == account_id)
            .count();
        if goal_count > 0 {
            return Err(CoreError::Integrity(format!(
                "Cannot delete '{}': {goal_count} goal(s) are linked to it",
                account.name
            )));
        }

        if round2(account.balance) != 0.0 {
            return Err(CoreError::Integrity(format!(
                "Cannot delete '{}': its balance is {:.2}, not zero",
                account.name, account.balance
            )));
        }

        self.wallet.accounts.retain(|a| a.id != account_id);
        self.persist();
        Ok(())
    }

    /// All accounts, archived included.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.wallet.accounts
    }

    /// Accounts eligible for pickers and allocation flows.
    #[must_use]
    pub fn active_accounts(&self) -> Vec<&Account> {
        self.wallet.accounts.iter().filter(|a| !a.is_archived).collect()
    }

    #[must_use]
    pub fn archived_accounts(&self) -> Vec<&Account> {
        self.wallet.accounts.iter().filter(|a| a.is_archived).collect()
    }

    #[must_use]
    pub fn account(&self, account_id: Uuid) -> Option<&Account> {
        self.wallet.accounts.iter().find(|a| a.id == account_id)
    }

    /// Sum of balances across active accounts.
    #[must_use]
    pub fn total_balance(&self) -> f64 {
        round2(
            self.wallet
                .accounts
                .iter()
                .filter(|a| !a.is_archived)
                .map(|a| a.balance)
                .sum(),
        )
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Record a manual transaction against an active account. Debits must be
    /// covered by the account's current balance.
    #[allow(clippy::too_many_arguments)]
    pub fn add_transaction(
        &mut self,
        account_id: Uuid,
        transaction_type: TransactionType,
        amount: f64,
        merchant: &str,
        category: &str,
        notes: Option<String>,
        tags: Vec<String>,
    ) -> Result<Uuid, CoreError> {
        self.wallet_service.validate_amount(amount)?;
        if merchant.trim().is_empty() {
            return Err(CoreError::ValidationError("Merchant is required".into()));
        }
        let account = self.wallet_service.active_account(&self.wallet, account_id)?;
        let balance = account.balance;
        if transaction_type == TransactionType::Debit && amount > balance {
            return Err(CoreError::InsufficientBalance {
                required: amount,
                available: balance,
            });
        }

        let new_balance = match transaction_type {
            TransactionType::Credit => balance + amount,
            TransactionType::Debit => balance - amount,
        };
        self.wallet_service
            .set_balance(&mut self.wallet, account_id, new_balance)?;

        let mut transaction = Transaction::new(
            account_id,
            transaction_type,
            amount,
            merchant.trim(),
            category.trim(),
            Utc::now(),
        );
        transaction.notes = notes;
        transaction.tags = tags;
        let id = transaction.id;

        self.wallet_service
            .push_transaction(&self.balance_service, &mut self.wallet, transaction);
        self.sync_goals();
        self.persist();
        Ok(id)
    }

    /// Update the mutable details of a transaction. Everything except notes
    /// and tags is immutable once created.
    pub fn update_transaction(
        &mut self,
        transaction_id: Uuid,
        notes: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<(), CoreError> {
        let transaction = self
            .wallet
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
            .ok_or(CoreError::TransactionNotFound(transaction_id))?;
        if let Some(notes) = notes {
            transaction.notes = if notes.trim().is_empty() { None } else { Some(notes) };
        }
        if let Some(tags) = tags {
            transaction.tags = tags;
        }
        self.persist();
        Ok(())
    }

    /// All transactions, newest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.wallet.transactions
    }

    #[must_use]
    pub fn transaction(&self, transaction_id: Uuid) -> Option<&Transaction> {
        self.wallet.transactions.iter().find(|t| t.id == transaction_id)
    }

    /// Transactions belonging to one account, newest first.
    #[must_use]
    pub fn transactions_for_account(&self, account_id: Uuid) -> Vec<&Transaction> {
        self.wallet
            .transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .collect()
    }

    // ── Funding & Transfers (confirmation-gated) ────────────────────

    /// Credit `amount` to an account. Applied optimistically, then gated by
    /// the confirmation provider; a rejection restores the pre-operation
    /// state exactly.
    pub async fn fund_wallet(
        &mut self,
        account_id: Uuid,
        amount: f64,
        category: Option<&str>,
    ) -> Result<Uuid, CoreError> {
        self.wallet_service.validate_amount(amount)?;
        let account = self.wallet_service.active_account(&self.wallet, account_id)?;
        let account_name = account.name.clone();
        let original_balance = account.balance;

        let checkpoint = self.wallet.clone();

        self.wallet_service
            .set_balance(&mut self.wallet, account_id, original_balance + amount)?;
        let transaction = Transaction::new(
            account_id,
            TransactionType::Credit,
            amount,
            "Wallet Funding",
            category.unwrap_or(FUNDING_CATEGORY),
            Utc::now(),
        );
        let id = transaction.id;
        self.wallet_service
            .push_transaction(&self.balance_service, &mut self.wallet, transaction);

        let request = ConfirmationRequest::new(format!("Fund '{account_name}'"), amount);
        if let Err(e) = self.confirmer.confirm(&request).await {
            self.wallet = checkpoint;
            return Err(Self::confirmation_error(e));
        }

        self.sync_goals();
        self.persist();
        Ok(id)
    }

    /// Move `amount` between two accounts, creating paired debit/credit
    /// transactions that share one timestamp. Atomic: a rejected
    /// confirmation leaves both balances untouched and no new transactions.
    pub async fn transfer_internal(
        &mut self,
        from_id: Uuid,
        to_id: Uuid,
        amount: f64,
        category: Option<&str>,
    ) -> Result<(Uuid, Uuid), CoreError> {
        if from_id == to_id {
            return Err(CoreError::ValidationError(
                "Cannot transfer to the same account".into(),
            ));
        }
        self.wallet_service.validate_amount(amount)?;
        let from = self.wallet_service.active_account(&self.wallet, from_id)?;
        let from_name = from.name.clone();
        let from_balance = from.balance;
        let to = self.wallet_service.active_account(&self.wallet, to_id)?;
        let to_name = to.name.clone();
        let to_balance = to.balance;
        if amount > from_balance {
            return Err(CoreError::InsufficientBalance {
                required: amount,
                available: from_balance,
            });
        }

        let checkpoint = self.wallet.clone();
        let category = category.unwrap_or(TRANSFER_CATEGORY);
        let now = Utc::now();

        self.wallet_service
            .set_balance(&mut self.wallet, from_id, from_balance - amount)?;
        self.wallet_service
            .set_balance(&mut self.wallet, to_id, to_balance + amount)?;

        let debit = Transaction::new(
            from_id,
            TransactionType::Debit,
            amount,
            format!("Transfer to {to_name}"),
            category,
            now,
        );
        let credit = Transaction::new(
            to_id,
            TransactionType::Credit,
            amount,
            format!("Transfer from {from_name}"),
            category,
            now,
        );
        let ids = (debit.id, credit.id);
        self.wallet_service
            .push_transaction(&self.balance_service, &mut self.wallet, debit);
        self.wallet_service
            .push_transaction(&self.balance_service, &mut self.wallet, credit);

        let request = ConfirmationRequest::new(format!("Transfer to {to_name}"), amount);
        if let Err(e) = self.confirmer.confirm(&request).await {
            self.wallet = checkpoint;
            return Err(Self::confirmation_error(e));
        }

        self.sync_goals();
        self.persist();
        Ok(ids)
    }

    /// Send `amount` to an external recipient: a single debit on the source
    /// account.
    pub async fn transfer_external(
        &mut self,
        from_id: Uuid,
        recipient: &str,
        amount: f64,
        category: Option<&str>,
    ) -> Result<Uuid, CoreError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(CoreError::ValidationError("Recipient is required".into()));
        }
        self.wallet_service.validate_amount(amount)?;
        let from = self.wallet_service.active_account(&self.wallet, from_id)?;
        let from_balance = from.balance;
        if amount > from_balance {
            return Err(CoreError::InsufficientBalance {
                required: amount,
                available: from_balance,
            });
        }

        let checkpoint = self.wallet.clone();

        self.wallet_service
            .set_balance(&mut self.wallet, from_id, from_balance - amount)?;
        let transaction = Transaction::new(
            from_id,
            TransactionType::Debit,
            amount,
            format!("Transfer to {recipient}"),
            category.unwrap_or(TRANSFER_CATEGORY),
            Utc::now(),
        );
        let id = transaction.id;
        self.wallet_service
            .push_transaction(&self.balance_service, &mut self.wallet, transaction);

        let request = ConfirmationRequest::new(format!("Transfer to {recipient}"), amount);
        if let Err(e) = self.confirmer.confirm(&request).await {
            self.wallet = checkpoint;
            return Err(Self::confirmation_error(e));
        }

        self.sync_goals();
        self.persist();
        Ok(id)
    }

    fn confirmation_error(e: CoreError) -> CoreError {
        match e {
            CoreError::ConfirmationFailed(_) => e,
            other => CoreError::ConfirmationFailed(other.to_string()),
        }
    }

    // ── Goals ───────────────────────────────────────────────────────

    /// Create a savings goal linked to an active account. The target date
    /// must be in the future.
    pub fn add_goal(
        &mut self,
        title: &str,
        target_amount: f64,
        target_date: NaiveDate,
        account_id: Uuid,
        description: Option<String>,
    ) -> Result<Uuid, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::ValidationError("Goal title is required".into()));
        }
        self.wallet_service.validate_amount(target_amount)?;
        if target_date <= Utc::now().date_naive() {
            return Err(CoreError::ValidationError(
                "Target date must be in the future".into(),
            ));
        }
        self.wallet_service.active_account(&self.wallet, account_id)?;

        let goal = Goal::new(title, target_amount, target_date, account_id, description);
        let id = goal.id;
        self.wallet.goals.push(goal);
        self.sync_goals();
        self.persist();
        Ok(id)
    }

    /// Move funds from the linked account's spendable balance into the
    /// goal's pool, recording a debit transaction on the account.
    pub fn allocate_to_goal(&mut self, goal_id: Uuid, amount: f64) -> Result<(), CoreError> {
        self.wallet_service.validate_amount(amount)?;
        let goal = self
            .wallet
            .goals
            .iter()
            .find(|g| g.id == goal_id)
            .ok_or(CoreError::GoalNotFound(goal_id))?;
        let goal_title = goal.title.clone();
        let account_id = goal.account_id;

        let account = self.wallet_service.active_account(&self.wallet, account_id)?;
        let balance = account.balance;
        if amount > balance {
            return Err(CoreError::InsufficientBalance {
                required: amount,
                available: balance,
            });
        }

        self.wallet_service
            .set_balance(&mut self.wallet, account_id, balance - amount)?;
        if let Some(goal) = self.wallet.goals.iter_mut().find(|g| g.id == goal_id) {
            goal.allocated_amount = round2(goal.allocated_amount + amount);
        }
        let transaction = Transaction::new(
            account_id,
            TransactionType::Debit,
            amount,
            format!("Allocation to {goal_title}"),
            SAVINGS_GOAL_CATEGORY,
            Utc::now(),
        );
        self.wallet_service
            .push_transaction(&self.balance_service, &mut self.wallet, transaction);

        self.sync_goals();
        self.persist();
        Ok(())
    }

    /// Move funds back from the goal's pool into the linked account.
    /// Hard-gated: rejected before the target date regardless of amount.
    pub fn withdraw_from_goal(&mut self, goal_id: Uuid, amount: f64) -> Result<(), CoreError> {
        let goal = self
            .wallet
            .goals
            .iter()
            .find(|g| g.id == goal_id)
            .ok_or(CoreError::GoalNotFound(goal_id))?;
        self.goal_service
            .check_withdrawable(goal, Utc::now().date_naive())?;
        self.wallet_service.validate_amount(amount)?;
        if amount > goal.allocated_amount {
            return Err(CoreError::ValidationError(format!(
                "Cannot withdraw {:.2}: only {:.2} is allocated to '{}'",
                amount, goal.allocated_amount, goal.title
            )));
        }
        let goal_title = goal.title.clone();
        let account_id = goal.account_id;

        let balance = self.wallet_service.account(&self.wallet, account_id)?.balance;
        self.wallet_service
            .set_balance(&mut self.wallet, account_id, balance + amount)?;
        if let Some(goal) = self.wallet.goals.iter_mut().find(|g| g.id == goal_id) {
            goal.allocated_amount = round2(goal.allocated_amount - amount);
        }
        let transaction = Transaction::new(
            account_id,
            TransactionType::Credit,
            amount,
            format!("Withdrawal from {goal_title}"),
            SAVINGS_GOAL_CATEGORY,
            Utc::now(),
        );
        self.wallet_service
            .push_transaction(&self.balance_service, &mut self.wallet, transaction);

        self.sync_goals();
        self.persist();
        Ok(())
    }

    /// Delete a goal. Any allocated funds are returned to the linked account
    /// first, with a compensating credit transaction — no orphaned money.
    pub fn delete_goal(&mut self, goal_id: Uuid) -> Result<(), CoreError> {
        let goal = self
            .wallet
            .goals
            .iter()
            .find(|g| g.id == goal_id)
            .ok_or(CoreError::GoalNotFound(goal_id))?;
        let allocated = goal.allocated_amount;
        let goal_title = goal.title.clone();
        let account_id = goal.account_id;

        if allocated > 0.0 {
            let balance = self.wallet_service.account(&self.wallet, account_id)?.balance;
            self.wallet_service
                .set_balance(&mut self.wallet, account_id, balance + allocated)?;
            let transaction = Transaction::new(
                account_id,
                TransactionType::Credit,
                allocated,
                format!("Returned from {goal_title}"),
                SAVINGS_GOAL_CATEGORY,
                Utc::now(),
            );
            self.wallet_service
                .push_transaction(&self.balance_service, &mut self.wallet, transaction);
        }

        self.wallet.goals.retain(|g| g.id != goal_id);
        self.sync_goals();
        self.persist();
        Ok(())
    }

    /// Re-derive `is_completed` for every goal against the wall clock.
    /// Runs automatically after every balance-changing operation and on
    /// every goal read, so completion stays live across date rollover.
    pub fn sync_goals(&mut self) {
        let now = Utc::now();
        self.goal_service
            .sync(&mut self.wallet.goals, now.date_naive(), now);
    }

    /// All goals, freshly synced.
    pub fn goals(&mut self) -> &[Goal] {
        self.sync_goals();
        &self.wallet.goals
    }

    pub fn goal(&mut self, goal_id: Uuid) -> Option<&Goal> {
        self.sync_goals();
        self.wallet.goals.iter().find(|g| g.id == goal_id)
    }

    pub fn active_goals(&mut self) -> Vec<&Goal> {
        self.sync_goals();
        self.wallet.goals.iter().filter(|g| !g.is_completed).collect()
    }

    pub fn completed_goals(&mut self) -> Vec<&Goal> {
        self.sync_goals();
        self.wallet.goals.iter().filter(|g| g.is_completed).collect()
    }

    // ── Filters & Presets ───────────────────────────────────────────

    /// The store's current (transient) filter state.
    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = Filters::default();
    }

    /// The transaction list under the current filters, newest first.
    #[must_use]
    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.filter_service
            .apply(&self.wallet.transactions, &self.filters)
    }

    /// Apply an arbitrary filter spec without touching the stored state.
    #[must_use]
    pub fn query_transactions(&self, filters: &Filters) -> Vec<&Transaction> {
        self.filter_service.apply(&self.wallet.transactions, filters)
    }

    /// Save a filter spec under a name for reuse.
    pub fn save_filter_preset(
        &mut self,
        name: &str,
        filters: Filters,
    ) -> Result<Uuid, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError("Preset name is required".into()));
        }
        let preset = FilterPreset::new(name, filters);
        let id = preset.id;
        self.wallet.filter_presets.push(preset);
        self.persist();
        Ok(id)
    }

    /// Make a saved preset the current filter state.
    pub fn apply_filter_preset(&mut self, preset_id: Uuid) -> Result<(), CoreError> {
        let preset = self
            .wallet
            .filter_presets
            .iter()
            .find(|p| p.id == preset_id)
            .ok_or(CoreError::PresetNotFound(preset_id))?;
        self.filters = preset.filters.clone();
        Ok(())
    }

    pub fn delete_filter_preset(&mut self, preset_id: Uuid) -> Result<(), CoreError> {
        let before = self.wallet.filter_presets.len();
        self.wallet.filter_presets.retain(|p| p.id != preset_id);
        if self.wallet.filter_presets.len() == before {
            return Err(CoreError::PresetNotFound(preset_id));
        }
        self.persist();
        Ok(())
    }

    #[must_use]
    pub fn filter_presets(&self) -> &[FilterPreset] {
        &self.wallet.filter_presets
    }

    // ── User ────────────────────────────────────────────────────────

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.wallet.user.as_ref()
    }

    /// Store the profile record wholesale, stamping `updated_at`.
    pub fn set_user(&mut self, mut user: User) {
        user.updated_at = Utc::now();
        self.wallet.user = Some(user);
        self.persist();
    }
}
