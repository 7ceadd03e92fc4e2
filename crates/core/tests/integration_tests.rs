// ═══════════════════════════════════════════════════════════════════
// Integration Tests — bootstrap seeding, persistence across sessions,
// and full LedgerStore flows end to end
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use wallet_core::errors::CoreError;
use wallet_core::models::account::{Account, AccountType};
use wallet_core::models::filter::Filters;
use wallet_core::models::goal::Goal;
use wallet_core::models::transaction::{Transaction, TransactionType};
use wallet_core::models::wallet::WalletSeed;
use wallet_core::providers::auto::AutoConfirm;
use wallet_core::storage::adapter::{FileStorage, MemoryStorage, StorageAdapter};
use wallet_core::LedgerStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn seed_transaction(
    account_id: Uuid,
    kind: TransactionType,
    amount: f64,
    y: i32,
    m: u32,
    d: u32,
) -> Transaction {
    let at = Utc
        .with_ymd_and_hms(y, m, d, 12, 0, 0)
        .single()
        .expect("instant");
    Transaction::new(account_id, kind, amount, "Seeded", "Misc", at)
}

// ═══════════════════════════════════════════════════════════════════
// Bootstrap
// ═══════════════════════════════════════════════════════════════════

#[test]
fn open_with_seed_stamps_running_balances() {
    let mut account = Account::new("Main", AccountType::Checking, 0.0);
    // Anchor balance reflects the three seeded transactions: +100 -50 +100.
    account.balance = 150.0;
    let seed = WalletSeed {
        accounts: vec![account.clone()],
        transactions: vec![
            seed_transaction(account.id, TransactionType::Credit, 100.0, 2025, 1, 1),
            seed_transaction(account.id, TransactionType::Debit, 50.0, 2025, 1, 2),
            seed_transaction(account.id, TransactionType::Credit, 100.0, 2025, 1, 3),
        ],
        ..WalletSeed::default()
    };

    let store = LedgerStore::open_with_seed(
        Box::new(MemoryStorage::new()),
        Box::new(AutoConfirm),
        seed,
    )
    .expect("open");

    // Newest first, running balances in chronological order 100 → 50 → 150.
    let balances: Vec<_> = store
        .transactions()
        .iter()
        .map(|t| t.running_balance)
        .collect();
    assert_eq!(balances, vec![Some(150.0), Some(50.0), Some(100.0)]);
}

#[test]
fn seeded_goal_past_due_completes_on_open() {
    let account = Account::new("Main", AccountType::Savings, 100.0);
    let mut goal = Goal::new("Trip", 500.0, date(2020, 1, 1), account.id, None);
    goal.allocated_amount = 500.0;
    let seed = WalletSeed {
        accounts: vec![account],
        goals: vec![goal],
        ..WalletSeed::default()
    };

    let mut store = LedgerStore::open_with_seed(
        Box::new(MemoryStorage::new()),
        Box::new(AutoConfirm),
        seed,
    )
    .expect("open");

    let goals = store.goals();
    assert!(goals[0].is_completed);
    assert!(goals[0].completed_at.is_some());
}

// ═══════════════════════════════════════════════════════════════════
// Persistence across sessions
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn state_survives_reopen_on_file_storage() {
    let dir = tempfile::tempdir().expect("tempdir");

    let account_id = {
        let mut store = LedgerStore::open(
            Box::new(FileStorage::new(dir.path())),
            Box::new(AutoConfirm),
        )
        .expect("open");
        let account_id = store
            .add_account("Main", AccountType::Checking, 100.0, None, None, None, None)
            .expect("account");
        store.fund_wallet(account_id, 50.0, None).await.expect("fund");
        account_id
    };

    let store = LedgerStore::open(
        Box::new(FileStorage::new(dir.path())),
        Box::new(AutoConfirm),
    )
    .expect("reopen");

    let account = store.account(account_id).expect("account");
    assert_eq!(account.balance, 150.0);
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.transactions()[0].running_balance, Some(150.0));
}

#[test]
fn seed_does_not_overwrite_existing_storage() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut store = LedgerStore::open(
            Box::new(FileStorage::new(dir.path())),
            Box::new(AutoConfirm),
        )
        .expect("open");
        store
            .add_account("Original", AccountType::Checking, 10.0, None, None, None, None)
            .expect("account");
    }

    let seed = WalletSeed {
        accounts: vec![Account::new("Seeded", AccountType::Other, 999.0)],
        ..WalletSeed::default()
    };
    let store = LedgerStore::open_with_seed(
        Box::new(FileStorage::new(dir.path())),
        Box::new(AutoConfirm),
        seed,
    )
    .expect("reopen");

    assert_eq!(store.accounts().len(), 1);
    assert_eq!(store.accounts()[0].name, "Original");
}

// ═══════════════════════════════════════════════════════════════════
// Persistence failure is non-fatal; flush surfaces it
// ═══════════════════════════════════════════════════════════════════

/// Adapter that starts failing writes after a set number of successes.
struct FlakyStorage {
    inner: MemoryStorage,
    writes_left: usize,
}

impl FlakyStorage {
    fn new(writes_left: usize) -> Self {
        Self {
            inner: MemoryStorage::new(),
            writes_left,
        }
    }
}

impl StorageAdapter for FlakyStorage {
    fn name(&self) -> &str {
        "FlakyStorage"
    }

    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        if self.writes_left == 0 {
            return Err(CoreError::Storage("quota exceeded".into()));
        }
        self.writes_left -= 1;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.inner.remove(key)
    }
}

#[test]
fn storage_failure_keeps_in_memory_state_and_marks_dirty() {
    // Opening an empty store writes each of the four list collections twice
    // (seeding, then the initial persist). Allow exactly those, none after.
    let mut store = LedgerStore::open(Box::new(FlakyStorage::new(8)), Box::new(AutoConfirm))
        .expect("open");
    assert!(!store.has_unsaved_changes());

    let account_id = store
        .add_account("Main", AccountType::Checking, 100.0, None, None, None, None)
        .expect("account");

    // The mutation itself succeeded; only persistence lagged behind.
    assert_eq!(store.account(account_id).expect("account").balance, 100.0);
    assert!(store.has_unsaved_changes());

    // flush is the surfaced error channel.
    let err = store.flush().unwrap_err();
    assert!(matches!(err, CoreError::Storage(_)));
    assert!(store.has_unsaved_changes());
}

// ═══════════════════════════════════════════════════════════════════
// Filters, presets, and user — end to end
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn filtered_transactions_follow_current_filters_and_presets() {
    let mut store = LedgerStore::open(Box::new(MemoryStorage::new()), Box::new(AutoConfirm))
        .expect("open");
    let a = store
        .add_account("A", AccountType::Checking, 500.0, None, None, None, None)
        .expect("account");
    let b = store
        .add_account("B", AccountType::Savings, 0.0, None, None, None, None)
        .expect("account");

    store.fund_wallet(a, 100.0, None).await.expect("fund");
    store.transfer_internal(a, b, 25.0, None).await.expect("transfer");

    assert_eq!(store.filtered_transactions().len(), 3);

    let transfers_only = Filters {
        category: Some("Transfer".into()),
        ..Filters::default()
    };
    // One-off query: same result, stored filter state untouched.
    assert_eq!(store.query_transactions(&transfers_only).len(), 2);
    assert!(store.filters().is_empty());

    store.set_filters(transfers_only.clone());
    assert_eq!(store.filtered_transactions().len(), 2);

    let preset_id = store
        .save_filter_preset("Transfers", transfers_only)
        .expect("preset");
    store.clear_filters();
    assert_eq!(store.filtered_transactions().len(), 3);

    store.apply_filter_preset(preset_id).expect("apply preset");
    assert_eq!(store.filtered_transactions().len(), 2);

    store.delete_filter_preset(preset_id).expect("delete preset");
    assert!(store.filter_presets().is_empty());
    assert!(matches!(
        store.apply_filter_preset(preset_id).unwrap_err(),
        CoreError::PresetNotFound(_)
    ));
}

#[test]
fn user_profile_round_trips_through_storage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let user = wallet_core::models::user::User {
        id: Uuid::new_v4(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: None,
        avatar: None,
        avatar_color: Some("#172030".into()),
        plan: Some("Ultimate".into()),
        role: None,
        address: None,
        city: None,
        country: None,
        date_of_birth: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    {
        let mut store = LedgerStore::open(
            Box::new(FileStorage::new(dir.path())),
            Box::new(AutoConfirm),
        )
        .expect("open");
        store.set_user(user.clone());
    }

    let store = LedgerStore::open(
        Box::new(FileStorage::new(dir.path())),
        Box::new(AutoConfirm),
    )
    .expect("reopen");
    let stored = store.user().expect("user");
    assert_eq!(stored.email, user.email);
    assert_eq!(stored.plan, user.plan);
    // set_user stamps updated_at.
    assert!(stored.updated_at >= user.updated_at);
}
