// ═══════════════════════════════════════════════════════════════════
// Storage Tests — StorageAdapter implementations and StorageManager
// ═══════════════════════════════════════════════════════════════════

use wallet_core::models::account::{Account, AccountType};
use wallet_core::models::goal::Goal;
use wallet_core::models::wallet::{Wallet, WalletSeed};
use wallet_core::storage::adapter::{FileStorage, MemoryStorage, StorageAdapter};
use wallet_core::storage::manager::{
    StorageManager, ACCOUNTS_KEY, GOALS_KEY, TRANSACTIONS_KEY, USER_KEY,
};

// ═══════════════════════════════════════════════════════════════════
// Adapters
// ═══════════════════════════════════════════════════════════════════

#[test]
fn memory_storage_round_trips_values() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.get("missing").expect("get"), None);

    storage.set("key", "value").expect("set");
    assert_eq!(storage.get("key").expect("get").as_deref(), Some("value"));

    storage.set("key", "replaced").expect("set");
    assert_eq!(storage.get("key").expect("get").as_deref(), Some("replaced"));

    storage.remove("key").expect("remove");
    assert_eq!(storage.get("key").expect("get"), None);

    // Removing an absent key is not an error.
    storage.remove("key").expect("remove twice");
}

#[test]
fn file_storage_persists_one_file_per_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut storage = FileStorage::new(dir.path());

    assert_eq!(storage.get("wallet_accounts").expect("get"), None);
    storage.set("wallet_accounts", "[]").expect("set");

    assert!(dir.path().join("wallet_accounts.json").exists());
    assert_eq!(
        storage.get("wallet_accounts").expect("get").as_deref(),
        Some("[]")
    );

    storage.remove("wallet_accounts").expect("remove");
    assert!(!dir.path().join("wallet_accounts.json").exists());
    storage.remove("wallet_accounts").expect("remove twice");
}

#[test]
fn file_storage_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut storage = FileStorage::new(dir.path());
        storage.set("wallet_user", "{\"k\":1}").expect("set");
    }
    let storage = FileStorage::new(dir.path());
    assert_eq!(
        storage.get("wallet_user").expect("get").as_deref(),
        Some("{\"k\":1}")
    );
}

// ═══════════════════════════════════════════════════════════════════
// StorageManager
// ═══════════════════════════════════════════════════════════════════

#[test]
fn manager_loads_and_saves_typed_collections() {
    let mut manager = StorageManager::new(Box::new(MemoryStorage::new()));

    let missing: Option<Vec<Account>> = manager.load(ACCOUNTS_KEY).expect("load");
    assert!(missing.is_none());

    let accounts = vec![Account::new("Main", AccountType::Checking, 25.0)];
    manager.save(ACCOUNTS_KEY, &accounts).expect("save");

    let loaded: Vec<Account> = manager
        .load(ACCOUNTS_KEY)
        .expect("load")
        .expect("present");
    assert_eq!(loaded, accounts);
}

#[test]
fn manager_rejects_corrupt_payloads() {
    let mut adapter = MemoryStorage::new();
    adapter.set(ACCOUNTS_KEY, "not json").expect("set");
    let manager = StorageManager::new(Box::new(adapter));

    let result: Result<Option<Vec<Account>>, _> = manager.load(ACCOUNTS_KEY);
    assert!(result.is_err());
}

#[test]
fn load_wallet_seeds_absent_collections_once() {
    let account = Account::new("Seeded", AccountType::Savings, 40.0);
    let seed = WalletSeed {
        accounts: vec![account.clone()],
        ..WalletSeed::default()
    };

    let mut manager = StorageManager::new(Box::new(MemoryStorage::new()));
    let wallet = manager.load_wallet(seed).expect("load");
    assert_eq!(wallet.accounts, vec![account.clone()]);

    // The seed was written back: a different seed no longer applies.
    let other_seed = WalletSeed {
        accounts: vec![Account::new("Other", AccountType::Other, 1.0)],
        ..WalletSeed::default()
    };
    let wallet = manager.load_wallet(other_seed).expect("reload");
    assert_eq!(wallet.accounts, vec![account]);
}

#[test]
fn load_wallet_prefers_stored_collections_over_seed() {
    let mut manager = StorageManager::new(Box::new(MemoryStorage::new()));
    let stored = vec![Account::new("Stored", AccountType::Checking, 5.0)];
    manager.save(ACCOUNTS_KEY, &stored).expect("save");

    let seed = WalletSeed {
        accounts: vec![Account::new("Seed", AccountType::Checking, 99.0)],
        ..WalletSeed::default()
    };
    let wallet = manager.load_wallet(seed).expect("load");
    assert_eq!(wallet.accounts, stored);
    assert!(wallet.goals.is_empty());
    assert!(wallet.user.is_none());
}

#[test]
fn save_wallet_writes_every_collection() {
    let mut manager = StorageManager::new(Box::new(MemoryStorage::new()));
    let account = Account::new("Main", AccountType::Checking, 10.0);
    let goal = Goal::new(
        "Trip",
        500.0,
        chrono::NaiveDate::from_ymd_opt(2030, 1, 1).expect("date"),
        account.id,
        None,
    );
    let wallet = Wallet {
        accounts: vec![account],
        goals: vec![goal],
        ..Wallet::default()
    };

    manager.save_wallet(&wallet).expect("save");

    let accounts: Vec<Account> = manager.load(ACCOUNTS_KEY).expect("load").expect("some");
    assert_eq!(accounts.len(), 1);
    let goals: Vec<Goal> = manager.load(GOALS_KEY).expect("load").expect("some");
    assert_eq!(goals.len(), 1);
    let transactions: Option<Vec<wallet_core::models::transaction::Transaction>> =
        manager.load(TRANSACTIONS_KEY).expect("load");
    assert_eq!(transactions.expect("some").len(), 0);

    // No user record: the key is removed rather than left stale.
    let user: Option<wallet_core::models::user::User> = manager.load(USER_KEY).expect("load");
    assert!(user.is_none());
}
