//! Wallet persistence and bookkeeping.

use headsup_cli::wallet::{DEFAULT_BALANCE, TransactionKind, Wallet, WalletError};

#[test]
fn saved_wallet_loads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/wallet.json");
    let mut w = Wallet::new("alice", 2_000);
    w.deposit(500, "payday").unwrap();
    w.settle_hand("20260101-000001", 100, 0).unwrap();
    w.refund_bet(20, Some("20260101-000002")).unwrap();
    w.save(&path).unwrap();

    let loaded = Wallet::load(&path).unwrap();
    assert_eq!(loaded, w);
    assert_eq!(loaded.balance(), 2_420);
    let last = loaded.recent(1)[0].clone();
    assert_eq!(last.kind, TransactionKind::Refund);
    assert_eq!(last.balance_after, 2_420);
    assert!(last.description.contains("20260101-000002"));
}

#[test]
fn missing_file_starts_a_default_wallet() {
    let dir = tempfile::tempdir().unwrap();
    let w = Wallet::load_or_create(&dir.path().join("none.json"), "bob").unwrap();
    assert_eq!(w.owner(), "bob");
    assert_eq!(w.balance(), DEFAULT_BALANCE);
}

#[test]
fn corrupt_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Wallet::load(&path), Err(WalletError::Format(_))));
}

#[test]
fn win_rate_counts_settled_hands() {
    let mut w = Wallet::new("alice", 1_000);
    assert_eq!(w.win_rate(), 0.0);
    w.settle_hand("h1", 10, 20).unwrap();
    w.settle_hand("h2", 10, 0).unwrap();
    w.settle_hand("h3", 10, 0).unwrap();
    w.settle_hand("h4", 10, 25).unwrap();
    assert_eq!(w.win_rate(), 50.0);
    assert_eq!(w.net_profit(), 5);
    assert_eq!(w.balance(), 1_005);
    assert_eq!(w.total_of(TransactionKind::Bet), 40);
}

#[test]
fn bonus_and_withdrawal_move_the_balance() {
    let mut w = Wallet::new("alice", 1_000);
    w.add_bonus(50, "welcome").unwrap();
    w.withdraw(300, "cash out").unwrap();
    assert_eq!(w.balance(), 750);
    assert_eq!(w.net_profit(), 0);
}
