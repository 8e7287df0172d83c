//! Persistent bankroll for the human seat.
//!
//! A [`Wallet`] keeps a balance and a typed transaction log and is stored
//! as pretty JSON between sessions. `play --wallet` feeds every finished
//! hand through [`Wallet::settle_hand`], so the balance tracks the chips
//! won and lost at the table.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::io_utils::ensure_parent_dir;

pub const DEFAULT_BALANCE: u64 = 1_000;
pub const DEFAULT_MAX_BALANCE: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Bet,
    Win,
    /// Bookkeeping only; the chips already left with the matching `Bet`
    Loss,
    Refund,
    Bonus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: u64,
    pub ts: DateTime<Utc>,
    pub description: String,
    pub balance_after: u64,
}

#[derive(Debug)]
pub enum WalletError {
    /// Amounts must be positive
    ZeroAmount,
    InsufficientFunds { needed: u64, available: u64 },
    AboveLimit { max: u64 },
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::ZeroAmount => write!(f, "amount must be positive"),
            WalletError::InsufficientFunds { needed, available } => {
                write!(f, "insufficient funds: need {}, have {}", needed, available)
            }
            WalletError::AboveLimit { max } => write!(f, "balance would exceed limit of {}", max),
            WalletError::Io(e) => write!(f, "{}", e),
            WalletError::Format(e) => write!(f, "malformed wallet file: {}", e),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<std::io::Error> for WalletError {
    fn from(e: std::io::Error) -> Self {
        WalletError::Io(e)
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::Format(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    owner: String,
    balance: u64,
    #[serde(default = "default_max_balance")]
    max_balance: u64,
    #[serde(default)]
    history: Vec<Transaction>,
}

fn default_max_balance() -> u64 {
    DEFAULT_MAX_BALANCE
}

impl Wallet {
    /// A new wallet whose opening balance is logged as a deposit.
    pub fn new(owner: impl Into<String>, initial: u64) -> Self {
        let mut w = Self {
            owner: owner.into(),
            balance: initial,
            max_balance: DEFAULT_MAX_BALANCE.max(initial),
            history: Vec::new(),
        };
        if initial > 0 {
            w.log(TransactionKind::Deposit, initial, "Initial balance".to_string());
        }
        w
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn can_afford(&self, amount: u64) -> bool {
        amount <= self.balance
    }

    pub fn deposit(&mut self, amount: u64, description: &str) -> Result<(), WalletError> {
        self.credit(TransactionKind::Deposit, amount, description.to_string())
    }

    pub fn withdraw(&mut self, amount: u64, description: &str) -> Result<(), WalletError> {
        self.debit(TransactionKind::Withdrawal, amount, description.to_string())
    }

    pub fn place_bet(&mut self, amount: u64, game_id: Option<&str>) -> Result<(), WalletError> {
        self.debit(TransactionKind::Bet, amount, describe("Bet placed", game_id))
    }

    pub fn win_bet(&mut self, amount: u64, game_id: Option<&str>) -> Result<(), WalletError> {
        self.credit(TransactionKind::Win, amount, describe("Bet won", game_id))
    }

    /// Logs a lost bet. The balance is untouched because the stake was
    /// already taken by [`Wallet::place_bet`].
    pub fn lose_bet(&mut self, amount: u64, game_id: Option<&str>) {
        self.log(TransactionKind::Loss, amount, describe("Bet lost", game_id));
    }

    pub fn refund_bet(&mut self, amount: u64, game_id: Option<&str>) -> Result<(), WalletError> {
        self.credit(TransactionKind::Refund, amount, describe("Bet refunded", game_id))
    }

    pub fn add_bonus(&mut self, amount: u64, reason: &str) -> Result<(), WalletError> {
        self.credit(TransactionKind::Bonus, amount, reason.to_string())
    }

    /// Books one finished hand: the chips the seat put in as a bet, then
    /// either the amount it collected as a win or the stake as a loss.
    pub fn settle_hand(&mut self, hand_id: &str, wagered: u64, won: u64) -> Result<(), WalletError> {
        if wagered > 0 {
            self.place_bet(wagered, Some(hand_id))?;
        }
        if won > 0 {
            self.win_bet(won, Some(hand_id))
        } else {
            if wagered > 0 {
                self.lose_bet(wagered, Some(hand_id));
            }
            Ok(())
        }
    }

    pub fn by_kind(&self, kind: TransactionKind) -> impl Iterator<Item = &Transaction> {
        self.history.iter().filter(move |t| t.kind == kind)
    }

    /// Up to `count` most recent transactions, newest last.
    pub fn recent(&self, count: usize) -> &[Transaction] {
        let start = self.history.len().saturating_sub(count);
        &self.history[start..]
    }

    pub fn total_of(&self, kind: TransactionKind) -> u64 {
        self.by_kind(kind).map(|t| t.amount).sum()
    }

    /// Percentage of settled bets that were won; 0 before any.
    pub fn win_rate(&self) -> f64 {
        let wins = self.by_kind(TransactionKind::Win).count();
        let losses = self.by_kind(TransactionKind::Loss).count();
        let total = wins + losses;
        if total == 0 {
            return 0.0;
        }
        wins as f64 * 100.0 / total as f64
    }

    /// Chips collected from bets (wins and refunds) minus chips staked.
    pub fn net_profit(&self) -> i64 {
        let back = self.total_of(TransactionKind::Win) + self.total_of(TransactionKind::Refund);
        back as i64 - self.total_of(TransactionKind::Bet) as i64
    }

    pub fn save(&self, path: &Path) -> Result<(), WalletError> {
        ensure_parent_dir(path).map_err(|e| WalletError::Io(std::io::Error::other(e)))?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, WalletError> {
        let s = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&s)?)
    }

    /// Loads `path`, or starts a fresh wallet for `owner` if there is no file yet.
    pub fn load_or_create(path: &Path, owner: &str) -> Result<Self, WalletError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new(owner, DEFAULT_BALANCE))
        }
    }

    fn credit(
        &mut self,
        kind: TransactionKind,
        amount: u64,
        description: String,
    ) -> Result<(), WalletError> {
        if amount == 0 {
            return Err(WalletError::ZeroAmount);
        }
        let balance = self
            .balance
            .checked_add(amount)
            .filter(|b| *b <= self.max_balance)
            .ok_or(WalletError::AboveLimit {
                max: self.max_balance,
            })?;
        self.balance = balance;
        self.log(kind, amount, description);
        Ok(())
    }

    fn debit(
        &mut self,
        kind: TransactionKind,
        amount: u64,
        description: String,
    ) -> Result<(), WalletError> {
        if amount == 0 {
            return Err(WalletError::ZeroAmount);
        }
        if !self.can_afford(amount) {
            return Err(WalletError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.log(kind, amount, description);
        Ok(())
    }

    fn log(&mut self, kind: TransactionKind, amount: u64, description: String) {
        self.history.push(Transaction {
            kind,
            amount,
            ts: Utc::now(),
            description,
            balance_after: self.balance,
        });
    }
}

fn describe(what: &str, game_id: Option<&str>) -> String {
    match game_id {
        Some(id) if !id.is_empty() => format!("{} (hand {})", what, id),
        _ => what.to_string(),
    }
}
