use thiserror::Error;

use crate::phase::Phase;
use crate::player::ContenderId;

/// Recoverable failures reported by the rules core.
///
/// Every variant is returned before any state is touched, so a caller can
/// re-prompt or log and carry on with the session exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Hand evaluation needs at least 5 cards, got {got}")]
    InsufficientCards { got: usize },
    #[error("Invalid wager amount: {amount}")]
    InvalidWager { amount: u32 },
    #[error("Illegal action: {reason}")]
    IllegalAction { reason: String },
    #[error("Unknown contender {0}")]
    UnknownContender(ContenderId),
    #[error("Illegal phase transition {from:?} -> {to:?}")]
    IllegalTransition { from: Phase, to: Phase },
    #[error("Need at least 2 contenders with chips, have {available}")]
    NotEnoughContenders { available: usize },
    #[error("Card source exhausted")]
    DeckExhausted,
    #[error("Table lock poisoned")]
    TableUnavailable,
}

impl GameError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        GameError::IllegalAction {
            reason: reason.into(),
        }
    }
}
