use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::phase::Phase;
use crate::player::{ContenderId, ContenderStatus, PlayerAction};

/// What one opponent looks like from across the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub id: ContenderId,
    pub name: String,
    pub stack: u32,
    pub status: ContenderStatus,
    pub round_wager: u32,
}

/// Everything a single contender is allowed to know when deciding.
/// Opponents' hole cards are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicView {
    pub contender: ContenderId,
    pub phase: Phase,
    pub hole: Vec<Card>,
    pub board: Vec<Card>,
    pub stack: u32,
    pub round_wager: u32,
    pub to_call: u32,
    pub min_raise: u32,
    pub big_blind: u32,
    /// Chips across all pots
    pub pot: u64,
    pub your_turn: bool,
    pub opponents: Vec<OpponentView>,
}

impl PublicView {
    pub fn can_check(&self) -> bool {
        self.to_call == 0
    }

    /// A minimum raise fits without going all-in.
    pub fn can_raise(&self) -> bool {
        self.stack > self.to_call.saturating_add(self.min_raise)
    }

    /// One representative of each action the rules would accept right now.
    pub fn legal_actions(&self) -> Vec<PlayerAction> {
        let mut actions = vec![PlayerAction::Fold];
        if self.can_check() {
            actions.push(PlayerAction::Check);
        } else {
            actions.push(PlayerAction::Call);
        }
        if self.can_raise() {
            actions.push(PlayerAction::Raise(self.min_raise));
        }
        if self.stack > 0 {
            actions.push(PlayerAction::AllIn);
        }
        actions
    }
}
