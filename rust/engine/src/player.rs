use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Stable seat identifier handed out by the session. Ids are never reused
/// within a session, so a stale id is reported as unknown rather than
/// silently addressing somebody else.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ContenderId(pub u32);

impl fmt::Display for ContenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a contender stands within the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ContenderStatus {
    /// Still able to act
    Active,
    /// Gave up the hand; chips already wagered stay in the pots
    Folded,
    /// Whole stack committed; waits for showdown
    AllIn,
    /// Started the hand with no chips and sits it out
    Busted,
}

/// Represents a player action during a betting round.
/// `Raise` carries the amount added on top of the call.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Match the current round maximum
    Call,
    /// Call and raise by the given amount
    Raise(u32),
    /// Commit the whole remaining stack
    AllIn,
}

impl PlayerAction {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
            PlayerAction::Raise(_) => "raise",
            PlayerAction::AllIn => "all-in",
        }
    }
}

/// A player dealt into the current hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contender {
    id: ContenderId,
    name: String,
    stack: u32,
    status: ContenderStatus,
    hole: [Option<Card>; 2],
}

impl Contender {
    pub fn new(id: ContenderId, name: impl Into<String>, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            status: ContenderStatus::Active,
            hole: [None, None],
        }
    }

    pub fn id(&self) -> ContenderId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> ContenderStatus {
        self.status
    }

    /// Can still take betting actions this hand.
    pub fn is_active(&self) -> bool {
        self.status == ContenderStatus::Active
    }

    /// Still holds cards, i.e. has neither folded nor sat the hand out.
    pub fn in_hand(&self) -> bool {
        matches!(self.status, ContenderStatus::Active | ContenderStatus::AllIn)
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Hole cards that have actually been dealt.
    pub fn dealt_cards(&self) -> Vec<Card> {
        self.hole.iter().flatten().copied().collect()
    }

    pub(crate) fn set_status(&mut self, status: ContenderStatus) {
        self.status = status;
    }

    pub(crate) fn give_card(&mut self, c: Card) -> bool {
        match self.hole.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(c);
                true
            }
            None => false,
        }
    }

    /// Clears cards and status for a new hand; an empty stack sits out.
    pub(crate) fn reset_for_hand(&mut self) {
        self.hole = [None, None];
        self.status = if self.stack == 0 {
            ContenderStatus::Busted
        } else {
            ContenderStatus::Active
        };
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Moves `amount` out of the stack. Callers validate first.
    pub(crate) fn take_chips(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.stack);
        self.stack -= taken;
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn receives_two_hole_cards_only() {
        let mut p = Contender::new(ContenderId(0), "alice", 100);
        let a = Card::new(Rank::Ace, Suit::Spades);
        let k = Card::new(Rank::King, Suit::Spades);
        assert!(p.give_card(a));
        assert!(p.give_card(k));
        assert!(!p.give_card(a));
        assert_eq!(p.hole_cards(), [Some(a), Some(k)]);
    }

    #[test]
    fn empty_stack_sits_out_next_hand() {
        let mut p = Contender::new(ContenderId(3), "bob", 40);
        assert_eq!(p.take_chips(40), 40);
        p.reset_for_hand();
        assert_eq!(p.status(), ContenderStatus::Busted);
        assert!(!p.in_hand());
    }
}
