use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Supplier of cards for a single hand.
///
/// The session only pulls from it; shuffling and ordering are the
/// supplier's business.
pub trait CardSource: Send {
    fn deal_card(&mut self) -> Option<Card>;

    fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    fn remaining(&self) -> usize;
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// A deck that deals exactly `cards`, in order. Used for replays and tests.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    /// Seeded deck, already shuffled.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new_with_seed(seed);
        deck.shuffle();
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }
}

impl CardSource for Deck {
    fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn same_seed_same_order() {
        let mut a = Deck::shuffled(42);
        let mut b = Deck::shuffled(42);
        for _ in 0..52 {
            assert_eq!(a.deal_card(), b.deal_card());
        }
        assert_eq!(a.remaining(), 0);
        assert!(a.deal_card().is_none());
    }

    #[test]
    fn stacked_deals_in_order_and_burns() {
        let cards = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let mut deck = Deck::stacked(cards.clone());
        assert_eq!(deck.deal_card(), Some(cards[0]));
        deck.burn_card();
        assert_eq!(deck.deal_card(), Some(cards[2]));
        assert_eq!(deck.remaining(), 0);
    }
}
