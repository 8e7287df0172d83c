//! Baseline bot for play and simulation.
//!
//! Scores the current holding between 0 and 1 and acts on fixed
//! thresholds, with a seeded coin flip between shoving and raising on
//! strong hands. It never folds; a weak hand just checks or calls.

use headsup_engine::cards::Card;
use headsup_engine::hand::evaluate_holding;
use headsup_engine::player::PlayerAction;
use headsup_engine::view::PublicView;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::ActionPolicy;

/// Above this the bot shoves or raises.
pub const STRONG: f64 = 0.6;
/// Above this (and up to [`STRONG`]) the bot raises.
pub const MEDIUM: f64 = 0.1;
/// Share of strong decisions that go all-in instead of raising.
pub const SHOVE_CHANCE: f64 = 0.7;
/// Largest random amount added on top of a computed raise.
pub const RAISE_JITTER: u32 = 50;

/// # Example
///
/// ```rust
/// use headsup_ai::baseline::BaselineBot;
/// use headsup_ai::ActionPolicy;
///
/// let bot = BaselineBot::with_seed(42);
/// assert_eq!(bot.name(), "BaselineBot");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineBot {
    rng: ChaCha20Rng,
}

impl BaselineBot {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// `rank / 9` plus a small bonus per kicker, capped at 1.
    ///
    /// With fewer than five cards known (preflop) only pairs and trips
    /// among them count, and every card is a kicker.
    pub fn hand_strength(hole: &[Card], board: &[Card]) -> f64 {
        if hole.is_empty() {
            return 0.0;
        }
        let (rank_value, kickers) = match evaluate_holding(hole, board) {
            Ok(eval) => (eval.rank.value(), eval.kickers),
            Err(_) => partial_shape(hole, board),
        };
        let bonus: f64 = kickers.iter().map(|k| f64::from(*k) / 14.0 * 0.1).sum();
        (f64::from(rank_value) / 9.0 + bonus).min(1.0)
    }

    /// `0.75 * pot * strength` plus jitter, never below the table minimum.
    fn raise_amount(&mut self, strength: f64, pot: u64, min_raise: u32) -> u32 {
        let base = (pot as f64 * 0.75 * strength) as u32;
        let jitter = self.rng.random_range(0..=RAISE_JITTER);
        base.saturating_add(jitter).max(min_raise)
    }
}

impl Default for BaselineBot {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl ActionPolicy for BaselineBot {
    fn decide(&mut self, view: &PublicView) -> PlayerAction {
        let strength = Self::hand_strength(&view.hole, &view.board);
        let risk: f64 = self.rng.random();
        let passive = if view.can_check() {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        };

        let action = if view.stack == 0 {
            passive
        } else if strength > STRONG && risk < SHOVE_CHANCE {
            PlayerAction::AllIn
        } else if strength > MEDIUM {
            let amount = self.raise_amount(strength, view.pot, view.min_raise);
            if view.to_call.saturating_add(amount) < view.stack {
                PlayerAction::Raise(amount)
            } else {
                PlayerAction::AllIn
            }
        } else {
            passive
        };
        debug!(contender = %view.contender, strength, ?action, "baseline decision");
        action
    }

    fn name(&self) -> &str {
        "BaselineBot"
    }
}

/// Rank category and kickers for fewer than five cards: trips, two pair,
/// a pair or nothing, with all ranks as kickers.
fn partial_shape(hole: &[Card], board: &[Card]) -> (u8, Vec<u8>) {
    let mut counts = [0u8; 15];
    for c in hole.iter().chain(board) {
        counts[c.rank.value() as usize] += 1;
    }
    let pairs = counts.iter().filter(|&&n| n == 2).count();
    let rank_value = if counts.iter().any(|&n| n >= 3) {
        3
    } else {
        pairs.min(2) as u8
    };
    let mut kickers: Vec<u8> = hole.iter().chain(board).map(|c| c.rank.value()).collect();
    kickers.sort_unstable_by(|a, b| b.cmp(a));
    (rank_value, kickers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::cards::parse_cards;
    use headsup_engine::phase::Phase;
    use headsup_engine::player::ContenderId;

    fn view(hole: &str, board: &str, to_call: u32, stack: u32) -> PublicView {
        PublicView {
            contender: ContenderId(1),
            phase: Phase::Flop,
            hole: parse_cards(hole).unwrap(),
            board: parse_cards(board).unwrap(),
            stack,
            round_wager: 0,
            to_call,
            min_raise: 10,
            big_blind: 10,
            pot: 100,
            your_turn: true,
            opponents: vec![],
        }
    }

    #[test]
    fn pocket_pair_scores_above_unpaired_hand() {
        let pair = BaselineBot::hand_strength(&parse_cards("7c 7d").unwrap(), &[]);
        let unpaired = BaselineBot::hand_strength(&parse_cards("7c 2d").unwrap(), &[]);
        assert!(pair > unpaired);
    }

    #[test]
    fn strength_is_capped_at_one() {
        let s = BaselineBot::hand_strength(
            &parse_cards("As Ks").unwrap(),
            &parse_cards("Qs Js Ts").unwrap(),
        );
        assert_eq!(s, 1.0);
    }

    #[test]
    fn no_cards_means_no_strength() {
        assert_eq!(BaselineBot::hand_strength(&[], &[]), 0.0);
    }

    #[test]
    fn raise_never_drops_below_minimum() {
        let mut bot = BaselineBot::with_seed(3);
        for _ in 0..50 {
            assert!(bot.raise_amount(0.2, 0, 40) >= 40);
        }
    }

    #[test]
    fn short_stack_shoves_instead_of_raising() {
        let mut bot = BaselineBot::with_seed(9);
        let action = bot.decide(&view("Ah Kd", "2c 7s 9h", 20, 25));
        assert_eq!(action, PlayerAction::AllIn);
    }

    #[test]
    fn same_seed_same_decisions() {
        let v = view("Qh Qd", "2c 7s 9h", 0, 1000);
        let mut a = BaselineBot::with_seed(11);
        let mut b = BaselineBot::with_seed(11);
        for _ in 0..20 {
            assert_eq!(a.decide(&v), b.decide(&v));
        }
    }
}
