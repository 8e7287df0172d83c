use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Smallest card count that can be ranked.
pub const MIN_EVAL_CARDS: usize = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength of the best five-card hand found in a set of cards.
///
/// `kickers` lists the five ranks of that hand in tie-break order, e.g.
/// `[13, 13, 9, 9, 4]` for kings and nines with a four. The low ace of the
/// wheel straight is encoded as `1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub rank: HandRank,
    pub kickers: Vec<u8>,
}

impl PartialEq for HandEvaluation {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for HandEvaluation {}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks: Vec<String> = self.kickers.iter().map(|k| k.to_string()).collect();
        write!(f, "{} [{}]", self.rank, ranks.join(" "))
    }
}

/// Ranks the best five-card hand contained in `cards`.
///
/// Categories are tested strictly from the strongest down; the first match
/// wins, so a royal flush is never reported as a plain flush or straight.
///
/// # Errors
///
/// [`GameError::InsufficientCards`] when fewer than five cards are given.
///
/// # Examples
///
/// ```
/// use headsup_engine::cards::parse_cards;
/// use headsup_engine::hand::{evaluate, HandRank};
///
/// let cards = parse_cards("Ah 2c 3d 4s 5h 9c Kd").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.rank, HandRank::Straight);
/// assert_eq!(eval.kickers, vec![5, 4, 3, 2, 1]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandEvaluation, GameError> {
    if cards.len() < MIN_EVAL_CARDS {
        return Err(GameError::InsufficientCards { got: cards.len() });
    }

    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut rank_mask: u16 = 0;
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    for c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        let s = c.suit.index();
        suit_counts[s] += 1;
        suit_masks[s] |= 1 << r;
    }
    let flush_suit = (0..4).find(|&s| suit_counts[s] >= 5);

    // 9/8: royal and straight flush need five consecutive ranks in one suit,
    // not a flush and a straight drawn from different cards.
    if let Some(s) = flush_suit {
        if let Some(high) = straight_high_from_mask(suit_masks[s]) {
            let rank = if high == 14 {
                HandRank::RoyalFlush
            } else {
                HandRank::StraightFlush
            };
            return Ok(HandEvaluation {
                rank,
                kickers: straight_ranks(high),
            });
        }
    }

    // 7: four of a kind
    if let Some(quad) = highest_with_count(&rank_counts, 4, &[]) {
        let mut kickers = vec![quad; 4];
        kickers.extend(top_ranks(&rank_counts, &[quad], 1));
        return Ok(HandEvaluation {
            rank: HandRank::FourOfAKind,
            kickers,
        });
    }

    // 6: full house; a second set of trips fills the pair slot
    if let Some(trip) = highest_with_count(&rank_counts, 3, &[]) {
        if let Some(pair) = highest_with_count(&rank_counts, 2, &[trip]) {
            return Ok(HandEvaluation {
                rank: HandRank::FullHouse,
                kickers: vec![trip, trip, trip, pair, pair],
            });
        }
    }

    // 5: flush
    if let Some(s) = flush_suit {
        return Ok(HandEvaluation {
            rank: HandRank::Flush,
            kickers: mask_ranks_desc(suit_masks[s]).take(5).collect(),
        });
    }

    // 4: straight
    if let Some(high) = straight_high_from_mask(rank_mask) {
        return Ok(HandEvaluation {
            rank: HandRank::Straight,
            kickers: straight_ranks(high),
        });
    }

    // 3: three of a kind
    if let Some(trip) = highest_with_count(&rank_counts, 3, &[]) {
        let mut kickers = vec![trip; 3];
        kickers.extend(top_ranks(&rank_counts, &[trip], 2));
        return Ok(HandEvaluation {
            rank: HandRank::ThreeOfAKind,
            kickers,
        });
    }

    // 2/1: pairs. With three pairs on seven cards the lowest pair only
    // competes as a kicker.
    if let Some(high) = highest_with_count(&rank_counts, 2, &[]) {
        if let Some(low) = highest_with_count(&rank_counts, 2, &[high]) {
            let mut kickers = vec![high, high, low, low];
            kickers.extend(top_ranks(&rank_counts, &[high, low], 1));
            return Ok(HandEvaluation {
                rank: HandRank::TwoPair,
                kickers,
            });
        }
        let mut kickers = vec![high, high];
        kickers.extend(top_ranks(&rank_counts, &[high], 3));
        return Ok(HandEvaluation {
            rank: HandRank::OnePair,
            kickers,
        });
    }

    // 0: high card
    Ok(HandEvaluation {
        rank: HandRank::HighCard,
        kickers: top_ranks(&rank_counts, &[], 5),
    })
}

/// Evaluates hole cards together with whatever community cards are out.
pub fn evaluate_holding(hole: &[Card], board: &[Card]) -> Result<HandEvaluation, GameError> {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    evaluate(&cards)
}

/// Orders two evaluations: category first, then kickers pairwise.
/// Running out of kickers without a difference is a genuine tie.
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    match a.rank.cmp(&b.rank) {
        Ordering::Equal => a
            .kickers
            .iter()
            .zip(b.kickers.iter())
            .map(|(x, y)| x.cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal),
        ord => ord,
    }
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    // Ace also plays as 1 for the wheel
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    (5..=14u8).rev().find(|&high| {
        let window = 0b11111u16 << (high - 4);
        m & window == window
    })
}

fn straight_ranks(high: u8) -> Vec<u8> {
    (0..5).map(|i| high - i).collect()
}

fn mask_ranks_desc(mask: u16) -> impl Iterator<Item = u8> {
    (2..=14u8).rev().filter(move |r| mask & (1 << r) != 0)
}

fn highest_with_count(rank_counts: &[u8; 15], min: u8, exclude: &[u8]) -> Option<u8> {
    (2..=14u8)
        .rev()
        .find(|r| rank_counts[*r as usize] >= min && !exclude.contains(r))
}

fn top_ranks(rank_counts: &[u8; 15], exclude: &[u8], n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| rank_counts[*r as usize] > 0 && !exclude.contains(r))
        .take(n)
        .collect()
}
