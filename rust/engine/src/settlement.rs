use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{evaluate_holding, HandEvaluation};
use crate::ledger::Pot;
use crate::player::{Contender, ContenderId};

/// How one pot was paid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotAward {
    pub pot_index: usize,
    pub amount: u32,
    /// Each winner's share; the odd chips sit with the first entry
    pub shares: Vec<(ContenderId, u32)>,
}

impl PotAward {
    pub fn winners(&self) -> Vec<ContenderId> {
        self.shares.iter().map(|(id, _)| *id).collect()
    }

    pub fn is_split(&self) -> bool {
        self.shares.len() > 1
    }
}

/// Result of paying out every pot of a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub awards: Vec<PotAward>,
    /// Hands shown down; empty when the hand ended on a fold
    pub hands: BTreeMap<ContenderId, HandEvaluation>,
}

impl Settlement {
    /// `(contender, amount won)` across all pots, for wallet sinks.
    pub fn payouts(&self) -> Vec<(ContenderId, u32)> {
        let mut totals: BTreeMap<ContenderId, u32> = BTreeMap::new();
        for (id, amount) in self.awards.iter().flat_map(|a| a.shares.iter()) {
            *totals.entry(*id).or_insert(0) += amount;
        }
        totals.into_iter().collect()
    }

    pub fn amount_won(&self, id: ContenderId) -> u32 {
        self.awards
            .iter()
            .flat_map(|a| a.shares.iter())
            .filter(|(winner, _)| *winner == id)
            .map(|(_, amount)| amount)
            .sum()
    }

    pub fn total(&self) -> u64 {
        self.awards.iter().map(|a| u64::from(a.amount)).sum()
    }

    pub fn went_to_showdown(&self) -> bool {
        !self.hands.is_empty()
    }
}

/// Pays every pot to the best eligible hand.
///
/// `seat_order` lists contenders clockwise starting at the button; a split
/// pot's odd chips go to the tied winner that appears first in it.
///
/// # Errors
///
/// [`GameError::InsufficientCards`] if two or more contenders are still in
/// but the board is not complete.
pub fn settle(
    pots: &[Pot],
    board: &[Card],
    contenders: &[Contender],
    seat_order: &[ContenderId],
) -> Result<Settlement, GameError> {
    let live: Vec<&Contender> = contenders.iter().filter(|c| c.in_hand()).collect();
    let mut settlement = Settlement::default();

    if let [only] = live.as_slice() {
        for (pot_index, pot) in pots.iter().enumerate() {
            settlement.awards.push(PotAward {
                pot_index,
                amount: pot.amount,
                shares: vec![(only.id(), pot.amount)],
            });
        }
        return Ok(settlement);
    }

    for c in &live {
        let eval = evaluate_holding(&c.dealt_cards(), board)?;
        settlement.hands.insert(c.id(), eval);
    }

    for (pot_index, pot) in pots.iter().enumerate() {
        let mut candidates: Vec<ContenderId> = pot
            .eligible
            .iter()
            .copied()
            .filter(|id| settlement.hands.contains_key(id))
            .collect();
        if candidates.is_empty() {
            candidates = settlement.hands.keys().copied().collect();
        }
        let Some(best) = candidates.iter().filter_map(|id| settlement.hands.get(id)).max() else {
            continue;
        };
        let mut winners: Vec<ContenderId> = candidates
            .iter()
            .copied()
            .filter(|id| settlement.hands.get(id) == Some(best))
            .collect();
        winners.sort_by_key(|id| {
            seat_order
                .iter()
                .position(|seat| seat == id)
                .unwrap_or(usize::MAX)
        });
        settlement.awards.push(PotAward {
            pot_index,
            amount: pot.amount,
            shares: split(pot.amount, &winners),
        });
    }

    let paid: u64 = settlement.payouts().iter().map(|(_, a)| u64::from(*a)).sum();
    let pooled: u64 = pots.iter().map(|p| u64::from(p.amount)).sum();
    assert_eq!(paid, pooled, "settlement paid {paid} of {pooled}");
    Ok(settlement)
}

fn split(amount: u32, winners: &[ContenderId]) -> Vec<(ContenderId, u32)> {
    let n = winners.len() as u32;
    let share = amount / n;
    let odd = amount % n;
    winners
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, if i == 0 { share + odd } else { share }))
        .collect()
}
