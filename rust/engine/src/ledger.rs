//! Betting ledger: per-round wagers, per-hand contributions and pots.
//!
//! Pots are never edited piecemeal. Every mutation funnels into
//! [`Ledger::restructure`], which rebuilds the main/side pot chain from the
//! contributions and the registered all-in caps, so the sum of the pots is
//! always the sum of everything wagered.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::ContenderId;

/// A pot and the contenders allowed to win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    pub eligible: BTreeSet<ContenderId>,
    /// Contribution level that closes this pot; `None` for the open outer pot.
    pub cap: Option<u32>,
}

impl Pot {
    pub fn is_eligible(&self, id: ContenderId) -> bool {
        self.eligible.contains(&id)
    }
}

#[derive(Debug, Clone)]
pub struct Ledger {
    participants: BTreeSet<ContenderId>,
    round_wagers: BTreeMap<ContenderId, u32>,
    contributions: BTreeMap<ContenderId, u32>,
    folded: BTreeSet<ContenderId>,
    all_in_caps: BTreeMap<ContenderId, u32>,
    round_max: u32,
    round: u32,
    wagered: u64,
    pots: Vec<Pot>,
}

impl Ledger {
    pub fn new(participants: impl IntoIterator<Item = ContenderId>) -> Self {
        let participants: BTreeSet<ContenderId> = participants.into_iter().collect();
        let mut ledger = Self {
            participants,
            round_wagers: BTreeMap::new(),
            contributions: BTreeMap::new(),
            folded: BTreeSet::new(),
            all_in_caps: BTreeMap::new(),
            round_max: 0,
            round: 0,
            wagered: 0,
            pots: Vec::new(),
        };
        ledger.restructure();
        ledger
    }

    /// Records `amount` more chips from `id` in the current round.
    ///
    /// An all-in wager registers the contender's total contribution as a
    /// cap via [`Ledger::create_side_pot`].
    pub fn place_wager(
        &mut self,
        id: ContenderId,
        amount: u32,
        is_all_in: bool,
    ) -> Result<(), GameError> {
        self.ensure_participant(id)?;
        if amount == 0 {
            return Err(GameError::InvalidWager { amount });
        }
        if self.folded.contains(&id) {
            return Err(GameError::illegal(format!("{id} has folded")));
        }
        if self.all_in_caps.contains_key(&id) {
            return Err(GameError::illegal(format!("{id} is already all-in")));
        }
        // Pot amounts are u32; the whole hand must fit in one.
        if self.wagered + u64::from(amount) > u64::from(u32::MAX) {
            return Err(GameError::InvalidWager { amount });
        }

        let round_wager = self.round_wagers.entry(id).or_insert(0);
        *round_wager += amount;
        let round_wager = *round_wager;
        let contribution = self.contributions.entry(id).or_insert(0);
        *contribution += amount;
        let contribution = *contribution;
        self.wagered += u64::from(amount);
        self.round_max = self.round_max.max(round_wager);

        if is_all_in {
            self.create_side_pot(id, contribution)
        } else {
            self.restructure();
            Ok(())
        }
    }

    /// Removes `id` from pot eligibility. Chips already in stay in.
    pub fn fold(&mut self, id: ContenderId) -> Result<(), GameError> {
        self.ensure_participant(id)?;
        self.folded.insert(id);
        self.restructure();
        Ok(())
    }

    /// Caps `id` at `all_in_amount` total chips for the hand and rebuilds
    /// the pot chain: whatever others put in above the cap moves to a side
    /// pot that `id` cannot win.
    pub fn create_side_pot(&mut self, id: ContenderId, all_in_amount: u32) -> Result<(), GameError> {
        self.ensure_participant(id)?;
        if all_in_amount == 0 || all_in_amount > self.contribution(id) {
            return Err(GameError::InvalidWager {
                amount: all_in_amount,
            });
        }
        self.all_in_caps.insert(id, all_in_amount);
        self.restructure();
        Ok(())
    }

    /// True when the betting round can close on chips alone: at most one
    /// contender is left in the hand, or everyone still able to bet has put
    /// in the round maximum.
    pub fn all_players_matched(&self) -> bool {
        let in_hand: Vec<ContenderId> = self
            .participants
            .iter()
            .copied()
            .filter(|id| !self.folded.contains(id))
            .collect();
        if in_hand.len() <= 1 {
            return true;
        }
        in_hand
            .iter()
            .filter(|id| !self.all_in_caps.contains_key(id))
            .all(|id| self.round_wager(*id) >= self.round_max)
    }

    /// Closes the round. Pots carry over, round wagers start from zero.
    pub fn start_new_round(&mut self) {
        self.round_wagers.clear();
        self.round_max = 0;
        self.round += 1;
    }

    /// Returns every contribution and empties the pots (aborted hand).
    pub fn refund_all(&mut self) -> Vec<(ContenderId, u32)> {
        let refunds: Vec<(ContenderId, u32)> = self
            .contributions
            .iter()
            .filter(|(_, amount)| **amount > 0)
            .map(|(id, amount)| (*id, *amount))
            .collect();
        self.contributions.clear();
        self.all_in_caps.clear();
        self.round_wagers.clear();
        self.round_max = 0;
        self.wagered = 0;
        self.restructure();
        refunds
    }

    pub fn round_wager(&self, id: ContenderId) -> u32 {
        self.round_wagers.get(&id).copied().unwrap_or(0)
    }

    pub fn contribution(&self, id: ContenderId) -> u32 {
        self.contributions.get(&id).copied().unwrap_or(0)
    }

    pub fn to_call(&self, id: ContenderId) -> u32 {
        self.round_max.saturating_sub(self.round_wager(id))
    }

    pub fn round_max(&self) -> u32 {
        self.round_max
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_folded(&self, id: ContenderId) -> bool {
        self.folded.contains(&id)
    }

    pub fn all_in_cap(&self, id: ContenderId) -> Option<u32> {
        self.all_in_caps.get(&id).copied()
    }

    /// Main pot first, then side pots by ascending cap.
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn main_pot(&self) -> u32 {
        self.pots.first().map_or(0, |p| p.amount)
    }

    pub fn side_pots(&self) -> &[Pot] {
        self.pots.get(1..).unwrap_or(&[])
    }

    /// Chips across all pots.
    pub fn total(&self) -> u64 {
        self.pots.iter().map(|p| u64::from(p.amount)).sum()
    }

    /// Sum of every amount passed to [`Ledger::place_wager`].
    pub fn wagered_total(&self) -> u64 {
        self.wagered
    }

    fn ensure_participant(&self, id: ContenderId) -> Result<(), GameError> {
        if self.participants.contains(&id) {
            Ok(())
        } else {
            Err(GameError::UnknownContender(id))
        }
    }

    /// Rebuilds pots as layers bounded by the distinct all-in caps.
    fn restructure(&mut self) {
        let mut caps: Vec<u32> = self.all_in_caps.values().copied().collect();
        caps.sort_unstable();
        caps.dedup();

        let mut pots: Vec<Pot> = Vec::with_capacity(caps.len() + 1);
        let mut floor = 0u32;
        let levels = caps.iter().copied().map(Some).chain(std::iter::once(None));
        for ceil in levels {
            let amount: u32 = self
                .contributions
                .values()
                .map(|&c| ceil.map_or(c, |top| c.min(top)) - c.min(floor))
                .sum();
            let eligible: BTreeSet<ContenderId> = self
                .participants
                .iter()
                .copied()
                .filter(|id| !self.folded.contains(id))
                .filter(|id| match (self.all_in_caps.get(id), ceil) {
                    (None, _) => true,
                    (Some(cap), Some(top)) => *cap >= top,
                    (Some(_), None) => false,
                })
                .collect();

            if ceil.is_none() && amount == 0 && !pots.is_empty() {
                break;
            }
            match pots.last_mut() {
                // nobody left to win this layer; it folds into the pot below
                Some(prev) if eligible.is_empty() => prev.amount += amount,
                _ => pots.push(Pot {
                    amount,
                    eligible,
                    cap: ceil,
                }),
            }
            if let Some(top) = ceil {
                floor = top;
            }
        }
        self.pots = pots;
        self.assert_conserved();
    }

    fn assert_conserved(&self) {
        // A mismatch here is a ledger bug, not a caller error.
        assert_eq!(
            self.total(),
            self.wagered,
            "chip conservation violated: pots {:?}",
            self.pots
        );
    }
}
