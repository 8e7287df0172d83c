//! Table session: seats, hand lifecycle and the single action entry point.
//!
//! Every change to a hand goes through [`GameSession::apply_action`] (or the
//! lifecycle calls around it). Rejected calls leave the session exactly as
//! it was.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::CardSource;
use crate::errors::GameError;
use crate::ledger::Ledger;
use crate::logger::{BetHistory, BetKind, BetRecord, HandRecord, ShowdownInfo};
use crate::phase::{can_transition_to, Phase};
use crate::player::{Contender, ContenderId, ContenderStatus, PlayerAction};
use crate::rules::{validate_action, ValidatedAction};
use crate::settlement::{settle, Settlement};
use crate::view::{OpponentView, PublicView};

/// Burns plus community cards for a full board.
const BOARD_DRAW: usize = 8;

/// What an accepted action led to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub record: BetRecord,
    /// Phase after the action and any street changes it caused
    pub phase: Phase,
    /// Present when this action ended the hand
    pub settlement: Option<Settlement>,
}

pub struct GameSession {
    config: TableConfig,
    phase: Phase,
    paused_from: Option<Phase>,
    /// Seats in clockwise order
    contenders: Vec<Contender>,
    next_id: u32,
    leaving: BTreeSet<ContenderId>,
    ledger: Ledger,
    board: Vec<Card>,
    source: Option<Box<dyn CardSource>>,
    button: usize,
    to_act: Option<usize>,
    acted: BTreeSet<ContenderId>,
    hand_number: u64,
    history: BetHistory,
    last_settlement: Option<Settlement>,
    turn_token: u64,
}

impl GameSession {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            phase: Phase::Menu,
            paused_from: None,
            contenders: Vec::new(),
            next_id: 0,
            leaving: BTreeSet::new(),
            ledger: Ledger::new([]),
            board: Vec::with_capacity(5),
            source: None,
            button: 0,
            to_act: None,
            acted: BTreeSet::new(),
            hand_number: 0,
            history: BetHistory::default(),
            last_settlement: None,
            turn_token: 0,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn contenders(&self) -> &[Contender] {
        &self.contenders
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn history(&self) -> &BetHistory {
        &self.history
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }

    /// Bumped on every accepted action and phase change.
    pub fn turn_token(&self) -> u64 {
        self.turn_token
    }

    pub fn contender(&self, id: ContenderId) -> Option<&Contender> {
        self.contenders.iter().find(|c| c.id() == id)
    }

    pub fn current_actor(&self) -> Option<ContenderId> {
        self.to_act.map(|i| self.contenders[i].id())
    }

    pub fn button(&self) -> Option<ContenderId> {
        (self.hand_number > 0)
            .then(|| self.contenders.get(self.button).map(Contender::id))
            .flatten()
    }

    pub fn hand_in_progress(&self) -> bool {
        self.phase.is_betting() || self.phase == Phase::Paused
    }

    /// Menu -> WaitingForPlayers.
    pub fn open_table(&mut self) -> Result<(), GameError> {
        self.transition(Phase::WaitingForPlayers)
    }

    /// WaitingForPlayers / GameOver -> Menu.
    pub fn return_to_menu(&mut self) -> Result<(), GameError> {
        self.transition(Phase::Menu)
    }

    /// Takes a seat at the end of the clockwise order.
    pub fn seat(&mut self, name: impl Into<String>, stack: u32) -> Result<ContenderId, GameError> {
        if self.hand_in_progress() {
            return Err(GameError::illegal("cannot take a seat during a hand"));
        }
        let seated: u64 = self.contenders.iter().map(|c| u64::from(c.stack())).sum();
        if seated + u64::from(stack) > u64::from(u32::MAX) {
            warn!(stack, seated, "table chip total would overflow");
            return Err(GameError::InvalidWager { amount: stack });
        }
        let id = ContenderId(self.next_id);
        self.next_id += 1;
        let contender = Contender::new(id, name, stack);
        info!(contender = %id, name = contender.name(), stack, "seated");
        self.contenders.push(contender);
        Ok(id)
    }

    /// Removes a seat. During a hand the contender folds now and the seat
    /// is released before the next hand.
    pub fn leave(&mut self, id: ContenderId) -> Result<(), GameError> {
        let idx = self.index_of(id)?;
        match self.phase {
            Phase::Paused => Err(GameError::illegal("table is paused")),
            p if p.is_betting() => {
                self.leaving.insert(id);
                if self.contenders[idx].in_hand() {
                    self.fold_out_of_turn(idx)?;
                }
                Ok(())
            }
            _ => {
                self.remove_seat(idx);
                Ok(())
            }
        }
    }

    /// Moves along the phase table. Refused moves change nothing.
    ///
    /// Crate-internal: outside callers change phase only through the
    /// lifecycle calls, which deal, settle or refund as the move requires.
    pub(crate) fn transition(&mut self, to: Phase) -> Result<(), GameError> {
        let from = self.phase;
        let allowed = can_transition_to(from, to)
            && (from != Phase::Paused || self.paused_from == Some(to));
        if !allowed {
            warn!(from = ?from, to = ?to, "illegal phase transition");
            return Err(GameError::IllegalTransition { from, to });
        }
        if to == Phase::Paused {
            self.paused_from = Some(from);
        } else if from == Phase::Paused {
            self.paused_from = None;
        }
        self.phase = to;
        self.turn_token += 1;
        debug!(from = from.label(), to = to.label(), "phase changed");
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), GameError> {
        self.transition(Phase::Paused)
    }

    /// Returns to the street that was paused.
    pub fn resume(&mut self) -> Result<(), GameError> {
        match self.paused_from {
            Some(street) => self.transition(street),
            None => Err(GameError::illegal("table is not paused")),
        }
    }

    /// Abandons the hand in progress and gives every chip back.
    pub fn abort(&mut self) -> Result<(), GameError> {
        if !self.phase.is_betting() {
            warn!(from = ?self.phase, "abort outside a betting street");
            return Err(GameError::IllegalTransition {
                from: self.phase,
                to: Phase::GameOver,
            });
        }
        for (id, amount) in self.ledger.refund_all() {
            if let Some(c) = self.contenders.iter_mut().find(|c| c.id() == id) {
                c.add_chips(amount);
            }
        }
        self.to_act = None;
        self.transition(Phase::GameOver)?;
        info!(hand = self.hand_number, "hand aborted, wagers refunded");
        Ok(())
    }

    /// Showdown -> GameOver.
    pub fn finish(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Showdown {
            warn!(from = ?self.phase, "finish outside showdown");
            return Err(GameError::IllegalTransition {
                from: self.phase,
                to: Phase::GameOver,
            });
        }
        self.transition(Phase::GameOver)
    }

    /// Deals a new hand from `source`: rotates the button, deals hole
    /// cards, posts blinds and opens preflop betting.
    ///
    /// Heads-up the button posts the small blind and acts first preflop.
    pub fn start_hand(&mut self, source: impl CardSource + 'static) -> Result<(), GameError> {
        if !matches!(
            self.phase,
            Phase::WaitingForPlayers | Phase::Showdown | Phase::GameOver
        ) {
            warn!(from = ?self.phase, "start_hand refused");
            return Err(GameError::IllegalTransition {
                from: self.phase,
                to: Phase::Preflop,
            });
        }
        let leaving: Vec<ContenderId> = std::mem::take(&mut self.leaving).into_iter().collect();
        for id in leaving {
            if let Ok(idx) = self.index_of(id) {
                self.remove_seat(idx);
            }
        }
        let available = self.contenders.iter().filter(|c| c.stack() > 0).count();
        if available < 2 {
            return Err(GameError::NotEnoughContenders { available });
        }
        if source.remaining() < available * 2 + BOARD_DRAW {
            return Err(GameError::DeckExhausted);
        }

        for c in &mut self.contenders {
            c.reset_for_hand();
        }
        self.button = if self.hand_number == 0 {
            self.next_seat(self.contenders.len() - 1, |c| c.stack() > 0)
        } else {
            self.next_seat(self.button, |c| c.stack() > 0)
        }
        .ok_or(GameError::NotEnoughContenders { available })?;
        self.hand_number += 1;
        self.ledger = Ledger::new(self.contenders.iter().filter(|c| c.in_hand()).map(Contender::id));
        self.board.clear();
        self.history.clear();
        self.acted.clear();
        self.last_settlement = None;
        self.to_act = None;
        self.source = Some(Box::new(source));

        for _ in 0..2 {
            let mut idx = self.button;
            for _ in 0..available {
                idx = self.next_seat(idx, Contender::in_hand).unwrap_or(idx);
                let card = self.draw()?;
                self.contenders[idx].give_card(card);
            }
        }

        self.transition(Phase::Preflop)?;
        info!(
            hand = self.hand_number,
            button = %self.contenders[self.button].id(),
            contenders = available,
            "hand started"
        );

        let sb = if available == 2 {
            self.button
        } else {
            self.next_seat(self.button, Contender::in_hand).unwrap_or(self.button)
        };
        let bb = self.next_seat(sb, Contender::in_hand).unwrap_or(sb);
        self.post_blind(sb, self.config.small_blind, BetKind::SmallBlind)?;
        self.post_blind(bb, self.config.big_blind, BetKind::BigBlind)?;

        if self.round_complete() {
            self.close_round()
        } else {
            self.to_act = self.next_seat(bb, Contender::is_active);
            Ok(())
        }
    }

    /// The one way to act at the table, for people, bots and timers alike.
    pub fn apply_action(
        &mut self,
        id: ContenderId,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        self.act(id, action, false)
    }

    /// Folds `id` because their clock ran out, but only if the turn the
    /// clock was armed for (`token`) is still the pending one.
    pub fn fold_on_timeout(
        &mut self,
        id: ContenderId,
        token: u64,
    ) -> Result<Option<ActionOutcome>, GameError> {
        if token != self.turn_token || self.current_actor() != Some(id) {
            debug!(contender = %id, token, "stale turn timer ignored");
            return Ok(None);
        }
        warn!(contender = %id, "turn timer expired, folding");
        self.act(id, PlayerAction::Fold, true).map(Some)
    }

    /// What `id` may see right now.
    pub fn public_view(&self, id: ContenderId) -> Result<PublicView, GameError> {
        let idx = self.index_of(id)?;
        let me = &self.contenders[idx];
        let opponents = self
            .contenders
            .iter()
            .filter(|c| c.id() != id)
            .map(|c| OpponentView {
                id: c.id(),
                name: c.name().to_string(),
                stack: c.stack(),
                status: c.status(),
                round_wager: self.ledger.round_wager(c.id()),
            })
            .collect();
        Ok(PublicView {
            contender: id,
            phase: self.phase,
            hole: me.dealt_cards(),
            board: self.board.clone(),
            stack: me.stack(),
            round_wager: self.ledger.round_wager(id),
            to_call: self.ledger.to_call(id).min(me.stack()),
            min_raise: self.config.min_raise,
            big_blind: self.config.big_blind,
            pot: self.ledger.total(),
            your_turn: self.to_act == Some(idx),
            opponents,
        })
    }

    /// Snapshot of the current hand for a hand-history sink.
    pub fn hand_record(&self, hand_id: String, seed: Option<u64>) -> HandRecord {
        let showdown = self
            .last_settlement
            .as_ref()
            .filter(|s| s.went_to_showdown())
            .map(|s| {
                let mut winners: Vec<ContenderId> =
                    s.awards.iter().flat_map(|a| a.winners()).collect();
                winners.sort();
                winners.dedup();
                let notes = s
                    .awards
                    .first()
                    .and_then(|a| a.shares.first())
                    .and_then(|(w, _)| s.hands.get(w))
                    .map(|h| h.rank.name().to_string());
                ShowdownInfo { winners, notes }
            });
        HandRecord {
            hand_id,
            seed,
            actions: self.history.records().to_vec(),
            board: self.board.clone(),
            payouts: self
                .last_settlement
                .as_ref()
                .map(Settlement::payouts)
                .unwrap_or_default(),
            ts: None,
            showdown,
        }
    }

    fn act(
        &mut self,
        id: ContenderId,
        action: PlayerAction,
        timed_out: bool,
    ) -> Result<ActionOutcome, GameError> {
        if self.phase == Phase::Paused {
            return Err(GameError::illegal("table is paused"));
        }
        if !self.phase.is_betting() {
            return Err(GameError::illegal(format!(
                "no betting during {}",
                self.phase.label()
            )));
        }
        let idx = self.index_of(id)?;
        if self.to_act != Some(idx) {
            return Err(GameError::illegal(format!("{id} is not to act")));
        }

        let stack = self.contenders[idx].stack();
        let round_max = self.ledger.round_max();
        let validated = validate_action(
            stack,
            self.ledger.round_wager(id),
            round_max,
            self.config.min_raise,
            action,
        )?;

        let street = self.phase;
        let (kind, amount) = match validated {
            ValidatedAction::Fold => {
                self.ledger.fold(id)?;
                self.contenders[idx].set_status(ContenderStatus::Folded);
                (BetKind::Fold, 0)
            }
            ValidatedAction::Check => (BetKind::Check, 0),
            ValidatedAction::Call(n) => {
                self.commit(idx, n, false)?;
                (BetKind::Call, n)
            }
            ValidatedAction::Raise { wager, .. } => {
                self.commit(idx, wager, false)?;
                self.acted.clear();
                (BetKind::Raise, wager)
            }
            ValidatedAction::AllIn(n) => {
                self.commit(idx, n, true)?;
                if self.ledger.round_wager(id) > round_max {
                    self.acted.clear();
                }
                (BetKind::AllIn, n)
            }
        };
        self.acted.insert(id);
        let record = BetRecord {
            contender: id,
            kind,
            amount,
            round: self.ledger.round(),
            phase: street,
            timed_out,
        };
        self.history.push(record.clone());
        self.turn_token += 1;
        debug!(contender = %id, action = ?kind, amount, phase = street.label(), "action accepted");

        self.progress(idx)?;
        let settlement = if self.phase == Phase::Showdown {
            self.last_settlement.clone()
        } else {
            None
        };
        Ok(ActionOutcome {
            record,
            phase: self.phase,
            settlement,
        })
    }

    fn commit(&mut self, idx: usize, amount: u32, all_in: bool) -> Result<(), GameError> {
        let id = self.contenders[idx].id();
        self.ledger.place_wager(id, amount, all_in)?;
        self.contenders[idx].take_chips(amount);
        if all_in {
            self.contenders[idx].set_status(ContenderStatus::AllIn);
        }
        Ok(())
    }

    fn post_blind(&mut self, idx: usize, blind: u32, kind: BetKind) -> Result<(), GameError> {
        let stack = self.contenders[idx].stack();
        let amount = blind.min(stack);
        if amount == 0 {
            return Ok(());
        }
        self.commit(idx, amount, amount == stack)?;
        self.history.push(BetRecord {
            contender: self.contenders[idx].id(),
            kind,
            amount,
            round: self.ledger.round(),
            phase: Phase::Preflop,
            timed_out: false,
        });
        Ok(())
    }

    fn fold_out_of_turn(&mut self, idx: usize) -> Result<(), GameError> {
        let id = self.contenders[idx].id();
        if self.to_act == Some(idx) {
            return self.act(id, PlayerAction::Fold, false).map(|_| ());
        }
        self.ledger.fold(id)?;
        self.contenders[idx].set_status(ContenderStatus::Folded);
        self.history.push(BetRecord {
            contender: id,
            kind: BetKind::Fold,
            amount: 0,
            round: self.ledger.round(),
            phase: self.phase,
            timed_out: false,
        });
        self.turn_token += 1;
        if self.live_count() <= 1 || self.round_complete() {
            let after = self.to_act.unwrap_or(idx);
            self.progress(after)
        } else {
            Ok(())
        }
    }

    /// Next actor, or the next street(s), or showdown.
    fn progress(&mut self, after: usize) -> Result<(), GameError> {
        if self.live_count() <= 1 {
            return self.showdown();
        }
        if self.round_complete() {
            self.close_round()
        } else {
            self.to_act = self.next_seat(after, Contender::is_active);
            Ok(())
        }
    }

    /// Round is over when chips are level and everybody still able to bet
    /// has acted since the last raise. A lone actor who is matched is done.
    fn round_complete(&self) -> bool {
        if !self.ledger.all_players_matched() {
            return false;
        }
        let able: Vec<ContenderId> = self
            .contenders
            .iter()
            .filter(|c| c.is_active())
            .map(Contender::id)
            .collect();
        able.len() <= 1 || able.iter().all(|id| self.acted.contains(id))
    }

    /// Deals streets until someone can bet again or the board is complete.
    fn close_round(&mut self) -> Result<(), GameError> {
        loop {
            let next = match self.phase.next_street() {
                Some(next) => next,
                None => return Ok(()),
            };
            if next == Phase::Showdown {
                return self.showdown();
            }
            self.ledger.start_new_round();
            self.acted.clear();
            self.deal_street(next)?;
            self.transition(next)?;
            let able = self.contenders.iter().filter(|c| c.is_active()).count();
            if able >= 2 {
                self.to_act = self.next_seat(self.button, Contender::is_active);
                return Ok(());
            }
            debug!(street = next.label(), "betting closed, running out the board");
        }
    }

    fn deal_street(&mut self, street: Phase) -> Result<(), GameError> {
        let want = street.board_size().saturating_sub(self.board.len());
        if let Some(source) = self.source.as_mut() {
            source.burn_card();
        }
        for _ in 0..want {
            let card = self.draw()?;
            self.board.push(card);
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.source
            .as_mut()
            .and_then(|s| s.deal_card())
            .ok_or(GameError::DeckExhausted)
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        self.to_act = None;
        let order: Vec<ContenderId> = (0..self.contenders.len())
            .map(|k| self.contenders[(self.button + k) % self.contenders.len()].id())
            .collect();
        let settlement = settle(self.ledger.pots(), &self.board, &self.contenders, &order)?;
        for (id, amount) in settlement.payouts() {
            if let Some(c) = self.contenders.iter_mut().find(|c| c.id() == id) {
                c.add_chips(amount);
            }
        }
        self.transition(Phase::Showdown)?;
        info!(
            hand = self.hand_number,
            pot = settlement.total(),
            payouts = ?settlement.payouts(),
            "hand settled"
        );
        self.last_settlement = Some(settlement);
        Ok(())
    }

    fn live_count(&self) -> usize {
        self.contenders.iter().filter(|c| c.in_hand()).count()
    }

    /// First seat clockwise after `from` that satisfies `pred`; `from`
    /// itself is checked last.
    fn next_seat(&self, from: usize, pred: impl Fn(&Contender) -> bool) -> Option<usize> {
        let n = self.contenders.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&i| pred(&self.contenders[i]))
    }

    fn index_of(&self, id: ContenderId) -> Result<usize, GameError> {
        self.contenders
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| {
                warn!(contender = %id, "unknown contender");
                GameError::UnknownContender(id)
            })
    }

    /// Drops a seat. If it held the button, the button moves back to the
    /// seat before it so the next rotation lands on the seat after it.
    fn remove_seat(&mut self, idx: usize) {
        let gone = self.contenders.remove(idx);
        let n = self.contenders.len();
        if n == 0 {
            self.button = 0;
        } else if idx == self.button {
            self.button = (idx + n - 1) % n;
        } else if idx < self.button {
            self.button -= 1;
        }
        info!(contender = %gone.id(), "left the table");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::Deck;

    fn table() -> (GameSession, ContenderId, ContenderId) {
        let mut s = GameSession::new(TableConfig::default());
        s.open_table().unwrap();
        let a = s.seat("alice", 1000).unwrap();
        let b = s.seat("bob", 1000).unwrap();
        (s, a, b)
    }

    #[test]
    fn heads_up_button_posts_small_blind_and_acts_first() {
        let (mut s, a, b) = table();
        s.start_hand(Deck::shuffled(7)).unwrap();
        assert_eq!(s.button(), Some(a));
        assert_eq!(s.current_actor(), Some(a));
        assert_eq!(s.ledger().round_wager(a), 5);
        assert_eq!(s.ledger().round_wager(b), 10);
        assert_eq!(s.phase(), Phase::Preflop);
    }

    #[test]
    fn rejected_action_leaves_state_alone() {
        let (mut s, a, b) = table();
        s.start_hand(Deck::shuffled(7)).unwrap();
        let token = s.turn_token();
        assert!(s.apply_action(b, PlayerAction::Check).is_err());
        assert!(s.apply_action(a, PlayerAction::Check).is_err());
        assert_eq!(s.turn_token(), token);
        assert_eq!(s.history().records().len(), 2);
        assert_eq!(s.current_actor(), Some(a));
    }

    #[test]
    fn fold_short_circuits_without_dealing() {
        let (mut s, a, b) = table();
        s.start_hand(Deck::shuffled(3)).unwrap();
        let out = s.apply_action(a, PlayerAction::Fold).unwrap();
        assert_eq!(out.phase, Phase::Showdown);
        assert!(s.board().is_empty());
        let settlement = out.settlement.unwrap();
        assert_eq!(settlement.payouts(), vec![(b, 15)]);
        assert_eq!(s.contender(b).unwrap().stack(), 1005);
    }

    #[test]
    fn stacked_deck_deals_left_of_button_first() {
        let (mut s, a, b) = table();
        let cards = parse_cards("2c 3c 4c 5c 6d 7d 8d 9d Td Jd Qd Kd").unwrap();
        s.start_hand(Deck::stacked(cards.clone())).unwrap();
        assert_eq!(s.contender(b).unwrap().dealt_cards(), vec![cards[0], cards[2]]);
        assert_eq!(s.contender(a).unwrap().dealt_cards(), vec![cards[1], cards[3]]);
    }

    #[test]
    fn button_seat_leaving_passes_the_button_on() {
        let mut s = GameSession::new(TableConfig::default());
        s.open_table().unwrap();
        let a = s.seat("alice", 1000).unwrap();
        let b = s.seat("bob", 1000).unwrap();
        let c = s.seat("carol", 1000).unwrap();
        s.start_hand(Deck::shuffled(11)).unwrap();
        assert_eq!(s.button(), Some(a));
        s.apply_action(a, PlayerAction::Fold).unwrap();
        s.apply_action(b, PlayerAction::Fold).unwrap();
        assert_eq!(s.phase(), Phase::Showdown);

        s.leave(a).unwrap();
        s.start_hand(Deck::shuffled(12)).unwrap();
        assert_eq!(s.button(), Some(b));
        s.apply_action(b, PlayerAction::Fold).unwrap();
        s.start_hand(Deck::shuffled(13)).unwrap();
        assert_eq!(s.button(), Some(c));
    }

    #[test]
    fn middle_seat_leaving_keeps_the_rotation() {
        let mut s = GameSession::new(TableConfig::default());
        s.open_table().unwrap();
        let a = s.seat("alice", 1000).unwrap();
        let b = s.seat("bob", 1000).unwrap();
        let c = s.seat("carol", 1000).unwrap();
        s.start_hand(Deck::shuffled(11)).unwrap();
        s.apply_action(a, PlayerAction::Fold).unwrap();
        s.apply_action(b, PlayerAction::Fold).unwrap();
        s.leave(b).unwrap();
        s.start_hand(Deck::shuffled(12)).unwrap();
        assert_eq!(s.button(), Some(c));
    }

    #[test]
    fn seat_refuses_a_table_total_past_u32() {
        let mut s = GameSession::new(TableConfig::default());
        s.open_table().unwrap();
        s.seat("alice", 3_000_000_000).unwrap();
        assert_eq!(
            s.seat("bob", 3_000_000_000),
            Err(GameError::InvalidWager {
                amount: 3_000_000_000
            })
        );
        assert_eq!(s.contenders().len(), 1);
        s.seat("bob", u32::MAX - 3_000_000_000).unwrap();
    }

    #[test]
    fn transition_follows_the_table_only() {
        let (mut s, _, _) = table();
        let token = s.turn_token();
        assert_eq!(
            s.transition(Phase::River),
            Err(GameError::IllegalTransition {
                from: Phase::WaitingForPlayers,
                to: Phase::River
            })
        );
        assert_eq!(s.turn_token(), token);
    }
}
