use headsup_engine::config::TableConfig;
use headsup_engine::deck::Deck;
use headsup_engine::errors::GameError;
use headsup_engine::logger::BetKind;
use headsup_engine::phase::Phase;
use headsup_engine::player::{ContenderId, ContenderStatus, PlayerAction};
use headsup_engine::session::GameSession;

fn heads_up() -> (GameSession, ContenderId, ContenderId) {
    let mut s = GameSession::new(TableConfig::default());
    s.open_table().unwrap();
    let a = s.seat("alice", 1000).unwrap();
    let b = s.seat("bob", 1000).unwrap();
    (s, a, b)
}

fn chips_on_table(s: &GameSession) -> u64 {
    let stacks: u64 = s.contenders().iter().map(|c| u64::from(c.stack())).sum();
    if s.hand_in_progress() {
        stacks + s.ledger().total()
    } else {
        stacks
    }
}

#[test]
fn streets_advance_and_big_blind_acts_first_postflop() {
    let (mut s, a, b) = heads_up();
    s.start_hand(Deck::shuffled(11)).unwrap();
    s.apply_action(a, PlayerAction::Call).unwrap();
    assert_eq!(s.phase(), Phase::Preflop, "big blind keeps the option");
    s.apply_action(b, PlayerAction::Check).unwrap();
    assert_eq!(s.phase(), Phase::Flop);
    assert_eq!(s.board().len(), 3);
    assert_eq!(s.current_actor(), Some(b));

    s.apply_action(b, PlayerAction::Check).unwrap();
    s.apply_action(a, PlayerAction::Check).unwrap();
    assert_eq!(s.phase(), Phase::Turn);
    assert_eq!(s.board().len(), 4);
    s.apply_action(b, PlayerAction::Check).unwrap();
    s.apply_action(a, PlayerAction::Check).unwrap();
    assert_eq!(s.phase(), Phase::River);
    s.apply_action(b, PlayerAction::Check).unwrap();
    let out = s.apply_action(a, PlayerAction::Check).unwrap();
    assert_eq!(out.phase, Phase::Showdown);
    assert!(out.settlement.is_some());
    assert_eq!(chips_on_table(&s), 2000);
}

#[test]
fn raise_reopens_the_action() {
    let (mut s, a, b) = heads_up();
    s.start_hand(Deck::shuffled(5)).unwrap();
    s.apply_action(a, PlayerAction::Call).unwrap();
    s.apply_action(b, PlayerAction::Check).unwrap();

    s.apply_action(b, PlayerAction::Raise(40)).unwrap();
    assert_eq!(s.current_actor(), Some(a));
    s.apply_action(a, PlayerAction::Raise(100)).unwrap();
    assert_eq!(s.phase(), Phase::Flop);
    assert_eq!(s.ledger().to_call(b), 100);
    s.apply_action(b, PlayerAction::Call).unwrap();
    assert_eq!(s.phase(), Phase::Turn);
    assert_eq!(s.ledger().total(), 20 + 40 + 140 + 100);
    assert_eq!(chips_on_table(&s), 2000);
}

#[test]
fn out_of_turn_and_unknown_contenders_are_rejected() {
    let (mut s, a, b) = heads_up();
    s.start_hand(Deck::shuffled(5)).unwrap();
    let err = s.apply_action(b, PlayerAction::Fold).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction { .. }));
    let ghost = ContenderId(99);
    assert_eq!(
        s.apply_action(ghost, PlayerAction::Fold),
        Err(GameError::UnknownContender(ghost))
    );
    assert_eq!(s.current_actor(), Some(a));
}

#[test]
fn actions_outside_a_betting_street_are_rejected() {
    let (mut s, a, _b) = heads_up();
    assert!(s.apply_action(a, PlayerAction::Check).is_err());
}

#[test]
fn all_in_and_call_run_out_the_board() {
    let (mut s, a, b) = heads_up();
    s.start_hand(Deck::shuffled(21)).unwrap();
    s.apply_action(a, PlayerAction::AllIn).unwrap();
    assert_eq!(s.contender(a).unwrap().status(), ContenderStatus::AllIn);
    let out = s.apply_action(b, PlayerAction::Call).unwrap();
    assert_eq!(out.phase, Phase::Showdown);
    assert_eq!(s.board().len(), 5);
    let settlement = out.settlement.unwrap();
    assert_eq!(settlement.total(), 2000);
    assert_eq!(chips_on_table(&s), 2000);
}

#[test]
fn history_records_blinds_and_actions() {
    let (mut s, a, b) = heads_up();
    s.start_hand(Deck::shuffled(2)).unwrap();
    s.apply_action(a, PlayerAction::Raise(20)).unwrap();
    s.apply_action(b, PlayerAction::Call).unwrap();

    let kinds: Vec<BetKind> = s.history().records().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![BetKind::SmallBlind, BetKind::BigBlind, BetKind::Raise, BetKind::Call]
    );
    assert_eq!(s.history().total_by(a), 30);
    assert_eq!(s.history().total_by(b), 30);
    assert_eq!(s.history().aggression_factor(b), Some(0.0));
}

#[test]
fn button_rotates_between_hands() {
    let (mut s, a, b) = heads_up();
    s.start_hand(Deck::shuffled(1)).unwrap();
    assert_eq!(s.button(), Some(a));
    s.apply_action(a, PlayerAction::Fold).unwrap();
    s.start_hand(Deck::shuffled(2)).unwrap();
    assert_eq!(s.button(), Some(b));
    assert_eq!(s.current_actor(), Some(b));
    assert_eq!(s.hand_number(), 2);
}

#[test]
fn busted_contender_ends_the_game() {
    let mut s = GameSession::new(TableConfig::default());
    s.open_table().unwrap();
    let a = s.seat("alice", 100).unwrap();
    let b = s.seat("bob", 1000).unwrap();
    // keep dealing until one stack is empty
    let mut seed = 0;
    while s.contenders().iter().all(|c| c.stack() > 0) {
        seed += 1;
        s.start_hand(Deck::shuffled(seed)).unwrap();
        s.apply_action(a, PlayerAction::AllIn).unwrap_or_else(|_| {
            // alice was the big blind this hand; bob shoves instead
            s.apply_action(b, PlayerAction::AllIn).unwrap()
        });
        while let Some(actor) = s.current_actor() {
            s.apply_action(actor, PlayerAction::Call).unwrap();
        }
        assert_eq!(chips_on_table(&s), 1100);
    }
    assert_eq!(
        s.start_hand(Deck::shuffled(999)),
        Err(GameError::NotEnoughContenders { available: 1 })
    );
}

#[test]
fn leaving_mid_hand_folds_and_frees_the_seat_later() {
    let (mut s, a, b) = heads_up();
    let c = s.seat("carol", 1000).unwrap();
    s.start_hand(Deck::shuffled(8)).unwrap();
    // carol is the big blind, alice is to act
    s.leave(c).unwrap();
    assert_eq!(s.contender(c).unwrap().status(), ContenderStatus::Folded);
    assert_eq!(s.current_actor(), Some(a));
    s.apply_action(a, PlayerAction::Fold).unwrap();
    assert_eq!(s.phase(), Phase::Showdown);
    assert_eq!(s.last_settlement().unwrap().payouts(), vec![(b, 15)]);

    s.start_hand(Deck::shuffled(9)).unwrap();
    assert!(s.contender(c).is_none());
    assert_eq!(s.contenders().len(), 2);
}

#[test]
fn start_hand_needs_enough_cards() {
    let (mut s, _a, _b) = heads_up();
    let short = Deck::stacked(Vec::new());
    assert_eq!(s.start_hand(short), Err(GameError::DeckExhausted));
    assert_eq!(s.phase(), Phase::WaitingForPlayers);
}
