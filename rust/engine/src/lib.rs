//! # headsup-engine: Hold'em Rules Core
//!
//! Rules core for heads-up Texas Hold'em: hand classification, the betting
//! ledger with all-in side pots, and the phase state machine that decides
//! which action is legal when.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - `CardSource` trait and a seeded ChaCha20 deck
//! - [`hand`] - Hand evaluation and tie-break comparison
//! - [`ledger`] - Round wagers, contributions, main and side pots
//! - [`phase`] - Phase enum and the transition table
//! - [`rules`] - Action legality
//! - [`session`] - Hand lifecycle and the single action entry point
//! - [`settlement`] - Paying pots to the best eligible hands
//! - [`table`] - Shared session handle and the turn timer
//! - [`logger`] - Bet history and JSONL hand records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_engine::cards::parse_cards;
//! use headsup_engine::hand::{evaluate, HandRank};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let eval = evaluate(&cards).unwrap();
//! assert_eq!(eval.rank, HandRank::RoyalFlush);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use headsup_engine::config::TableConfig;
//! use headsup_engine::deck::Deck;
//! use headsup_engine::phase::Phase;
//! use headsup_engine::player::PlayerAction;
//! use headsup_engine::session::GameSession;
//!
//! let mut session = GameSession::new(TableConfig::default());
//! session.open_table().unwrap();
//! let alice = session.seat("alice", 1000).unwrap();
//! let _bob = session.seat("bob", 1000).unwrap();
//!
//! session.start_hand(Deck::shuffled(42)).unwrap();
//! // heads-up the button is the small blind and acts first
//! let outcome = session.apply_action(alice, PlayerAction::Fold).unwrap();
//! assert_eq!(outcome.phase, Phase::Showdown);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod ledger;
pub mod logger;
pub mod phase;
pub mod player;
pub mod rules;
pub mod session;
pub mod settlement;
pub mod table;
pub mod view;
