//! # headsup-ai: Bot Opponents
//!
//! Decision policies that drive a seat at a [`GameSession`] table. A policy
//! only ever sees a [`PublicView`], so it cannot peek at the opponent's hole
//! cards, and its answer still goes through the session's legality checks.
//!
//! ## Core Components
//!
//! - [`ActionPolicy`] - Trait every bot implements
//! - [`baseline`] - Strength-threshold bot with seeded randomness
//! - [`create_ai`] - Factory for policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_ai::create_ai;
//! use headsup_engine::config::TableConfig;
//! use headsup_engine::deck::Deck;
//! use headsup_engine::session::GameSession;
//!
//! let mut session = GameSession::new(TableConfig::default());
//! session.open_table().unwrap();
//! session.seat("alice", 1000).unwrap();
//! session.seat("bot", 1000).unwrap();
//! session.start_hand(Deck::shuffled(42)).unwrap();
//!
//! let mut bot = create_ai("baseline", 7).expect("known policy");
//! let actor = session.current_actor().unwrap();
//! let action = bot.decide(&session.public_view(actor).unwrap());
//! assert!(session.apply_action(actor, action).is_ok());
//! ```
//!
//! [`GameSession`]: headsup_engine::session::GameSession

use headsup_engine::player::PlayerAction;
use headsup_engine::view::PublicView;

pub mod baseline;

/// Picks an action for the contender a [`PublicView`] belongs to.
///
/// # Example Implementation
///
/// ```rust
/// use headsup_ai::ActionPolicy;
/// use headsup_engine::player::PlayerAction;
/// use headsup_engine::view::PublicView;
///
/// struct CallingStation;
///
/// impl ActionPolicy for CallingStation {
///     fn decide(&mut self, view: &PublicView) -> PlayerAction {
///         if view.can_check() { PlayerAction::Check } else { PlayerAction::Call }
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait ActionPolicy: Send {
    /// Chooses the next action. The session still validates it.
    fn decide(&mut self, view: &PublicView) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Builds a policy by name; `None` for names nobody registered.
///
/// # Example
///
/// ```rust
/// use headsup_ai::create_ai;
///
/// let ai = create_ai("baseline", 1).unwrap();
/// assert_eq!(ai.name(), "BaselineBot");
/// assert!(create_ai("oracle", 1).is_none());
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Option<Box<dyn ActionPolicy>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineBot::with_seed(seed))),
        _ => None,
    }
}
