//! Command handler modules for the `headsup` CLI.
//!
//! Every subcommand lives in its own file and exposes one
//! `handle_<name>_command` function that takes its output streams as
//! `&mut dyn Write` and reports failures as [`CliError`].

pub mod cfg;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use headsup_ai::ActionPolicy;
use headsup_engine::config::TableConfig;
use headsup_engine::player::{ContenderId, PlayerAction};
use headsup_engine::session::{ActionOutcome, GameSession};
use tracing::warn;

use crate::error::CliError;

/// Opens a table and seats `names` with the configured starting stack.
pub(crate) fn open_table(
    config: &TableConfig,
    names: &[&str],
) -> Result<(GameSession, Vec<ContenderId>), CliError> {
    let mut session = GameSession::new(config.clone());
    session.open_table()?;
    let ids = names
        .iter()
        .map(|name| session.seat(*name, config.starting_stack))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((session, ids))
}

/// Lets `bot` act for `actor`. A refused decision is replaced by a check
/// or call so a bot can never stall the hand.
pub(crate) fn apply_bot_action(
    session: &mut GameSession,
    bot: &mut dyn ActionPolicy,
    actor: ContenderId,
) -> Result<ActionOutcome, CliError> {
    let view = session.public_view(actor)?;
    let action = bot.decide(&view);
    match session.apply_action(actor, action) {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            warn!(bot = bot.name(), ?action, error = %e, "bot action refused");
            let passive = if view.can_check() {
                PlayerAction::Check
            } else {
                PlayerAction::Call
            };
            Ok(session.apply_action(actor, passive)?)
        }
    }
}

pub(crate) fn name_of(session: &GameSession, id: ContenderId) -> String {
    session
        .contender(id)
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| id.to_string())
}
