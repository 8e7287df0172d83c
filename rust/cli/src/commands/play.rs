//! # Play Command
//!
//! Hands at the terminal against the baseline bot (`--vs ai`) or with both
//! seats typed in (`--vs human`). Actions are read line by line from stdin:
//! `fold`, `check`, `call`, `raise N`, `allin`, or `q` to leave.
//!
//! With `--wallet PATH` the first seat buys in from a persistent
//! [`Wallet`] and every finished hand is booked against it.
//!
//! Quitting between prompts ends the session normally. If stdin closes in
//! the middle of a hand, the hand is aborted with every bet refunded and
//! the command reports an interruption.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;
use headsup_ai::{create_ai, ActionPolicy};
use headsup_engine::deck::Deck;
use headsup_engine::errors::GameError;
use headsup_engine::logger::HandLogger;
use headsup_engine::player::ContenderId;
use headsup_engine::session::GameSession;
use tracing::info;

use crate::cli::Vs;
use crate::commands::{apply_bot_action, name_of, open_table};
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_cards, format_record};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use crate::wallet::Wallet;

const PROMPT: &str = "Enter action (fold/check/call/raise N/allin/q): ";

/// How one hand at the prompt ended.
enum HandEnd {
    Settled,
    Quit,
    InputClosed,
}

/// Handle the play command.
///
/// * `hands` - Number of hands to play (must be >= 1, default: 1)
/// * `seed` - Deck and bot seed; falls back to the configured seed, then random
/// * `wallet` - Optional wallet file for the first seat
///
/// # Errors
///
/// `CliError::InvalidInput` for zero hands, `CliError::Wallet` when the
/// wallet cannot cover the buy-in, and `CliError::Interrupted` when stdin
/// closes in the middle of a hand.
pub fn handle_play_command(
    vs: Vs,
    hands: Option<u32>,
    seed: Option<u64>,
    wallet: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = hands.unwrap_or(1);
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let wallet_path = wallet.map(PathBuf::from);
    let mut wallet = match &wallet_path {
        Some(path) => {
            let w = Wallet::load_or_create(path, "you")?;
            let buy_in = u64::from(cfg.table.starting_stack);
            if !w.can_afford(buy_in) {
                ui::write_error(
                    err,
                    &format!("wallet balance {} is below the buy-in {}", w.balance(), buy_in),
                )?;
                return Err(CliError::Wallet(format!(
                    "balance {} is below the buy-in {}",
                    w.balance(),
                    buy_in
                )));
            }
            writeln!(out, "Wallet: {} has {}", w.owner(), w.balance())?;
            Some(w)
        }
        None => None,
    };

    let second = match vs {
        Vs::Ai => "bot",
        Vs::Human => "guest",
    };
    let (mut session, ids) = open_table(&cfg.table, &["you", second])?;
    let humans: Vec<ContenderId> = match vs {
        Vs::Ai => vec![ids[0]],
        Vs::Human => ids.clone(),
    };
    let mut bot = create_ai("baseline", seed)
        .ok_or_else(|| CliError::Engine("baseline policy unavailable".to_string()))?;
    let mut ids_for_hands = HandLogger::detached(&Utc::now().format("%Y%m%d").to_string());

    writeln!(out, "play: vs={} hands={} seed={}", vs.as_str(), hands, seed)?;
    writeln!(
        out,
        "Blinds: SB={} BB={}",
        cfg.table.small_blind, cfg.table.big_blind
    )?;

    let mut played = 0u32;
    let mut outcome = Ok(());
    for i in 1..=hands {
        match session.start_hand(Deck::shuffled(seed.wrapping_add(u64::from(i)))) {
            Ok(()) => {}
            Err(GameError::NotEnoughContenders { .. }) => {
                writeln!(out, "Only one player has chips left.")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        let hand_id = ids_for_hands.next_id();
        writeln!(out, "Hand {} ({})", i, hand_id)?;
        for record in session.history().records() {
            writeln!(out, "{}: {}", name_of(&session, record.contender), format_record(record))?;
        }

        match play_hand(&mut session, &humans, bot.as_mut(), out, err, stdin)? {
            HandEnd::Settled => {
                played += 1;
                report_hand(&session, out)?;
                if let Some(w) = wallet.as_mut() {
                    let you = ids[0];
                    let wagered = session.history().total_by(you);
                    let won = session
                        .last_settlement()
                        .map(|s| u64::from(s.amount_won(you)))
                        .unwrap_or(0);
                    w.settle_hand(&hand_id, wagered, won)?;
                }
            }
            HandEnd::Quit => {
                abandon_hand(&mut session, out)?;
                break;
            }
            HandEnd::InputClosed => {
                abandon_hand(&mut session, out)?;
                outcome = Err(CliError::Interrupted(format!(
                    "input closed during hand {}",
                    i
                )));
                break;
            }
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    if let (Some(w), Some(path)) = (wallet.as_ref(), wallet_path.as_ref()) {
        w.save(path)?;
        writeln!(
            out,
            "Wallet: balance {} net {} win rate {:.1}%",
            w.balance(),
            w.net_profit(),
            w.win_rate()
        )?;
    }
    info!(played, seed, "play session finished");
    outcome
}

fn play_hand(
    session: &mut GameSession,
    humans: &[ContenderId],
    bot: &mut dyn ActionPolicy,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<HandEnd, CliError> {
    while let Some(actor) = session.current_actor() {
        let name = name_of(session, actor);
        let outcome = if humans.contains(&actor) {
            ui::render_view(out, &name, &session.public_view(actor)?)?;
            write!(out, "{}", PROMPT)?;
            out.flush()?;
            let Some(line) = read_stdin_line(stdin) else {
                return Ok(HandEnd::InputClosed);
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => match session.apply_action(actor, action) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        ui::write_error(err, &format!("Invalid action: {}", e))?;
                        continue;
                    }
                },
                ParseResult::Quit => return Ok(HandEnd::Quit),
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
            }
        } else {
            apply_bot_action(session, bot, actor)?
        };
        writeln!(out, "{}: {}", name, format_record(&outcome.record))?;
    }
    Ok(HandEnd::Settled)
}

fn report_hand(session: &GameSession, out: &mut dyn Write) -> Result<(), CliError> {
    let Some(settlement) = session.last_settlement() else {
        return Ok(());
    };
    writeln!(out, "Board: {}", format_board(session.board()))?;
    if settlement.went_to_showdown() {
        for (id, hand) in &settlement.hands {
            let cards = session
                .contender(*id)
                .map(|c| c.dealt_cards())
                .unwrap_or_default();
            writeln!(
                out,
                "{} shows {}: {}",
                name_of(session, *id),
                format_cards(&cards),
                hand.rank.name()
            )?;
        }
    }
    for award in &settlement.awards {
        let winners: Vec<String> = award
            .shares
            .iter()
            .map(|(id, share)| format!("{} {}", name_of(session, *id), share))
            .collect();
        let label = if award.pot_index == 0 {
            "Main pot".to_string()
        } else {
            format!("Side pot {}", award.pot_index)
        };
        let split = if award.is_split() { " (split)" } else { "" };
        writeln!(out, "{} {}: {}{}", label, award.amount, winners.join(", "), split)?;
    }
    let stacks: Vec<String> = session
        .contenders()
        .iter()
        .map(|c| format!("{} {}", c.name(), c.stack()))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(", "))?;
    Ok(())
}

fn abandon_hand(session: &mut GameSession, out: &mut dyn Write) -> Result<(), CliError> {
    if session.hand_in_progress() {
        session.abort()?;
        writeln!(out, "Hand abandoned, bets refunded.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(vs: Vs, hands: u32, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            vs,
            Some(hands),
            Some(42),
            None,
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn zero_hands_is_invalid() {
        let (result, _, _) = play(Vs::Ai, 0, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn quitting_at_the_first_prompt_refunds() {
        let (result, out, _) = play(Vs::Human, 1, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("vs=human"));
        assert!(out.contains("Hand abandoned, bets refunded."));
        assert!(out.contains("Hands played: 0"));
    }

    #[test]
    fn folding_settles_the_hand() {
        let (result, out, _) = play(Vs::Human, 1, "fold\n");
        assert!(result.is_ok());
        assert!(out.contains("folds"));
        assert!(out.contains("Main pot 15"));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn garbage_is_reported_and_reprompted() {
        let (result, out, err) = play(Vs::Human, 1, "dance\nfold\n");
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized action 'dance'"));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn closed_input_mid_hand_is_an_interruption() {
        let (result, out, _) = play(Vs::Human, 1, "");
        assert!(matches!(result, Err(CliError::Interrupted(_))));
        assert!(out.contains("Hand abandoned"));
    }
}
