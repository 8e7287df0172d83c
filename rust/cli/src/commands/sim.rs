//! Simulation command handler.
//!
//! Runs the baseline bot against itself for N hands. Each hand is dealt
//! from `Deck::shuffled(seed + hand_index)`, so a run is reproducible from
//! its seed. When one bot busts, both are restacked at a fresh table and
//! the run continues. With `--output` every hand is written to a fresh
//! JSONL file as a `HandRecord`.
//!
//! # Examples
//!
//! ```no_run
//! use headsup_cli::commands::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command(1000, Some("data/sim.jsonl".to_string()), Some(42), &mut out, &mut err).unwrap();
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use headsup_ai::create_ai;
use headsup_engine::deck::Deck;
use headsup_engine::errors::GameError;
use headsup_engine::logger::{BetKind, HandLogger};
use tracing::{debug, info};

use crate::commands::{apply_bot_action, open_table};
use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

const NAMES: [&str; 2] = ["bot_a", "bot_b"];

/// Per-bot totals over a run.
#[derive(Debug, Default)]
struct Tally {
    hands_won: u64,
    net: i64,
    aggressive: usize,
    calls: usize,
}

impl Tally {
    fn aggression_factor(&self) -> Option<f64> {
        (self.calls > 0).then(|| self.aggressive as f64 / self.calls as f64)
    }
}

/// Handle the sim command.
///
/// * `hands` - Total number of hands to simulate (>= 1)
/// * `output` - JSONL file for hand records; parent directories are created
/// * `seed` - Base seed; falls back to the configured seed, then random
pub fn handle_sim_command(
    hands: u64,
    output: Option<String>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match output.as_ref().map(PathBuf::from) {
        Some(path) => {
            if let Err(e) = ensure_parent_dir(&path) {
                ui::write_error(err, &e)?;
                return Err(CliError::Io(std::io::Error::other(e)));
            }
            match HandLogger::create(&path) {
                Ok(l) => l,
                Err(e) => {
                    ui::write_error(err, &format!("Failed to open output file: {}", e))?;
                    return Err(CliError::Io(e));
                }
            }
        }
        None => HandLogger::detached(&Utc::now().format("%Y%m%d").to_string()),
    };

    let mut bot_a = create_ai("baseline", base_seed)
        .ok_or_else(|| CliError::Engine("baseline policy unavailable".to_string()))?;
    let mut bot_b = create_ai("baseline", base_seed.wrapping_add(1))
        .ok_or_else(|| CliError::Engine("baseline policy unavailable".to_string()))?;

    let (mut session, mut ids) = open_table(&cfg.table, &NAMES)?;
    let mut tallies: BTreeMap<&str, Tally> = NAMES.iter().map(|n| (*n, Tally::default())).collect();
    let mut restacks = 0u64;

    writeln!(out, "sim: hands={} seed={}", hands, base_seed)?;
    for i in 0..hands {
        let hand_seed = base_seed.wrapping_add(i);
        match session.start_hand(Deck::shuffled(hand_seed)) {
            Ok(()) => {}
            Err(GameError::NotEnoughContenders { .. }) => {
                debug!(hand = i, "a bot busted, restacking");
                restacks += 1;
                (session, ids) = open_table(&cfg.table, &NAMES)?;
                session.start_hand(Deck::shuffled(hand_seed))?;
            }
            Err(e) => return Err(e.into()),
        }
        // Blinds are already posted; add them back for the opening stacks.
        let before: Vec<i64> = ids
            .iter()
            .map(|id| {
                let stack = session.contender(*id).map_or(0, |c| c.stack());
                i64::from(stack) + session.history().total_by(*id) as i64
            })
            .collect();

        while let Some(actor) = session.current_actor() {
            let bot = if actor == ids[0] {
                bot_a.as_mut()
            } else {
                bot_b.as_mut()
            };
            apply_bot_action(&mut session, bot, actor)?;
        }

        let hand_id = logger.next_id();
        let record = session.hand_record(hand_id, Some(hand_seed));
        logger.write(&record)?;

        for (idx, id) in ids.iter().enumerate() {
            let tally = tallies.entry(NAMES[idx]).or_default();
            let after = session.contender(*id).map_or(0, |c| c.stack());
            tally.net += i64::from(after) - before[idx];
            if session.last_settlement().is_some_and(|s| s.amount_won(*id) > 0) {
                tally.hands_won += 1;
            }
            let history = session.history();
            tally.aggressive += history.count(*id, BetKind::Raise) + history.count(*id, BetKind::AllIn);
            tally.calls += history.count(*id, BetKind::Call);
        }
    }

    writeln!(out, "Simulated {} hands", hands)?;
    if restacks > 0 {
        writeln!(out, "Restacked {} time(s) after a bust", restacks)?;
    }
    for (name, tally) in &tallies {
        let af = tally
            .aggression_factor()
            .map_or_else(|| "n/a".to_string(), |af| format!("{:.2}", af));
        writeln!(
            out,
            "{}: won {} hands, net {:+}, aggression {}",
            name, tally.hands_won, tally.net, af
        )?;
    }
    if let Some(path) = output {
        writeln!(out, "Hand records written to {}", path)?;
    }
    info!(hands, seed = base_seed, restacks, "simulation finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hands_is_invalid() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(0, None, Some(1), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).unwrap().contains("hands must be >= 1"));
    }

    #[test]
    fn aggression_needs_a_call() {
        let t = Tally {
            aggressive: 3,
            ..Tally::default()
        };
        assert_eq!(t.aggression_factor(), None);
        let t = Tally {
            aggressive: 3,
            calls: 2,
            ..Tally::default()
        };
        assert_eq!(t.aggression_factor(), Some(1.5));
    }
}
