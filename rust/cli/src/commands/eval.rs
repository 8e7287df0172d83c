//! `eval`: classify a set of cards, optionally against a second set.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::io::Write;

use headsup_engine::cards::{parse_cards, Card, Rank};
use headsup_engine::hand::{compare, evaluate, HandEvaluation};

use crate::error::CliError;
use crate::formatters::format_cards;

/// Prints the best five-card rank of `cards` (5 to 7 cards). With
/// `against`, evaluates both sets and reports which one wins.
///
/// # Example
///
/// ```rust
/// use headsup_cli::commands::handle_eval_command;
///
/// let mut out = Vec::new();
/// handle_eval_command("As Ks Qs Js Ts", None, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
/// ```
pub fn handle_eval_command(
    cards: &str,
    against: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let first = parse_set(cards)?;
    let first_eval = evaluate(&first)?;
    writeln!(out, "{}: {}", format_cards(&first), describe(&first_eval))?;

    if let Some(other) = against {
        let second = parse_set(other)?;
        let second_eval = evaluate(&second)?;
        writeln!(out, "{}: {}", format_cards(&second), describe(&second_eval))?;
        let verdict = match compare(&first_eval, &second_eval) {
            Ordering::Greater => "first hand wins",
            Ordering::Less => "second hand wins",
            Ordering::Equal => "tie",
        };
        writeln!(out, "Result: {}", verdict)?;
    }
    Ok(())
}

fn parse_set(input: &str) -> Result<Vec<Card>, CliError> {
    let cards = parse_cards(input).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }
    Ok(cards)
}

fn describe(eval: &HandEvaluation) -> String {
    let kickers: Vec<&str> = eval
        .kickers
        .iter()
        .map(|&k| match k {
            1 => "A",
            k => Rank::from_u8(k).map(Rank::label).unwrap_or("?"),
        })
        .collect();
    format!("{} ({})", eval.rank.name(), kickers.join(" "))
}
