//! Card, board, and action formatters for terminal display.
//!
//! Suits print as ♥ ♦ ♣ ♠ where the terminal can show them and fall back to
//! h d c s elsewhere (older Windows consoles).
//!
//! ## Example
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use headsup_engine::cards::{Card, Suit};
use headsup_engine::logger::{BetKind, BetRecord};
use headsup_engine::player::PlayerAction;

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix terminals are assumed
/// to cope.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(card.suit))
}

/// Space-separated cards, or `--` when there are none.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "--".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// `[As Kd 7c]`, `[]` before the flop.
pub fn format_board(board: &[Card]) -> String {
    let cards: Vec<String> = board.iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

/// # Example
///
/// ```rust
/// use headsup_engine::player::PlayerAction;
/// # use headsup_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Raise(40)), "raise 40");
/// assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Raise(amount) => format!("raise {}", amount),
        other => other.label().to_string(),
    }
}

/// One line of hand history, e.g. `posts big blind 10` or `calls 40`.
/// Amounts are the chips that action moved, not the round total.
pub fn format_record(record: &BetRecord) -> String {
    let verb = match record.kind {
        BetKind::SmallBlind => "posts small blind",
        BetKind::BigBlind => "posts big blind",
        BetKind::Fold => "folds",
        BetKind::Check => "checks",
        BetKind::Call => "calls",
        BetKind::Raise => "raises, putting in",
        BetKind::AllIn => "goes all-in for",
    };
    let suffix = if record.timed_out { " (timed out)" } else { "" };
    match record.kind {
        BetKind::Fold | BetKind::Check => format!("{}{}", verb, suffix),
        _ => format!("{} {}{}", verb, record.amount, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::cards::Rank;

    #[test]
    fn suits_render_as_symbol_or_letter() {
        let hearts = format_suit(Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn ten_prints_as_t() {
        let card = Card::new(Rank::Ten, Suit::Clubs);
        assert!(format_card(&card).starts_with('T'));
    }

    #[test]
    fn empty_hands_and_boards() {
        assert_eq!(format_cards(&[]), "--");
        assert_eq!(format_board(&[]), "[]");
    }
}
