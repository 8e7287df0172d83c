//! Parsing of actions typed at the `play` prompt.

use headsup_engine::player::PlayerAction;

/// Outcome of reading one prompt line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    /// Anything else, with a message for the user
    Invalid(String),
}

/// Accepts (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check
/// - "call" → Call
/// - "raise X" or "r X" → Raise by X on top of the call
/// - "allin", "all-in" or "shove" → All-in
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use headsup_cli::validation::{parse_player_action, ParseResult};
/// use headsup_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("raise 40"),
///     ParseResult::Action(PlayerAction::Raise(40))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" | "shove" => ParseResult::Action(PlayerAction::AllIn),
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 50')".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, allin, q",
            verb
        )),
    }
}
