use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// A legal action with its chip delta resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips moved to match the round maximum
    Call(u32),
    /// Chips moved in total: the call plus the raise
    Raise { wager: u32, raise_by: u32 },
    /// Whole stack
    AllIn(u32),
}

impl ValidatedAction {
    /// Chips this action moves from the stack into the ledger.
    pub fn wager(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::AllIn(n) => n,
            ValidatedAction::Raise { wager, .. } => wager,
        }
    }
}

/// Validates a player action against stack size and the round's wagers.
///
/// # Arguments
///
/// * `stack` - Player's remaining chip stack
/// * `round_wager` - What the player already put in this round
/// * `round_max` - Largest round wager at the table
/// * `min_raise` - House minimum raise size
/// * `action` - The action the player wishes to perform
///
/// A call the stack cannot cover, or a raise that uses exactly the whole
/// stack, is reported as [`ValidatedAction::AllIn`].
///
/// # Errors
///
/// - [`GameError::IllegalAction`] - checking while owing chips, calling when
///   nothing is owed, a raise below the minimum or above the stack, or going
///   all-in with an empty stack
/// - [`GameError::InvalidWager`] - a raise of zero
///
/// # Examples
///
/// ```
/// use headsup_engine::rules::{validate_action, ValidatedAction};
/// use headsup_engine::player::PlayerAction;
///
/// // facing 50 more with 1000 behind
/// let result = validate_action(1000, 0, 50, 10, PlayerAction::Call);
/// assert_eq!(result, Ok(ValidatedAction::Call(50)));
///
/// let result = validate_action(1000, 0, 50, 10, PlayerAction::Raise(100));
/// assert_eq!(result, Ok(ValidatedAction::Raise { wager: 150, raise_by: 100 }));
/// ```
///
/// ```
/// use headsup_engine::rules::validate_action;
/// use headsup_engine::player::PlayerAction;
/// use headsup_engine::errors::GameError;
///
/// let result = validate_action(1000, 0, 50, 10, PlayerAction::Check);
/// assert!(matches!(result, Err(GameError::IllegalAction { .. })));
/// ```
pub fn validate_action(
    stack: u32,
    round_wager: u32,
    round_max: u32,
    min_raise: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = round_max.saturating_sub(round_wager);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::illegal(format!("cannot check, {to_call} to call")))
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(GameError::illegal("nothing to call"))
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(0) => Err(GameError::InvalidWager { amount: 0 }),
        A::Raise(amount) => {
            if amount < min_raise {
                return Err(GameError::illegal(format!(
                    "raise of {amount} is below the minimum of {min_raise}"
                )));
            }
            let wager = to_call.saturating_add(amount);
            if wager > stack {
                Err(GameError::illegal(format!(
                    "raise needs {wager} chips, stack is {stack}"
                )))
            } else if wager == stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise {
                    wager,
                    raise_by: amount,
                })
            }
        }
        A::AllIn => {
            if stack == 0 {
                Err(GameError::illegal("no chips left to go all-in"))
            } else {
                Ok(ValidatedAction::AllIn(stack))
            }
        }
    }
}
