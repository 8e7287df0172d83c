use serde::{Deserialize, Serialize};

/// Table phase. The four betting streets sit between the bookkeeping
/// states that bracket a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Menu,
    WaitingForPlayers,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    GameOver,
    Paused,
}

impl Phase {
    pub fn is_betting(self) -> bool {
        matches!(self, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River)
    }

    /// The street that follows a betting street.
    pub fn next_street(self) -> Option<Phase> {
        match self {
            Phase::Preflop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River => Some(Phase::Showdown),
            _ => None,
        }
    }

    /// Community cards on the table once this street is reached.
    pub fn board_size(self) -> usize {
        match self {
            Phase::Flop => 3,
            Phase::Turn => 4,
            Phase::River | Phase::Showdown => 5,
            _ => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::WaitingForPlayers => "waiting",
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
            Phase::GameOver => "game over",
            Phase::Paused => "paused",
        }
    }
}

/// The fixed transition table. Anything not listed is refused.
///
/// `Paused -> street` is listed for every street; resuming into a street
/// other than the one paused from is refused by the session itself.
pub fn can_transition_to(from: Phase, to: Phase) -> bool {
    use Phase::*;
    match from {
        Menu => to == WaitingForPlayers,
        WaitingForPlayers => matches!(to, Preflop | Menu),
        Preflop => matches!(to, Flop | Showdown | GameOver | Paused),
        Flop => matches!(to, Turn | Showdown | GameOver | Paused),
        Turn => matches!(to, River | Showdown | GameOver | Paused),
        River => matches!(to, Showdown | GameOver | Paused),
        Showdown => matches!(to, GameOver | Preflop),
        GameOver => matches!(to, Menu | Preflop),
        Paused => to.is_betting(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 9] = [
        Phase::Menu,
        Phase::WaitingForPlayers,
        Phase::Preflop,
        Phase::Flop,
        Phase::Turn,
        Phase::River,
        Phase::Showdown,
        Phase::GameOver,
        Phase::Paused,
    ];

    #[test]
    fn streets_only_move_forward() {
        assert!(can_transition_to(Phase::Preflop, Phase::Flop));
        assert!(!can_transition_to(Phase::Flop, Phase::Preflop));
        assert!(!can_transition_to(Phase::Preflop, Phase::Turn));
        assert!(!can_transition_to(Phase::River, Phase::Flop));
    }

    #[test]
    fn every_street_can_pause_fold_out_or_abort() {
        for street in ALL.iter().copied().filter(|p| p.is_betting()) {
            assert!(can_transition_to(street, Phase::Paused));
            assert!(can_transition_to(street, Phase::Showdown));
            assert!(can_transition_to(street, Phase::GameOver));
            assert!(can_transition_to(Phase::Paused, street));
        }
    }

    #[test]
    fn no_self_loops() {
        for p in ALL {
            assert!(!can_transition_to(p, p), "{p:?} -> {p:?}");
        }
    }

    #[test]
    fn paused_never_resumes_into_bookkeeping_states() {
        for p in ALL.iter().copied().filter(|p| !p.is_betting()) {
            assert!(!can_transition_to(Phase::Paused, p));
        }
    }
}
