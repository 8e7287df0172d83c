use std::time::Duration;

use serde::{Deserialize, Serialize};

/// House rules for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Smallest amount a raise may add on top of the call
    pub min_raise: u32,
    pub starting_stack: u32,
    /// Seconds a contender has to act before being folded; 0 disables the clock
    pub turn_seconds: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
            min_raise: 10,
            starting_stack: 1_000,
            turn_seconds: 30,
        }
    }
}

impl TableConfig {
    pub fn turn_limit(&self) -> Option<Duration> {
        (self.turn_seconds > 0).then(|| Duration::from_secs(self.turn_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: TableConfig = serde_json::from_str(r#"{"big_blind": 50}"#).unwrap();
        assert_eq!(cfg.big_blind, 50);
        assert_eq!(cfg.small_blind, 5);
        assert_eq!(cfg.turn_limit(), Some(Duration::from_secs(30)));
    }
}
