//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, one `{value, source}` pair per
//! setting, where `source` is `default`, `file` or `env`:
//!
//! ```json
//! {
//!   "starting_stack": {
//!     "value": 1000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// # Errors
///
/// Returns `CliError::Config` if the file or environment holds an invalid
/// value, `CliError::Io` if writing to `out` fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let table = &config.table;
    let display = serde_json::json!({
        "small_blind": {
            "value": table.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": table.big_blind,
            "source": sources.big_blind,
        },
        "min_raise": {
            "value": table.min_raise,
            "source": sources.min_raise,
        },
        "starting_stack": {
            "value": table.starting_stack,
            "source": sources.starting_stack,
        },
        "turn_seconds": {
            "value": table.turn_seconds,
            "source": sources.turn_seconds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
