//! UI helper functions for terminal output formatting.

use std::io::Write;

use headsup_engine::view::PublicView;

use crate::formatters::{format_board, format_cards};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prints what the acting contender may see before being prompted.
pub fn render_view(out: &mut dyn Write, name: &str, view: &PublicView) -> std::io::Result<()> {
    writeln!(
        out,
        "[{}] {} holds {} | board {} | pot {}",
        view.phase.label(),
        name,
        format_cards(&view.hole),
        format_board(&view.board),
        view.pot
    )?;
    writeln!(
        out,
        "  stack {} | to call {} | min raise {}",
        view.stack, view.to_call, view.min_raise
    )
}
