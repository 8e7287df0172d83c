//! # headsup CLI Library
//!
//! Terminal driver for the heads-up rules core: play against the baseline
//! bot, run bot-versus-bot simulations, classify hands and inspect the
//! resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand handler and
//! returns the process exit code. Output goes to the writers passed in, so
//! tests can capture it.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["headsup", "play", "--vs", "ai", "--hands", "10"];
//! let code = headsup_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the bot, or hot-seat with two humans
//! - `sim`: Bot-versus-bot hands with optional JSONL hand records
//! - `eval`: Classify 5 to 7 cards, optionally against a second set
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;
pub mod wallet;

use cli::{Commands, HeadsupCli};
use commands::{handle_cfg_command, handle_eval_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "cfg"];

/// Parses `args` and runs the chosen subcommand.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when a play session
/// was cut off mid-hand
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["headsup", "eval", "As Ks Qs Js Ts"];
/// let mut out = Vec::new();
/// let code = headsup_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HeadsupCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            vs,
            hands,
            seed,
            wallet,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(vs, hands, seed, wallet, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            output,
            seed,
        } => handle_sim_command(hands, output, seed, out, err),
        Commands::Eval { cards, against } => {
            handle_eval_command(&cards, against.as_deref(), out)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = writeln!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Help and version go to stdout with exit 0; anything else clap rejects
/// is printed with the command list and exits 2.
fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "headsup: heads-up Texas Hold'em").is_err()
                || writeln!(err, "Usage: headsup <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: headsup --help");
            exit_code::ERROR
        }
    }
}
