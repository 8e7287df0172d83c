//! Command-line surface of the `headsup` binary.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "headsup",
    version,
    about = "Heads-up Texas Hold'em at the terminal"
)]
pub struct HeadsupCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against a bot, reading actions from stdin
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Ai)]
        vs: Vs,
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Wallet file to buy in from and cash out to
        #[arg(long)]
        wallet: Option<String>,
    },
    /// Run bot-versus-bot hands, optionally writing JSONL hand records
    Sim {
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify a set of 5 to 7 cards, e.g. "As Ks Qs Js Ts"
    Eval {
        cards: String,
        /// Second set to compare against
        #[arg(long)]
        against: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Who sits in the second seat of a `play` session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// The baseline bot decides for the second seat
    Ai,
    /// Both seats are read from stdin
    Human,
}

impl Vs {
    /// # Examples
    ///
    /// ```
    /// # use headsup_cli::cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Ai => "ai",
            Vs::Human => "human",
        }
    }
}
