use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::phase::Phase;
use crate::player::ContenderId;

/// What an accepted bet-history entry did.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetKind {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

/// Records a single accepted action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    pub contender: ContenderId,
    pub kind: BetKind,
    /// Chips moved by this action (0 for fold/check)
    pub amount: u32,
    /// Ledger round the action belongs to
    pub round: u32,
    pub phase: Phase,
    /// Set when the action was synthesized by the turn clock
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub timed_out: bool,
}

/// Append-only action log for the current hand.
#[derive(Debug, Clone, Default)]
pub struct BetHistory {
    records: Vec<BetRecord>,
}

impl BetHistory {
    pub fn push(&mut self, record: BetRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[BetRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn for_contender(&self, id: ContenderId) -> impl Iterator<Item = &BetRecord> {
        self.records.iter().filter(move |r| r.contender == id)
    }

    pub fn for_round(&self, round: u32) -> impl Iterator<Item = &BetRecord> {
        self.records.iter().filter(move |r| r.round == round)
    }

    pub fn total_by(&self, id: ContenderId) -> u64 {
        self.for_contender(id).map(|r| u64::from(r.amount)).sum()
    }

    pub fn total_in_round(&self, round: u32) -> u64 {
        self.for_round(round).map(|r| u64::from(r.amount)).sum()
    }

    pub fn count(&self, id: ContenderId, kind: BetKind) -> usize {
        self.for_contender(id).filter(|r| r.kind == kind).count()
    }

    /// (raises + all-ins) / calls; `None` before the contender has called.
    pub fn aggression_factor(&self, id: ContenderId) -> Option<f64> {
        let aggressive = self.count(id, BetKind::Raise) + self.count(id, BetKind::AllIn);
        let calls = self.count(id, BetKind::Call);
        (calls > 0).then(|| aggressive as f64 / calls as f64)
    }
}

/// One finished hand as written to the JSONL history, one object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// `YYYYMMDD-NNNNNN`, sequential within a logger
    pub hand_id: String,
    /// Deck seed, when the deck was shuffled from one
    pub seed: Option<u64>,
    pub actions: Vec<BetRecord>,
    pub board: Vec<Card>,
    /// `(contender, amount won)` pairs
    #[serde(default)]
    pub payouts: Vec<(ContenderId, u32)>,
    /// RFC3339, filled in by [`HandLogger::write`] when absent
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

/// Who took chips at showdown, with a short free-form note.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<ContenderId>,
    #[serde(default)]
    pub notes: Option<String>,
}

pub fn format_hand_id(date: &str, seq: u32) -> String {
    format!("{date}-{seq:06}")
}

/// Hands out hand ids and, when backed by a file, appends each record as
/// a JSON line.
pub struct HandLogger {
    sink: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
            _ => {}
        }
        Ok(Self {
            sink: Some(BufWriter::new(File::create(path)?)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that only hands out ids; nothing is written.
    pub fn detached(date: &str) -> Self {
        Self {
            sink: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> io::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let mut stamped = record.clone();
        stamped
            .ts
            .get_or_insert_with(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        serde_json::to_writer(&mut *sink, &stamped).map_err(io::Error::other)?;
        sink.write_all(b"\n")?;
        sink.flush()
    }
}
