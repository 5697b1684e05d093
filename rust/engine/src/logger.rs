use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::poker::RoundOutcome;
use crate::yahtzee::YahtzeeRound;

/// Which simulation produced a record.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Poker,
    Yahtzee,
}

/// One player's line in a round record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub player: String,
    /// Cards or dice shown, bottom to top
    pub symbols: Vec<String>,
    /// Poker category or the dice box that was filled
    pub category: String,
    /// Card total after the turn; absent for poker
    #[serde(default)]
    pub score: Option<u32>,
}

/// A settled round, serialized as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    pub game: GameKind,
    /// Seed of the entropy provider, for replay
    pub seed: Option<u64>,
    pub round: usize,
    pub entries: Vec<EntryRecord>,
    pub winners: Vec<String>,
    /// RFC3339, filled in by [`RoundLogger::write`] when missing
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_poker(round_id: String, seed: Option<u64>, outcome: &RoundOutcome) -> Self {
        let entries = outcome
            .showdown
            .iter()
            .map(|e| EntryRecord {
                player: e.player.clone(),
                symbols: e.rank.cards.iter().map(ToString::to_string).collect(),
                category: e.rank.category.name().to_string(),
                score: None,
            })
            .collect();
        Self {
            round_id,
            game: GameKind::Poker,
            seed,
            round: outcome.round,
            entries,
            winners: outcome.winners.clone(),
            ts: None,
        }
    }

    pub fn from_yahtzee(round_id: String, seed: Option<u64>, round: &YahtzeeRound) -> Self {
        let entries = round
            .turns
            .iter()
            .map(|t| EntryRecord {
                player: t.player.clone(),
                symbols: t.dice.iter().map(ToString::to_string).collect(),
                category: t
                    .fill
                    .map(|f| f.category.name().to_string())
                    .unwrap_or_default(),
                score: Some(t.total),
            })
            .collect();
        Self {
            round_id,
            game: GameKind::Yahtzee,
            seed,
            round: round.round,
            entries,
            winners: round.leaders.clone(),
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`RoundRecord`]s to a JSONL file, one object per LF-terminated line.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that writes nowhere, with a fixed date for predictable ids.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
