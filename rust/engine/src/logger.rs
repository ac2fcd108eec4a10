use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::player::PlayerAction;
use crate::showdown::ShowdownResult;

/// Records a single player action during a hand, tagged with the seat
/// and the phase when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub phase: Phase,
    pub action: PlayerAction,
}

/// Complete record of one hand: actions, board, and outcome. Serialized
/// as one JSON line per hand for audit and replay; nothing is read back
/// into a live session.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Identifier in `YYYYMMDD-NNNNNN` form
    pub hand_id: String,
    /// Deck seed for the session (same seed, same shuffles)
    pub seed: Option<u64>,
    /// Chronological player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards at the end of the hand
    pub board: Vec<Card>,
    /// Per-player showdown outcomes
    pub results: Vec<ShowdownResult>,
    /// RFC3339 timestamp, injected on write when absent
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one JSON line per completed hand. An existing file is kept
/// and extended, so a log path can span sessions.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that assigns ids but writes nowhere, for tests.
    pub fn sink_with_date(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
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
