//! # CSV Leaderboard
//!
//! Leaderboard stored as comma-separated `band name,score` records, one run
//! per line. Band names are quoted when they contain separators, quotes or
//! line breaks.

use crate::leaderboard::{rank, ScoreEntry, ScoreStore};
use crate::PnpResult;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Leaderboard backed by a CSV file on disk.
///
/// # Examples
///
/// ```
/// use pnp::{CsvLeaderboard, ScoreEntry, ScoreStore};
///
/// let dir = std::env::temp_dir().join(format!("pnp-doc-{}", std::process::id()));
/// let board = CsvLeaderboard::new(dir.join("scores.csv"));
/// board.persist(&ScoreEntry::new("Null Pointers", 420)).unwrap();
/// assert_eq!(board.top(10).unwrap()[0].band_name, "Null Pointers");
/// # std::fs::remove_dir_all(dir).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CsvLeaderboard {
    path: PathBuf,
}

impl CsvLeaderboard {
    /// Creates a leaderboard stored at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every well-formed entry in file order.
    ///
    /// Records with fewer than two fields or a score that is not a
    /// non-negative integer are skipped.
    pub fn all(&self) -> PnpResult<Vec<ScoreEntry>> {
        let text = fs::read_to_string(&self.path)?;
        let entries = parse_records(&text)
            .into_iter()
            .filter_map(|record| {
                if record.len() < 2 {
                    return None;
                }
                match record[1].trim().parse::<u64>() {
                    Ok(score) => Some(ScoreEntry::new(record[0].clone(), score)),
                    Err(_) => {
                        debug!("Skipping leaderboard record {:?}", record);
                        None
                    }
                }
            })
            .collect();
        Ok(entries)
    }
}

impl ScoreStore for CsvLeaderboard {
    fn top(&self, n: usize) -> PnpResult<Vec<ScoreEntry>> {
        match self.all() {
            Ok(entries) => Ok(rank(entries, n)),
            Err(crate::PnpError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard at {} yet", self.path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn persist(&self, entry: &ScoreEntry) -> PnpResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        // Don't glue the new record onto a hand-edited last line.
        if file.metadata()?.len() > 0 {
            file.seek(SeekFrom::End(-1))?;
            let mut last = [0u8; 1];
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        let line = format!("{},{}\n", format_field(&entry.band_name), entry.score);
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Quotes a field when it would otherwise break the record.
pub fn format_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Splits CSV text into records of unquoted fields.
///
/// Blank lines are ignored and both `\n` and `\r\n` end a record.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                let blank = record.is_empty() && field.is_empty() && !quoted;
                record.push(std::mem::take(&mut field));
                quoted = false;
                let finished = std::mem::take(&mut record);
                if !blank {
                    records.push(finished);
                }
            }
            _ => field.push(c),
        }
    }

    if !record.is_empty() || !field.is_empty() || quoted {
        record.push(field);
        records.push(record);
    }
    records
}
