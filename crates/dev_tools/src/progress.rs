use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use time::macros::format_description;
use time::OffsetDateTime;

pub const BOARD_HEADER: &str =
    "# Team Progress Board\n\n| Time | Who | What | Next |\n|------|-----|------|------|\n";

/// Markdown table shared by the whole team; rows are only ever appended.
#[derive(Debug, Clone)]
pub struct ProgressBoard {
    path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEntry {
    pub player_name: String,
    pub what_you_did: String,
    pub next_step: Option<String>,
}

impl ProgressEntry {
    #[must_use]
    pub fn table_row(&self, time_label: &str) -> String {
        format!(
            "| {time_label} | {} | {} | {} |\n",
            self.player_name,
            self.what_you_did,
            self.next_step.as_deref().unwrap_or("TBD")
        )
    }
}

impl ProgressBoard {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row, writing the table header first on a fresh board.
    pub fn append(&self, entry: &ProgressEntry, time_label: &str) -> io::Result<()> {
        let is_new = match fs::metadata(&self.path) {
            Ok(_) => false,
            Err(error) if error.kind() == io::ErrorKind::NotFound => true,
            Err(error) => return Err(error),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if is_new {
            file.write_all(BOARD_HEADER.as_bytes())?;
        }
        file.write_all(entry.table_row(time_label).as_bytes())
    }
}

/// Wall-clock `HH:MM:SS` in the local offset (UTC when unknown).
#[must_use]
pub fn local_time_label() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| "--:--:--".to_string())
}
