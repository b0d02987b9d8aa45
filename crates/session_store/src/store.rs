use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

use crate::error::SessionStoreError;
use crate::paths::default_session_path;
use crate::schema::{Day, SessionRecord};

/// Owns the one session-state file. Construct once per process, read at
/// start-up, write at the end of the session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn in_project(project_root: &Path) -> Self {
        Self::new(default_session_path(project_root))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the stored record. The new content is written to a sibling
    /// temp file and renamed into place, so readers see the old record or the
    /// new one, never a mix.
    ///
    /// A replaced file keeps its permissions; a new one gets the usual
    /// umask-derived mode rather than the owner-only temp file mode.
    pub fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        let dir = parent_dir(&self.path);
        let mut temp = temp_file_builder()
            .tempfile_in(dir)
            .map_err(|source| SessionStoreError::io("creating temp session file", dir, source))?;

        match fs::metadata(&self.path) {
            Ok(existing) => temp
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|source| {
                    SessionStoreError::io("copying session file permissions", temp.path(), source)
                })?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(SessionStoreError::io(
                    "reading session file metadata",
                    &self.path,
                    source,
                ))
            }
        }

        serde_json::to_writer_pretty(&mut temp, record)
            .map_err(|source| SessionStoreError::json_serialize(&self.path, source))?;
        temp.flush()
            .map_err(|source| SessionStoreError::io("flushing temp session file", temp.path(), source))?;

        temp.persist(&self.path).map_err(|error| {
            SessionStoreError::io("replacing session file", &self.path, error.error)
        })?;

        debug!(
            path = %self.path.display(),
            session_id = %record.session_id,
            day = record.day.number(),
            "saved session state"
        );
        Ok(())
    }

    /// Reads the stored record, reporting why it could not be read.
    ///
    /// A missing file is `Ok(None)`; anything else that goes wrong is an error.
    pub fn try_load(&self) -> Result<Option<SessionRecord>, SessionStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionStoreError::io(
                    "reading session file",
                    &self.path,
                    source,
                ))
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| SessionStoreError::json_parse(&self.path, source))
    }

    /// Stored record, or `None` when there is nothing usable on disk.
    #[must_use]
    pub fn load(&self) -> Option<SessionRecord> {
        match self.try_load() {
            Ok(record) => record,
            Err(error) => {
                warn!(%error, "ignoring unusable session state");
                None
            }
        }
    }

    /// Classifies the current invocation against the local calendar.
    #[must_use]
    pub fn detect_day(&self) -> Day {
        self.detect_day_at(local_now())
    }

    /// Same as [`SessionStore::detect_day`] with an explicit "now".
    ///
    /// The saved calendar date is read in the offset the record was stamped
    /// with, so a restart after a daylight-saving switch on the same local
    /// day stays on the same day. UTC stamps (`Z`) carry no local offset and
    /// are read in `now`'s offset instead.
    #[must_use]
    pub fn detect_day_at(&self, now: OffsetDateTime) -> Day {
        let Some(record) = self.load() else {
            return Day::Day1;
        };

        let Some(saved_at) = record.saved_at_datetime() else {
            warn!(saved_at = %record.saved_at, "session state has an unparsable timestamp");
            return Day::Day1;
        };

        if saved_local_date(saved_at, now) != now.date() {
            Day::Day2
        } else {
            record.day
        }
    }
}

fn saved_local_date(saved_at: OffsetDateTime, now: OffsetDateTime) -> Date {
    if saved_at.offset().is_utc() {
        saved_at.to_offset(now.offset()).date()
    } else {
        saved_at.date()
    }
}

/// Current time in the local offset, falling back to UTC when the platform
/// cannot report one (e.g. multi-threaded processes on some Unix targets).
#[must_use]
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn temp_file_builder() -> Builder<'static, 'static> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
