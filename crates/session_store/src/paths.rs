use std::path::{Path, PathBuf};

pub const SESSION_STATE_FILE: &str = "session-state.json";

#[must_use]
pub fn default_session_path(project_root: &Path) -> PathBuf {
    project_root.join(SESSION_STATE_FILE)
}
