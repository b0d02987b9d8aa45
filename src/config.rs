//! Environment configuration.

use std::env;
use std::path::{Path, PathBuf};

use regex::Regex;
use session_store::default_session_path;
use thiserror::Error;

pub const PROJECT_ROOT_ENV: &str = "GAME_DEV_PROJECT_ROOT";
pub const SESSION_PATH_ENV: &str = "GAME_DEV_SESSION_PATH";
pub const PROGRESS_BOARD_ENV: &str = "GAME_DEV_PROGRESS_BOARD";
pub const LOG_FILTER_ENV: &str = "GAME_DEV_LOG";
pub const LOG_JSON_ENV: &str = "GAME_DEV_LOG_JSON";

pub const PROGRESS_BOARD_FILE: &str = "progress-board.md";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Path segments that writes and edits are allowed to land under.
pub const SAFE_PATH_SEGMENTS: [&str; 2] = ["game-project", "roblox-game"];

/// Framework directories that stay writable regardless of the safe segments.
pub const PROJECT_PATH_MARKERS: [&str; 2] = ["/plugin/", "/youth-game-dev-framework/"];

/// Shell commands a young developer never needs, Unix and Windows alike.
pub const BLOCKED_COMMAND_PATTERNS: [&str; 8] = [
    r"rm\s+-rf",
    r"curl.*\|.*sh",
    r"sudo",
    r"chmod",
    r"(?i)rmdir\s+/s",
    r"(?i)del\s+/[fq]",
    r"(?i)format\s+[a-z]:",
    r"npm.*install.*-g",
];

pub const FRUSTRATION_SIGNALS: [&str; 11] = [
    "i give up",
    "this is impossible",
    "i can't",
    "nothing works",
    "i hate this",
    "this is stupid",
    "it's broken",
    "ugh",
    "i don't understand",
    "this doesn't make sense",
    "help me",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve current directory for {key}: {source}")]
    CurrentDir {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid blocked command pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub project_root: PathBuf,
    pub session_path: PathBuf,
    pub progress_board_path: PathBuf,
    pub log_filter: String,
    pub log_json: bool,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_root = match env_string_opt(PROJECT_ROOT_ENV) {
            Some(root) => PathBuf::from(root),
            None => env::current_dir().map_err(|source| ConfigError::CurrentDir {
                key: PROJECT_ROOT_ENV,
                source,
            })?,
        };

        Ok(Self::for_root(project_root))
    }

    /// Builds the config for `project_root`, still honouring per-file overrides.
    pub fn for_root(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let session_path = env_string_opt(SESSION_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_session_path(&project_root));
        let progress_board_path = env_string_opt(PROGRESS_BOARD_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| project_root.join(PROGRESS_BOARD_FILE));

        Self {
            project_root,
            session_path,
            progress_board_path,
            log_filter: env_string_opt(LOG_FILTER_ENV)
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_json: env_flag(LOG_JSON_ENV),
        }
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

/// Permission and encouragement lists the hooks consult.
#[derive(Debug, Clone)]
pub struct GuardrailPolicy {
    pub safe_path_segments: Vec<String>,
    pub project_path_markers: Vec<String>,
    pub blocked_commands: Vec<Regex>,
    pub frustration_signals: Vec<String>,
}

impl GuardrailPolicy {
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocked_commands = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            safe_path_segments: to_owned_list(&SAFE_PATH_SEGMENTS),
            project_path_markers: to_owned_list(&PROJECT_PATH_MARKERS),
            blocked_commands,
            frustration_signals: to_owned_list(&FRUSTRATION_SIGNALS),
        })
    }
}

impl Default for GuardrailPolicy {
    fn default() -> Self {
        Self::from_patterns(BLOCKED_COMMAND_PATTERNS)
            .expect("built-in blocked command patterns must compile")
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock poisoned")
    }

    fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    #[test]
    fn defaults_hang_off_the_project_root() {
        let _lock = env_lock();
        let _g1 = set_env_guard(PROJECT_ROOT_ENV, Some("/tmp/hackathon"));
        let _g2 = set_env_guard(SESSION_PATH_ENV, None);
        let _g3 = set_env_guard(PROGRESS_BOARD_ENV, None);
        let _g4 = set_env_guard(LOG_FILTER_ENV, None);
        let _g5 = set_env_guard(LOG_JSON_ENV, None);

        let config = EnvConfig::from_env().expect("config should resolve");
        assert_eq!(config.project_root(), Path::new("/tmp/hackathon"));
        assert_eq!(
            config.session_path,
            PathBuf::from("/tmp/hackathon/session-state.json")
        );
        assert_eq!(
            config.progress_board_path,
            PathBuf::from("/tmp/hackathon/progress-board.md")
        );
        assert_eq!(config.log_filter, "warn");
        assert!(!config.log_json);
    }

    #[test]
    fn explicit_paths_override_defaults() {
        let _lock = env_lock();
        let _g1 = set_env_guard(PROJECT_ROOT_ENV, Some("/tmp/hackathon"));
        let _g2 = set_env_guard(SESSION_PATH_ENV, Some("/var/state/session.json"));
        let _g3 = set_env_guard(PROGRESS_BOARD_ENV, Some("/var/state/board.md"));
        let _g4 = set_env_guard(LOG_FILTER_ENV, Some("debug"));
        let _g5 = set_env_guard(LOG_JSON_ENV, Some("1"));

        let config = EnvConfig::from_env().expect("config should resolve");
        assert_eq!(
            config.session_path,
            PathBuf::from("/var/state/session.json")
        );
        assert_eq!(config.progress_board_path, PathBuf::from("/var/state/board.md"));
        assert_eq!(config.log_filter, "debug");
        assert!(config.log_json);
    }

    #[test]
    fn blank_values_are_ignored() {
        let _lock = env_lock();
        let _g1 = set_env_guard(PROJECT_ROOT_ENV, Some("/tmp/hackathon"));
        let _g2 = set_env_guard(SESSION_PATH_ENV, Some("   "));
        let _g3 = set_env_guard(LOG_FILTER_ENV, Some(""));

        let config = EnvConfig::from_env().expect("config should resolve");
        assert_eq!(
            config.session_path,
            PathBuf::from("/tmp/hackathon/session-state.json")
        );
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn default_session_path_is_where_the_store_looks() {
        let _lock = env_lock();
        let _g = set_env_guard(SESSION_PATH_ENV, None);

        let root = Path::new("/tmp/hackathon");
        let config = EnvConfig::for_root(root);
        let store = session_store::SessionStore::in_project(root);
        assert_eq!(config.session_path, store.path());
    }

    #[test]
    fn default_policy_compiles_every_blocked_pattern() {
        let policy = GuardrailPolicy::default();
        assert_eq!(policy.blocked_commands.len(), BLOCKED_COMMAND_PATTERNS.len());
        assert!(policy
            .blocked_commands
            .iter()
            .any(|pattern| pattern.is_match("RMDIR /S build")));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let error = GuardrailPolicy::from_patterns(["(unclosed"])
            .expect_err("unbalanced group must fail");
        assert!(matches!(error, ConfigError::InvalidPattern { .. }));
    }
}
