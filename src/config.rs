//! History configuration.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_HISTORY_LIMIT: i64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Backing log. `None` keeps history in memory only.
    pub file: Option<PathBuf>,
    /// Maximum entries kept in memory and on load; `<= 0` means unbounded.
    pub limit: i64,
    /// Case-insensitive search in both directions.
    pub search_fold: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file: None,
            limit: DEFAULT_HISTORY_LIMIT,
            search_fold: true,
        }
    }
}

impl HistoryConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            file: env_string_opt("TAPE_HISTORY_FILE").map(PathBuf::from),
            limit: env_i64("TAPE_HISTORY_LIMIT").unwrap_or(defaults.limit),
            search_fold: env_bool("TAPE_HISTORY_SEARCH_FOLD").unwrap_or(defaults.search_fold),
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_search_fold(mut self, search_fold: bool) -> Self {
        self.search_fold = search_fold;
        self
    }

    pub fn limit_enabled(&self) -> bool {
        self.limit > 0
    }

    pub(crate) fn capacity(&self) -> Option<usize> {
        if !self.limit_enabled() {
            return None;
        }
        usize::try_from(self.limit).ok()
    }
}

fn env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.trim() {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

fn env_i64(key: &str) -> Option<i64> {
    env_string_opt(key).and_then(|value| value.trim().parse().ok())
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
