use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryLogErrorKind {
    Load,
    Append,
    Rewrite,
    Close,
}

#[derive(Debug, Error)]
pub enum HistoryLogError {
    #[error("failed to load history from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append history line to {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The over-limit rewrite failed. The file is untouched and the lines the
    /// load kept are still handed back.
    #[error("failed to rewrite history file {path}: {source}")]
    Rewrite {
        path: PathBuf,
        #[source]
        source: io::Error,
        retained: Vec<String>,
    },

    #[error("failed to close history file {path}: {source}")]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HistoryLogError {
    #[must_use]
    pub fn load(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn append(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Append {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn rewrite(path: impl Into<PathBuf>, source: io::Error, retained: Vec<String>) -> Self {
        Self::Rewrite {
            path: path.into(),
            source,
            retained,
        }
    }

    #[must_use]
    pub fn close(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Close {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn kind(&self) -> HistoryLogErrorKind {
        match self {
            Self::Load { .. } => HistoryLogErrorKind::Load,
            Self::Append { .. } => HistoryLogErrorKind::Append,
            Self::Rewrite { .. } => HistoryLogErrorKind::Rewrite,
            Self::Close { .. } => HistoryLogErrorKind::Close,
        }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Load { path, .. }
            | Self::Append { path, .. }
            | Self::Rewrite { path, .. }
            | Self::Close { path, .. } => path,
        }
    }

    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Load { source, .. }
            | Self::Append { source, .. }
            | Self::Rewrite { source, .. }
            | Self::Close { source, .. } => source,
        }
    }

    /// Lines a load read successfully before its rewrite failed.
    #[must_use]
    pub fn retained_lines(&self) -> &[String] {
        match self {
            Self::Rewrite { retained, .. } => retained,
            _ => &[],
        }
    }

    /// True when a load found no backing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == HistoryLogErrorKind::Load
            && self.io_error().kind() == io::ErrorKind::NotFound
    }
}
