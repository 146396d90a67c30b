use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::HistoryLogError;
use crate::writer::HistoryWriter;

/// In-memory history log.
///
/// Clones share the same contents, so a caller can keep one handle to inspect
/// what a store has written through another.
#[derive(Clone, Default)]
pub struct MemoryLog {
    inner: Arc<Mutex<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    lines: Vec<String>,
    fail_appends: bool,
    fail_load: bool,
    closed: usize,
}

impl MemoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let log = Self::default();
        log.inner.lock().lines = lines.into_iter().map(Into::into).collect();
        log
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().lines.clone()
    }

    /// Makes subsequent appends fail with an I/O error.
    pub fn set_fail_appends(&self, fail: bool) {
        self.inner.lock().fail_appends = fail;
    }

    pub fn set_fail_load(&self, fail: bool) {
        self.inner.lock().fail_load = fail;
    }

    /// Number of times `close` has been called.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.inner.lock().closed
    }
}

fn memory_path() -> PathBuf {
    PathBuf::from("<memory>")
}

impl HistoryWriter for MemoryLog {
    fn load(&self) -> Result<Vec<String>, HistoryLogError> {
        let state = self.inner.lock();
        if state.fail_load {
            return Err(HistoryLogError::load(
                memory_path(),
                io::Error::other("memory log configured to fail loads"),
            ));
        }
        Ok(state.lines.clone())
    }

    fn append(&self, line: &str) -> Result<(), HistoryLogError> {
        let mut state = self.inner.lock();
        if state.fail_appends {
            return Err(HistoryLogError::append(
                memory_path(),
                io::Error::other("memory log configured to fail appends"),
            ));
        }
        state.lines.push(line.trim().to_string());
        Ok(())
    }

    fn close(&self) -> Result<(), HistoryLogError> {
        self.inner.lock().closed += 1;
        Ok(())
    }
}
