use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::HistoryLogError;
use crate::rewrite::rewrite_lines;
use crate::writer::HistoryWriter;

/// File-backed history log.
///
/// Appends go through a handle opened on first use and kept for the session.
/// Several processes may append to the same path; only one may load (and so
/// possibly rewrite) at a time, which is the caller's concern.
pub struct HistoryFile {
    path: PathBuf,
    limit: i64,
    state: Mutex<FileState>,
}

#[derive(Default)]
struct FileState {
    append_handle: Option<File>,
}

impl HistoryFile {
    /// `limit <= 0` keeps every line.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, limit: i64) -> Self {
        Self {
            path: path.into(),
            limit,
            state: Mutex::new(FileState::default()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.lock().append_handle.is_some()
    }

    fn retained_limit(&self) -> Option<usize> {
        usize::try_from(self.limit).ok().filter(|limit| *limit > 0)
    }
}

impl HistoryWriter for HistoryFile {
    fn load(&self) -> Result<Vec<String>, HistoryLogError> {
        let _state = self.state.lock();
        let limit = self.retained_limit();

        let (lines, total) = read_lines(&self.path, limit)
            .map_err(|source| HistoryLogError::load(&self.path, source))?;

        if let Some(limit) = limit {
            if total > limit {
                log::debug!(
                    "compacting history file {} from {total} to {} lines",
                    self.path.display(),
                    lines.len()
                );
                if let Err(source) = rewrite_lines(&self.path, &lines) {
                    log::warn!("history rewrite of {} failed: {source}", self.path.display());
                    return Err(HistoryLogError::rewrite(&self.path, source, lines));
                }
            }
        }

        Ok(lines)
    }

    fn append(&self, line: &str) -> Result<(), HistoryLogError> {
        let mut state = self.state.lock();

        if state.append_handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|source| HistoryLogError::append(&self.path, source))?;
            state.append_handle = Some(file);
        }

        // One write call per line so concurrent appenders do not interleave.
        let mut record = line.trim().to_string();
        record.push('\n');

        if let Some(file) = state.append_handle.as_mut() {
            file.write_all(record.as_bytes())
                .map_err(|source| HistoryLogError::append(&self.path, source))?;
        }

        Ok(())
    }

    fn close(&self) -> Result<(), HistoryLogError> {
        let mut state = self.state.lock();
        if let Some(file) = state.append_handle.take() {
            // Dropping the handle cannot report errors; syncing first can.
            file.sync_all()
                .map_err(|source| HistoryLogError::close(&self.path, source))?;
        }
        Ok(())
    }
}

/// Reads complete lines, keeping at most `limit` of the newest non-blank ones.
///
/// Returns the retained lines and the number of complete lines seen. A trailing
/// fragment without a newline is a torn append and is ignored.
pub(crate) fn read_lines(path: &Path, limit: Option<usize>) -> io::Result<(Vec<String>, usize)> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut lines = VecDeque::new();
    let mut total = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 || buf.last() != Some(&b'\n') {
            break;
        }
        total += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        lines.push_back(line.to_string());
        if let Some(limit) = limit {
            if lines.len() > limit {
                lines.pop_front();
            }
        }
    }

    Ok((lines.into(), total))
}
