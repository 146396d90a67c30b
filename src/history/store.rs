use std::collections::VecDeque;

use history_log::{HistoryFile, HistoryLogError, HistoryLogErrorKind, HistoryWriter};

use crate::config::HistoryConfig;
use crate::history::entry::Entry;
use crate::logging;

/// Ordered history lines plus the cursor the editor navigates with.
///
/// The last entry is normally an empty placeholder for the line being typed.
/// Drafts written with [`HistoryStore::update`] stay visible until the next
/// commit or [`HistoryStore::revert`] bumps the version.
///
/// Not meant for concurrent use; one editing session drives it.
pub struct HistoryStore {
    pub(crate) config: HistoryConfig,
    pub(crate) entries: VecDeque<Entry>,
    pub(crate) cursor: Option<usize>,
    pub(crate) version: u64,
    enabled: bool,
    initialized: bool,
    /// Attached log, set by a successful `init`.
    writer: Option<Box<dyn HistoryWriter>>,
    /// Backend waiting to be connected by `init`.
    backend: Option<Box<dyn HistoryWriter>>,
}

impl HistoryStore {
    /// Store backed by `config.file`, if any. Nothing is opened until `init`.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            entries: VecDeque::new(),
            cursor: None,
            version: 0,
            enabled: true,
            initialized: false,
            writer: None,
            backend: None,
        }
    }

    /// Store backed by a custom log instead of `config.file`.
    pub fn with_writer(config: HistoryConfig, writer: Box<dyn HistoryWriter>) -> Self {
        let mut store = Self::new(config);
        store.backend = Some(writer);
        store
    }

    /// Loads the persisted history and opens the placeholder for the next line.
    ///
    /// Runs once; later calls are no-ops until [`HistoryStore::reset`]. A log
    /// that does not exist yet is an empty history. A failed over-limit
    /// rewrite still loads the retained lines and keeps the log attached. Any
    /// other load failure detaches the log, leaves the store memory-only and
    /// is returned.
    pub fn init(&mut self) -> Result<(), HistoryLogError> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;

        let writer = self.backend.take().or_else(|| self.file_writer());

        let mut result = Ok(());
        if let Some(writer) = writer {
            match writer.load() {
                Ok(lines) => {
                    self.push_loaded(&lines);
                    self.writer = Some(writer);
                }
                Err(error) if error.is_not_found() => {
                    log::debug!("no history at {}, starting empty", error.path().display());
                    self.writer = Some(writer);
                }
                Err(error) if error.kind() == HistoryLogErrorKind::Rewrite => {
                    log::warn!("history file left untrimmed: {error}");
                    self.push_loaded(error.retained_lines());
                    self.writer = Some(writer);
                    result = Err(error);
                }
                Err(error) => {
                    log::warn!("history disabled for this session: {error}");
                    if let Err(close_error) = writer.close() {
                        log::debug!("closing failed history log: {close_error}");
                    }
                    self.backend = Some(writer);
                    result = Err(error);
                }
            }
        }

        self.version += 1;
        self.push("");
        result
    }

    fn push_loaded(&mut self, lines: &[String]) {
        log::debug!("loaded {} history lines", lines.len());
        for line in lines {
            self.push(line);
        }
    }

    fn file_writer(&self) -> Option<Box<dyn HistoryWriter>> {
        let path = self.config.file.as_ref()?;
        Some(Box::new(HistoryFile::new(path, self.config.limit)))
    }

    /// Drops all entries. The log is kept and reloaded by the next `init`.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
        self.initialized = false;
        if let Some(writer) = self.writer.take() {
            self.backend = Some(writer);
        }
    }

    /// Closes and detaches the log. History keeps working in memory.
    pub fn close(&mut self) -> Result<(), HistoryLogError> {
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        let result = writer.close();
        self.backend = Some(writer);
        result
    }

    pub fn is_connected(&self) -> bool {
        self.writer.is_some()
    }

    /// Appends an entry with `text` committed and moves the cursor to it.
    pub fn push(&mut self, text: &str) {
        self.entries.push_back(Entry::new(text));
        self.cursor = Some(self.entries.len() - 1);
        self.compact();
    }

    /// Drops the oldest entries until the store fits its capacity.
    pub fn compact(&mut self) {
        let Some(capacity) = self.config.capacity() else {
            return;
        };
        while self.entries.len() > capacity {
            self.entries.pop_front();
            self.cursor = self.cursor.map(|cursor| cursor.saturating_sub(1));
        }
    }

    /// Writes `text` into the entry under the cursor.
    ///
    /// With `commit` the committed text is replaced and written through to the
    /// log; otherwise `text` becomes the entry's draft. A log failure is
    /// returned after the in-memory update has happened.
    pub fn update(&mut self, text: &str, commit: bool) -> Result<(), HistoryLogError> {
        let Some(index) = self.cursor else {
            self.push(text);
            return Ok(());
        };

        let mut result = Ok(());
        if let Some(entry) = self.entries.get_mut(index) {
            if commit {
                entry.commit(text);
                if let Some(writer) = &self.writer {
                    if !text.trim().is_empty() {
                        if let Err(error) = writer.append(text) {
                            log::warn!("history append failed: {error}");
                            result = Err(error);
                        }
                    }
                }
            } else {
                entry.set_draft(text, self.version);
            }
        }

        self.compact();
        result
    }

    /// Commits the submitted line and opens a fresh placeholder.
    ///
    /// Resubmitting the previous command unchanged, or submitting an empty line,
    /// only clears the placeholder. If the cursor sits on an older entry, that
    /// entry's draft is what gets committed.
    pub fn new_line(&mut self, text: &str) -> Result<(), HistoryLogError> {
        if !self.enabled {
            return Ok(());
        }

        let mut text = text.to_string();
        let len = self.entries.len();

        if len >= 2 && self.entries[len - 2].committed() == text {
            self.collapse_placeholder();
            return Ok(());
        }

        if text.is_empty() && len > 0 {
            self.collapse_placeholder();
            return Ok(());
        }

        if let (Some(cursor), Some(last)) = (self.cursor, len.checked_sub(1)) {
            if cursor != last {
                text = self.entries[cursor].visible(self.version).to_string();
                self.cursor = Some(last);
            }
        }

        let result = self.update(&text, true);

        self.version += 1;
        self.push("");
        logging::trace_entries(self);
        result
    }

    fn collapse_placeholder(&mut self) {
        let last = self.entries.len().checked_sub(1);
        self.cursor = last;
        if let Some(entry) = last.and_then(|last| self.entries.get_mut(last)) {
            entry.clean();
        }
        self.version += 1;
    }

    /// Abandons navigation: discards every draft and returns to the last entry.
    pub fn revert(&mut self) {
        self.version += 1;
        self.cursor = self.entries.len().checked_sub(1);
    }

    /// Steps to the next older entry and returns a copy of its visible text.
    pub fn prev(&mut self) -> Option<String> {
        let index = self.cursor?.checked_sub(1)?;
        self.cursor = Some(index);
        self.visible_text(index)
    }

    /// Steps to the next newer entry and returns a copy of its visible text.
    pub fn next(&mut self) -> Option<String> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = Some(index);
        self.visible_text(index)
    }

    /// Puts the cursor on `index`, e.g. a search hit. Out of range is ignored.
    pub fn move_to(&mut self, index: usize) -> Option<String> {
        let text = self.visible_text(index)?;
        self.cursor = Some(index);
        Some(text)
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stops recording: `new_line` does nothing until re-enabled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn visible_text(&self, index: usize) -> Option<String> {
        self.entries
            .get(index)
            .map(|entry| entry.visible(self.version).to_string())
    }
}

impl Drop for HistoryStore {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            log::warn!("closing history log failed: {error}");
        }
    }
}
