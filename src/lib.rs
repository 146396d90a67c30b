//! Command history for interactive line editors.
//!
//! Invariant: after initialization and after every commit the last entry is an
//! empty placeholder for the line being typed.
//!
//! # Overview
//! - [`HistoryStore`] holds the entries and the navigation cursor. The editor
//!   stashes its buffer with [`HistoryStore::update`], navigates with
//!   [`HistoryStore::prev`]/[`HistoryStore::next`] and commits with
//!   [`HistoryStore::new_line`].
//! - [`HistoryStore::find_backward`] and [`HistoryStore::find_forward`] locate
//!   substring matches; the caller moves the cursor with
//!   [`HistoryStore::move_to`].
//! - Persistence is delegated to a [`HistoryWriter`]; [`HistoryFile`] is the
//!   plain text implementation.
//!
//! The engine never touches the editor's buffer: every text it hands out is a
//! copy.

#![allow(clippy::should_implement_trait)]

pub mod config;
pub mod logging;
pub mod text;

pub mod history;

pub use crate::config::{HistoryConfig, DEFAULT_HISTORY_LIMIT};
pub use crate::history::{Entry, HistoryStore, SearchHit};

/// Storage backends and their errors.
pub use history_log::{
    HistoryFile, HistoryLogError, HistoryLogErrorKind, HistoryWriter, MemoryLog,
};
