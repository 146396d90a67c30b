//! Diagnostics for the history engine.
//!
//! Everything goes through the `log` facade under this crate's module paths;
//! installing a logger is left to the embedding application.

use log::Level;

use crate::history::HistoryStore;

/// Logs every entry of `store` at trace level, marking the cursor.
pub fn trace_entries(store: &HistoryStore) {
    if !log::log_enabled!(Level::Trace) {
        return;
    }

    let version = store.version();
    log::trace!("history v{version}, {} entries", store.len());
    for (index, entry) in store.entries().enumerate() {
        let marker = if store.cursor() == Some(index) { '>' } else { ' ' };
        log::trace!(
            "{marker}{index:>4} {:?} draft={:?}",
            entry.committed(),
            entry.draft(version)
        );
    }
}
