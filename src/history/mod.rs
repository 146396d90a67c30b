//! In-memory command history with navigation, drafts and search.

mod entry;
mod search;
mod store;

pub use entry::Entry;
pub use search::SearchHit;
pub use store::HistoryStore;
