//! Persistent storage for line-editor history.
//!
//! The log is a plain text file with one entry per line. It is loaded once per
//! session, appended to as lines are committed, and rewritten atomically when it
//! grows past the configured limit.

mod error;
mod file;
mod memory;
mod paths;
mod rewrite;
mod writer;

pub use error::{HistoryLogError, HistoryLogErrorKind};
pub use file::HistoryFile;
pub use memory::MemoryLog;
pub use paths::rewrite_temp_path;
pub use writer::HistoryWriter;
