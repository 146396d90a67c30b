use crate::error::HistoryLogError;

/// Storage side of the history engine.
///
/// Implementations serialize their own operations; the store calls them from a
/// single editing session but a writer may be shared with other threads.
pub trait HistoryWriter: Send {
    /// Returns persisted lines, oldest first.
    fn load(&self) -> Result<Vec<String>, HistoryLogError>;

    fn append(&self, line: &str) -> Result<(), HistoryLogError>;

    /// Releases any open handle. Calling it twice is fine.
    fn close(&self) -> Result<(), HistoryLogError>;
}
