/// One history line.
///
/// `committed` is what was actually submitted. A draft is an uncommitted edit
/// made while navigating; it is only visible while its version matches the
/// store's version, so bumping the store version discards every draft at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    committed: String,
    draft: Option<Draft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    text: String,
    version: u64,
}

impl Entry {
    pub(crate) fn new(committed: &str) -> Self {
        Self {
            committed: committed.to_string(),
            draft: None,
        }
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// The draft text, if one was written during `version`.
    pub fn draft(&self, version: u64) -> Option<&str> {
        self.draft
            .as_ref()
            .filter(|draft| draft.version == version)
            .map(|draft| draft.text.as_str())
    }

    /// Text shown to the user at `version`: a fresh draft, else the committed line.
    pub fn visible(&self, version: u64) -> &str {
        self.draft(version).unwrap_or(&self.committed)
    }

    pub(crate) fn commit(&mut self, text: &str) {
        self.committed = text.to_string();
        self.draft = None;
    }

    pub(crate) fn set_draft(&mut self, text: &str, version: u64) {
        match &mut self.draft {
            Some(draft) => {
                draft.text.clear();
                draft.text.push_str(text);
                draft.version = version;
            }
            None => {
                self.draft = Some(Draft {
                    text: text.to_string(),
                    version,
                });
            }
        }
    }

    pub(crate) fn clean(&mut self) {
        self.committed.clear();
        self.draft = None;
    }
}
