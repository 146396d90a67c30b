use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const REWRITE_SUFFIX: &str = ".tmp";

/// Sibling path used while rewriting `path`. Same directory, so the final
/// rename never crosses filesystems.
#[must_use]
pub fn rewrite_temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(REWRITE_SUFFIX);
    PathBuf::from(name)
}

pub(crate) fn parent_dir(path: &Path) -> Option<&Path> {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Some(Path::new(".")),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_suffix() {
        assert_eq!(
            rewrite_temp_path(Path::new("/home/u/.history")),
            PathBuf::from("/home/u/.history.tmp")
        );
    }

    #[test]
    fn bare_file_name_has_current_dir_parent() {
        assert_eq!(parent_dir(Path::new("history")), Some(Path::new(".")));
        assert_eq!(parent_dir(Path::new("/var/h")), Some(Path::new("/var")));
    }
}
