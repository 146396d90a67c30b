//! Crash-safe replacement of the log contents.
//!
//! The new contents go to a sibling temp file which is flushed, synced and then
//! renamed over the log. Until the rename the original file is untouched, so a
//! crash leaves either the old log or the new one, never a mix.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::paths::{parent_dir, rewrite_temp_path};

pub(crate) fn rewrite_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let tmp_path = rewrite_temp_path(path);
    let result = write_temp(&tmp_path, lines).and_then(|()| fs::rename(&tmp_path, path));

    if let Err(error) = result {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            if cleanup.kind() != io::ErrorKind::NotFound {
                log::debug!(
                    "could not remove stale history temp file {}: {cleanup}",
                    tmp_path.display()
                );
            }
        }
        return Err(error);
    }

    if let Some(dir) = parent_dir(path) {
        // Directory entry durability; the rename already happened.
        if let Err(error) = fsync_dir(dir) {
            log::debug!("fsync of {} failed: {error}", dir.display());
        }
    }

    Ok(())
}

fn write_temp(tmp_path: &Path, lines: &[String]) -> io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp_path)?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
    file.sync_all()
}

fn fsync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}
