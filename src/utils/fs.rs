use crate::models::DownloadError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes `contents` to `path`, creating any missing parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<(), DownloadError> {
    let to_write_error = |source| DownloadError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, contents).map_err(to_write_error)?;

    debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
