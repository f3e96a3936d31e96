//! Saving raw provider responses.

use std::path::Path;

use tracing::info;

use crate::error::IoError;

/// Writes a raw response body to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`IoError::File`] if the directory or file cannot be written.
pub fn write_response(path: &Path, body: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::file(parent, e))?;
    }
    std::fs::write(path, body).map_err(|e| IoError::file(path, e))?;
    info!(path = %path.display(), bytes = body.len(), "response written");
    Ok(())
}
