//! Loading upload payloads from disk.

use std::path::Path;

use herfa_core::error::{HerfaError, Result};
use herfa_core::upload::UploadFile;

/// Reads `path` into an `UploadFile`, guessing the MIME type from the
/// extension.
pub fn load_upload(path: &Path) -> Result<UploadFile> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| HerfaError::io(format!("Not a file: {}", path.display())))?;
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(UploadFile::new(file_name, mime_type, bytes))
}
