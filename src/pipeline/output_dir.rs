//! Output directory management

use std::fs;
use std::path::Path;

use super::error::ConvertError;
use crate::utils::print_success;

/// Create `path` (and parents) if it does not exist.
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_output_dir(path: &Path) -> Result<bool, ConvertError> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|source| ConvertError::OutputDir {
        path: path.to_path_buf(),
        source,
    })?;
    print_success(&format!("Created output directory: {}", path.display()));
    Ok(true)
}
