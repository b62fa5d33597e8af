use std::fs;
use std::path::Path;

use creator_core::CreatorError;
use tracing::debug;

/// Write the generated script, replacing any existing file.
pub fn write_script(path: &Path, script: &str) -> Result<(), CreatorError> {
    fs::write(path, script).map_err(|source| CreatorError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = script.len(), "script written");
    Ok(())
}
