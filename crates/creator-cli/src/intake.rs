use std::fs;
use std::path::Path;

use creator_core::CreatorError;
use tracing::debug;

/// Read the instruction file.
///
/// The contents are returned untouched; blank files are rejected so the
/// generator is never called with nothing to work from.
pub fn load_instructions(path: &Path) -> Result<String, CreatorError> {
    if !path.exists() {
        return Err(CreatorError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| CreatorError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(CreatorError::EmptyInput(path.to_path_buf()));
    }

    debug!(path = %path.display(), bytes = text.len(), "instructions loaded");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.txt");
        let err = load_instructions(&path).unwrap_err();
        assert!(matches!(err, CreatorError::NotFound(p) if p == path));
    }

    #[test]
    fn whitespace_only_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blank.txt");
        fs::write(&path, " \n\t\r\n").unwrap();
        assert!(matches!(
            load_instructions(&path).unwrap_err(),
            CreatorError::EmptyInput(_)
        ));
    }

    #[test]
    fn zero_byte_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("zero.txt");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            load_instructions(&path).unwrap_err(),
            CreatorError::EmptyInput(_)
        ));
    }

    #[test]
    fn contents_are_returned_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("in.txt");
        fs::write(&path, "\n  Write a CLI.\n\n").unwrap();
        assert_eq!(load_instructions(&path).unwrap(), "\n  Write a CLI.\n\n");
    }

    #[test]
    fn directory_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_instructions(tmp.path()).unwrap_err();
        assert!(matches!(err, CreatorError::ReadInput { .. }));
        assert!(err.to_string().starts_with("Error reading instruction file: "));
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bin.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        assert!(matches!(
            load_instructions(&path).unwrap_err(),
            CreatorError::ReadInput { .. }
        ));
    }
}
