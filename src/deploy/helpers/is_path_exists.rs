use std::fs;
use std::path::Path;

use crate::prelude::*;

/// Check whether a path exists on disk.
///
/// Returns `Ok(false)` only when the path is genuinely absent; any other
/// filesystem error (permissions, I/O) is propagated to the caller.
pub fn is_path_exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_path_exists_with_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(is_path_exists(file.path()).unwrap());
    }

    #[test]
    fn test_is_path_exists_with_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_path_exists(dir.path()).unwrap());
    }

    #[test]
    fn test_is_path_exists_with_missing_path() {
        assert!(!is_path_exists(Path::new("/nonexistent/app.ipa")).unwrap());
    }
}
