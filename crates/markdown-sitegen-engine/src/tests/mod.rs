use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary site directory for filesystem tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file, including any missing parent directories
pub fn create_test_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let file_path = dir.join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
