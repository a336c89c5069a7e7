use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fixed-name state file in the process working directory.
pub const STORE_FILE: &str = "saved_images.bin";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The state file does not exist. A normal first start, not a failure.
    #[error("no saved gallery")]
    NotFound,
    #[error("gallery file error: {0}")]
    Io(#[from] io::Error),
    #[error("gallery file is not decodable: {0}")]
    Decode(#[from] postcard::Error),
}

/// Overwrite the fixed state file with the current path list.
pub fn save(paths: &[PathBuf]) -> Result<(), StoreError> {
    save_to(STORE_FILE, paths)
}

/// Read the path list back from the fixed state file.
pub fn load() -> Result<Vec<PathBuf>, StoreError> {
    load_from(STORE_FILE)
}

pub fn save_to(file: impl AsRef<Path>, paths: &[PathBuf]) -> Result<(), StoreError> {
    let bytes = postcard::to_stdvec(paths)?;
    fs::write(file, bytes)?;
    Ok(())
}

pub fn load_from(file: impl AsRef<Path>) -> Result<Vec<PathBuf>, StoreError> {
    let bytes = match fs::read(file) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(StoreError::NotFound),
        Err(err) => return Err(err.into()),
    };
    Ok(postcard::from_bytes(&bytes)?)
}

/* ───────────────────────── tests ────────────────────────────────── */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(STORE_FILE);
        let paths = vec![
            PathBuf::from("b.png"),
            PathBuf::from("a.png"),
            PathBuf::from("b.png"),
        ];
        save_to(&file, &paths).unwrap();
        assert_eq!(load_from(&file).unwrap(), paths);
    }

    #[test]
    fn roundtrip_of_the_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(STORE_FILE);
        let empty: Vec<PathBuf> = Vec::new();
        save_to(&file, &empty).unwrap();
        assert!(load_from(&file).unwrap().is_empty());
    }

    #[test]
    fn save_overwrites_the_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(STORE_FILE);
        save_to(&file, &[PathBuf::from("old.png")]).unwrap();
        let newer = vec![PathBuf::from("one.png"), PathBuf::from("two.png")];
        save_to(&file, &newer).unwrap();
        assert_eq!(load_from(&file).unwrap(), newer);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(dir.path().join("nothing_here.bin")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn corrupt_file_is_a_decode_error_not_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(STORE_FILE);
        fs::write(&file, b"\xff\xff\xff\xff garbage").unwrap();
        let err = load_from(&file).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
