//! # Storage Module
//!
//! Per-user save files kept under the platform's user data directory.
//!
//! Paths inside a storage are relative and `/`-separated. They are checked
//! before touching the file system so a save name can never escape the
//! storage root.

use crate::{PrimerError, PrimerResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A per-user storage root for one organisation/application pair.
#[derive(Debug, Clone)]
pub struct UserStorage {
    root: PathBuf,
}

impl UserStorage {
    /// Opens (creating if needed) `<user data dir>/<org>/<app>`.
    pub fn open(org: &str, app: &str) -> PrimerResult<Self> {
        validate_path(org)?;
        validate_path(app)?;

        let data_dir = dirs::data_dir().ok_or_else(|| {
            PrimerError::Storage("No user data directory on this platform".to_string())
        })?;

        Self::open_at(data_dir.join(org).join(app))
    }

    /// Opens (creating if needed) a storage rooted at `root`.
    pub fn open_at(root: impl Into<PathBuf>) -> PrimerResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        info!("Opened user storage at {}", root.display());
        Ok(Self { root })
    }

    /// Directory holding the files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `data` to `name`, replacing any previous content.
    pub fn write_file(&self, name: &str, data: &[u8]) -> PrimerResult<()> {
        let path = self.resolve(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, data)?;
        debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Size of `name` in bytes.
    pub fn file_size(&self, name: &str) -> PrimerResult<u64> {
        let path = self.resolve(name)?;
        Ok(fs::metadata(path)?.len())
    }

    /// Reads the whole of `name`.
    pub fn read_file(&self, name: &str) -> PrimerResult<Vec<u8>> {
        let path = self.resolve(name)?;
        Ok(fs::read(path)?)
    }

    /// Returns true if `name` exists as a file.
    pub fn exists(&self, name: &str) -> PrimerResult<bool> {
        Ok(self.resolve(name)?.is_file())
    }

    /// Serializes `value` as JSON into `name`.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> PrimerResult<()> {
        let data = serde_json::to_vec_pretty(value)?;
        self.write_file(name, &data)
    }

    /// Deserializes the JSON stored in `name`.
    pub fn read_json<T: DeserializeOwned>(&self, name: &str) -> PrimerResult<T> {
        let data = self.read_file(name)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn resolve(&self, name: &str) -> PrimerResult<PathBuf> {
        validate_path(name)?;
        Ok(name.split('/').fold(self.root.clone(), |path, part| path.join(part)))
    }
}

/// Checks that `name` is a relative, `/`-separated storage path.
///
/// # Examples
///
/// ```
/// use primer::validate_path;
///
/// assert!(validate_path("saves/save0.sav").is_ok());
/// assert!(validate_path("../escape").is_err());
/// ```
pub fn validate_path(name: &str) -> PrimerResult<()> {
    let reject = |reason: &str| {
        Err(PrimerError::Storage(format!(
            "Invalid storage path {:?}: {}",
            name, reason
        )))
    };

    if name.is_empty() {
        return reject("empty");
    }
    if name.starts_with('/') {
        return reject("absolute");
    }
    if name.contains('\\') || name.contains(':') {
        return reject("use '/' as the only separator");
    }
    for part in name.split('/') {
        match part {
            "" => return reject("empty component"),
            "." | ".." => return reject("relative component"),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("save0.sav").is_ok());
        assert!(validate_path("slots/1/save.sav").is_ok());
        assert!(validate_path("com.example").is_ok());

        assert!(validate_path("").is_err());
        assert!(validate_path("/etc/passwd").is_err());
        assert!(validate_path("a//b").is_err());
        assert!(validate_path("a/./b").is_err());
        assert!(validate_path("a/../../b").is_err());
        assert!(validate_path("a\\b").is_err());
        assert!(validate_path("C:save").is_err());
        assert!(validate_path("trailing/").is_err());
    }

    #[test]
    fn test_open_creates_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("com.example").join("my-game");
        let storage = UserStorage::open_at(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(storage.root(), root.as_path());
    }

    #[test]
    fn test_nested_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UserStorage::open_at(dir.path()).unwrap();

        storage.write_file("slots/1/save.sav", b"data").unwrap();
        assert!(dir.path().join("slots").join("1").join("save.sav").is_file());
        assert!(storage.exists("slots/1/save.sav").unwrap());
    }

    #[test]
    fn test_invalid_name_never_touches_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UserStorage::open_at(dir.path().join("inner")).unwrap();

        let result = storage.write_file("../outside.sav", b"data");
        assert!(matches!(result, Err(PrimerError::Storage(_))));
        assert!(!dir.path().join("outside.sav").exists());
    }
}
