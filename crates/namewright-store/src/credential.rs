//! Plain-text credential file

use crate::StoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persists the single API token used by the text-generation provider
///
/// The file holds one line of plain text. The token is read once and then
/// handed to the provider by the caller; nothing here is process-global.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store backed by `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the token, or `None` if the file is missing or blank
    pub fn load(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let token = fs::read_to_string(&self.path)?.trim().to_string();
        if token.is_empty() {
            return Ok(None);
        }

        debug!("Loaded credential from {}", self.path.display());
        Ok(Some(token))
    }

    /// Write the token, replacing any existing one
    pub fn save(&self, token: &str) -> Result<(), StoreError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(StoreError::InvalidData("API key must not be empty".to_string()));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    /// Delete the credential file; returns whether one existed
    pub fn clear(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("api_key"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_and_load_trims() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("nested").join("api_key"));

        store.save("  sk-test-123\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("sk-test-123"));
    }

    #[test]
    fn test_blank_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api_key");
        fs::write(&path, "\n  \n").unwrap();
        assert_eq!(CredentialStore::new(&path).load().unwrap(), None);
    }

    #[test]
    fn test_rejects_empty_token() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("api_key"));
        assert!(matches!(store.save("   "), Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("api_key"));
        store.save("token").unwrap();

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }
}
