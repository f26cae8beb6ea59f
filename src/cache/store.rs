// Local key-value store for cached data.
// One raw JSON file per key; writes go through a temp file and a rename.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

use super::paths::CacheKey;

/// A value read back from the store together with its file modification time.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry<T> {
    pub value: T,
    pub modified: SystemTime,
}

/// File-backed store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn path(&self, key: CacheKey) -> PathBuf {
        key.path_in(&self.dir)
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `Ok(None)` when no file exists. Unreadable or malformed files are errors.
    pub fn get<T: DeserializeOwned>(&self, key: CacheKey) -> Result<Option<StoredEntry<T>>> {
        let path = self.path(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let modified = modified_at(&path)?;
        let value = serde_json::from_str(&contents)?;
        Ok(Some(StoredEntry { value, modified }))
    }

    /// Serialize `value` as JSON and overwrite the file for `key`.
    pub fn put<T: Serialize + ?Sized>(&self, key: CacheKey, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path(key);
        let json = serde_json::to_vec(value)?;

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(&json)?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

/// Get the modification time of a cache file.
fn modified_at(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use crate::error::AppError;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_put_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path());

        let data = vec![TestData {
            name: "test".to_string(),
            value: 42,
        }];
        store.put(CacheKey::UserRepos, &data).unwrap();

        let entry: StoredEntry<Vec<TestData>> = store.get(CacheKey::UserRepos).unwrap().unwrap();
        assert_eq!(entry.value, data);
        assert!(entry.modified <= SystemTime::now());
    }

    #[test]
    fn test_put_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("cache");
        let store = LocalStore::new(&dir);

        store.put(CacheKey::UserOrgs, &json!([{"login": "acme"}])).unwrap();

        assert!(dir.join("user_orgs").is_file());
        assert!(!dir.join("user_orgs.tmp").exists());
    }

    #[test]
    fn test_put_writes_raw_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path());

        store.put(CacheKey::UserPulls, &json!([{"id": 1}])).unwrap();

        let raw = fs::read_to_string(store.path(CacheKey::UserPulls)).unwrap();
        assert_eq!(raw, r#"[{"id":1}]"#);
    }

    #[test]
    fn test_get_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path());

        let entry: Option<StoredEntry<Value>> = store.get(CacheKey::UserRepos).unwrap();
        assert!(entry.is_none());
    }

    #[test]
    fn test_get_malformed_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path());
        fs::write(store.path(CacheKey::UserRepos), "foobarbaz").unwrap();

        let result = store.get::<Value>(CacheKey::UserRepos);
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
