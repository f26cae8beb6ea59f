// Cache-aside policy over the local store.
// Serves fresh entries from disk and falls back to a producer on miss, expiry or corruption.

use std::future::Future;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};

use super::paths::CacheKey;
use super::store::LocalStore;

/// Check whether an entry last modified at `modified` is past `ttl` at `now`.
///
/// An entry is expired once its age reaches the TTL. Modification times in
/// the future count as age zero.
pub fn is_expired(modified: SystemTime, ttl: Duration, now: DateTime<Utc>) -> bool {
    let elapsed = now
        .signed_duration_since(DateTime::<Utc>::from(modified))
        .to_std()
        .unwrap_or(Duration::ZERO);

    elapsed >= ttl
}

/// Cache-aside wrapper. Without a directory every call goes to the producer.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    store: Option<LocalStore>,
}

impl Cache {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            store: dir.map(LocalStore::new),
        }
    }

    /// Return the cached value for `key` if it exists, parses and is younger than `ttl`.
    pub fn read_fresh<T: DeserializeOwned>(&self, key: CacheKey, ttl: Duration) -> Option<T> {
        let store = self.store.as_ref()?;

        let entry = match store.get::<T>(key) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                debug!(%key, "cache miss");
                return None;
            }
            Err(AppError::Json(e)) => {
                debug!(%key, error = %e, "ignoring corrupt cache entry");
                return None;
            }
            Err(e) => {
                warn!(%key, error = %e, "unable to read cache entry");
                return None;
            }
        };

        if is_expired(entry.modified, ttl, Utc::now()) {
            debug!(%key, ttl_secs = ttl.as_secs(), "cache entry expired");
            return None;
        }

        debug!(%key, "cache hit");
        Some(entry.value)
    }

    /// Overwrite the entry for `key`. A no-op when caching is disabled.
    pub fn write<T: Serialize + ?Sized>(&self, key: CacheKey, value: &T) -> Result<()> {
        let Some(store) = self.store.as_ref() else {
            return Ok(());
        };
        store.put(key, value)?;
        info!(%key, path = %store.path(key).display(), "cache entry written");
        Ok(())
    }

    /// Serve `key` from disk when fresh, otherwise run `producer` and store its result.
    ///
    /// A producer failure is returned as-is and leaves the existing entry untouched.
    pub async fn with_cache<T, F, Fut>(&self, key: CacheKey, ttl: Duration, producer: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(cached) = self.read_fresh(key, ttl) {
            return Ok(cached);
        }

        let value = producer().await?;
        if let Err(e) = self.write(key, &value) {
            warn!(%key, error = %e, "unable to write cache entry");
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;

    use serde_json::{Value, json};
    use tempfile::TempDir;

    const TTL: Duration = Duration::from_secs(60);

    fn backdate(path: &std::path::Path, age: Duration) {
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
    }

    #[test]
    fn test_is_expired_boundary() {
        let now = Utc::now();
        let at = |secs: u64| SystemTime::from(now) - Duration::from_secs(secs);

        assert!(!is_expired(at(59), TTL, now));
        assert!(is_expired(at(60), TTL, now));
        assert!(is_expired(at(61), TTL, now));
    }

    #[test]
    fn test_future_mtime_is_fresh() {
        let now = Utc::now();
        let future = SystemTime::from(now) + Duration::from_secs(30);
        assert!(!is_expired(future, TTL, now));
    }

    #[test]
    fn test_zero_ttl_always_expired() {
        let now = Utc::now();
        assert!(is_expired(SystemTime::from(now), Duration::ZERO, now));
    }

    #[tokio::test]
    async fn test_fresh_entry_skips_producer() {
        let temp_dir = TempDir::new().unwrap();
        let cache = Cache::new(Some(temp_dir.path().to_path_buf()));
        let data = json!([{"id": 1, "name": "hello-world"}]);
        cache.write(CacheKey::UserRepos, &data).unwrap();

        let called = Cell::new(false);
        let value: Value = cache
            .with_cache(CacheKey::UserRepos, TTL, || async {
                called.set(true);
                Ok(json!([]))
            })
            .await
            .unwrap();

        assert!(!called.get());
        assert_eq!(value, data);
    }

    #[tokio::test]
    async fn test_expired_entry_runs_producer_and_rewrites() {
        let temp_dir = TempDir::new().unwrap();
        let cache = Cache::new(Some(temp_dir.path().to_path_buf()));
        cache.write(CacheKey::UserPulls, &json!(["old"])).unwrap();
        backdate(&temp_dir.path().join("user_pulls"), TTL);

        let value: Value = cache
            .with_cache(CacheKey::UserPulls, TTL, || async { Ok(json!(["new"])) })
            .await
            .unwrap();

        assert_eq!(value, json!(["new"]));
        let stored: Value = cache.read_fresh(CacheKey::UserPulls, TTL).unwrap();
        assert_eq!(stored, json!(["new"]));
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss_and_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user_orgs");
        fs::write(&path, "foobarbaz").unwrap();
        let cache = Cache::new(Some(temp_dir.path().to_path_buf()));

        assert!(cache.read_fresh::<Value>(CacheKey::UserOrgs, TTL).is_none());

        let value: Value = cache
            .with_cache(CacheKey::UserOrgs, TTL, || async { Ok(json!([{"login": "acme"}])) })
            .await
            .unwrap();

        assert_eq!(value, json!([{"login": "acme"}]));
        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, value);
    }

    #[tokio::test]
    async fn test_producer_error_leaves_entry_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let cache = Cache::new(Some(temp_dir.path().to_path_buf()));

        let result: Result<Value> = cache
            .with_cache(CacheKey::UserRepos, TTL, || async {
                Err(AppError::Api {
                    status: 403,
                    message: "API rate limit exceeded".to_string(),
                })
            })
            .await;

        assert_eq!(result.unwrap_err().to_string(), "API rate limit exceeded");
        assert!(!temp_dir.path().join("user_repos").exists());
    }

    #[tokio::test]
    async fn test_disabled_cache_always_produces() {
        let cache = Cache::new(None);
        assert!(cache.store.is_none());

        let calls = Cell::new(0);
        for _ in 0..2 {
            let _: Value = cache
                .with_cache(CacheKey::UserRepos, TTL, || async {
                    calls.set(calls.get() + 1);
                    Ok(json!([]))
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.get(), 2);
    }
}
