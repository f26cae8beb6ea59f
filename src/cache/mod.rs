// Cache module for local filesystem caching.
// Stores merged GitHub API datasets on disk, using file mtimes as the freshness clock.

pub mod paths;
pub mod policy;
pub mod store;

pub use paths::{CacheKey, user_cache_dir};
pub use policy::{Cache, is_expired};
pub use store::{LocalStore, StoredEntry};
