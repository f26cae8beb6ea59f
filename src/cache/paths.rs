// Cache path utilities.
// Names the cache lanes and resolves the per-user cache directory.

use std::fmt;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the per-user cache directory (~/.cache/github-repos on Linux).
pub fn user_cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "github-repos").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Logical dataset cached on disk. Each lane is one file named after the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    UserRepos,
    UserOrgs,
    UserPulls,
}

impl CacheKey {
    /// File name of this lane inside the cache directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            CacheKey::UserRepos => "user_repos",
            CacheKey::UserOrgs => "user_orgs",
            CacheKey::UserPulls => "user_pulls",
        }
    }

    /// Path of this lane inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
