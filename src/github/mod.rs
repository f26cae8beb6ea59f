// GitHub API module.
// Provides the client, endpoints and response types for the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod link;
pub mod types;

pub use client::{GITHUB_V3_MEDIA_TYPE, GitHubClient};
pub use endpoints::search_query;
