// Repository data source.

use serde_json::Value;

use crate::entities::Repository;
use crate::error::Result;
use crate::github::GitHubClient;

pub struct Repositories<'a> {
    client: &'a GitHubClient,
}

impl<'a> Repositories<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Search repositories by name. An empty query returns nothing without a request.
    pub async fn search(&self, query: &str, mine: bool) -> Result<Vec<Repository>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records = self.client.search_repositories(query, mine).await?;
        Ok(to_repositories(&records))
    }

    pub async fn user_repos(&self) -> Result<Vec<Repository>> {
        let records = self.client.user_repositories().await?;
        Ok(to_repositories(&records))
    }
}

fn to_repositories(records: &[Value]) -> Vec<Repository> {
    records.iter().map(Repository::from_record).collect()
}
