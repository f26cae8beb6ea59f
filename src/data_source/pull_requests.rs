// Pull request data source.

use crate::entities::PullRequest;
use crate::error::Result;
use crate::github::GitHubClient;

pub struct PullRequests<'a> {
    client: &'a GitHubClient,
}

impl<'a> PullRequests<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    pub async fn user_pulls(&self) -> Result<Vec<PullRequest>> {
        let records = self.client.user_pull_requests().await?;
        Ok(records.iter().map(PullRequest::from_record).collect())
    }
}
