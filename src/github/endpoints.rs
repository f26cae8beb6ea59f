// GitHub API endpoint functions.
// Repository search, user repositories, organizations and open pull requests, with caching.

use serde_json::Value;
use tracing::debug;

use crate::cache::CacheKey;
use crate::error::Result;

use super::client::GitHubClient;
use super::types::{SearchResponse, org_login};

/// Page size for ad-hoc repository search.
pub const SEARCH_PER_PAGE: u32 = 10;
/// Page size for paginated listings.
pub const LIST_PER_PAGE: u32 = 100;

/// Join a free-text query and search modifiers into a `q` parameter.
pub fn search_query(query: &str, modifiers: &[String]) -> String {
    let query = query.trim();
    let mut parts: Vec<&str> = Vec::with_capacity(modifiers.len() + 1);
    if !query.is_empty() {
        parts.push(query);
    }
    parts.extend(modifiers.iter().map(String::as_str));
    parts.join(" ")
}

impl GitHubClient {
    /// Search repositories by name.
    ///
    /// With `restrict_to_mine`, results are limited to the configured account
    /// and the organizations it belongs to.
    pub async fn search_repositories(&self, query: &str, restrict_to_mine: bool) -> Result<Vec<Value>> {
        let mut modifiers = vec!["in:name".to_string()];
        if restrict_to_mine {
            let mine = self.org_modifiers(vec![format!("user:{}", self.config.me_account)]).await?;
            modifiers.extend(mine);
        }

        let params = [
            ("q", search_query(query, &modifiers)),
            ("per_page", SEARCH_PER_PAGE.to_string()),
        ];
        let response: SearchResponse = self.get_json("/search/repositories", &params).await?;
        Ok(response.items)
    }

    /// All repositories of the authenticated user, most recently pushed first.
    pub async fn user_repositories(&self) -> Result<Vec<Value>> {
        self.cache
            .with_cache(CacheKey::UserRepos, self.ttl_repo(), || self.fetch_user_repositories())
            .await
    }

    /// Organizations the authenticated user belongs to.
    pub async fn user_organizations(&self) -> Result<Vec<Value>> {
        self.cache
            .with_cache(CacheKey::UserOrgs, self.ttl_org(), || self.fetch_user_organizations())
            .await
    }

    /// Open pull requests involving the configured account.
    ///
    /// Organizations are resolved first, through their own cache lane, even
    /// when the pull request lane is fresh.
    pub async fn user_pull_requests(&self) -> Result<Vec<Value>> {
        let modifiers = self.pull_modifiers().await?;
        self.cache
            .with_cache(CacheKey::UserPulls, self.ttl_pr(), || {
                self.fetch_user_pull_requests(modifiers)
            })
            .await
    }

    async fn fetch_user_repositories(&self) -> Result<Vec<Value>> {
        let params = [
            ("sort", "pushed".to_string()),
            ("direction", "desc".to_string()),
        ];
        let pages: Vec<Vec<Value>> = self
            .get_all_pages("/user/repos", &params, LIST_PER_PAGE)
            .await?;
        Ok(pages.into_iter().flatten().collect())
    }

    async fn fetch_user_organizations(&self) -> Result<Vec<Value>> {
        let params = [("per_page", LIST_PER_PAGE.to_string())];
        self.get_json("/user/orgs", &params).await
    }

    async fn fetch_user_pull_requests(&self, modifiers: Vec<String>) -> Result<Vec<Value>> {
        let params = [("q", search_query("", &modifiers))];
        let pages: Vec<SearchResponse> = self
            .get_all_pages("/search/issues", &params, LIST_PER_PAGE)
            .await?;
        Ok(pages.into_iter().flat_map(|page| page.items).collect())
    }

    async fn pull_modifiers(&self) -> Result<Vec<String>> {
        let me = &self.config.me_account;
        if self.config.pr_all_involve_me {
            return Ok(vec![
                "is:pr".to_string(),
                "state:open".to_string(),
                format!("involves:{}", me),
            ]);
        }

        self.org_modifiers(vec![
            "is:pr".to_string(),
            format!("user:{}", me),
            "state:open".to_string(),
            format!("involves:{}", me),
        ])
        .await
    }

    /// Append one `org:<login>` modifier per organization to `initial`.
    async fn org_modifiers(&self, initial: Vec<String>) -> Result<Vec<String>> {
        let orgs = self.user_organizations().await?;
        debug!(count = orgs.len(), "resolved organizations");

        let mut modifiers = initial;
        modifiers.extend(orgs.iter().filter_map(org_login).map(|login| format!("org:{}", login)));
        Ok(modifiers)
    }
}
