// Client configuration.
// Built from defaults merged with environment overrides, then passed by value to the client.

use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_API_HOST: &str = "api.github.com";
pub const DEFAULT_WEB_HOST: &str = "github.com";
pub const DEFAULT_ME_ACCOUNT: &str = "@me";

/// One day.
pub const DEFAULT_TTL_SEC_REPO: u64 = 24 * 60 * 60;
/// One day.
pub const DEFAULT_TTL_SEC_ORG: u64 = 24 * 60 * 60;
/// Five minutes.
pub const DEFAULT_TTL_SEC_PR: u64 = 5 * 60;

/// Settings for the GitHub client and commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API host, e.g. `api.github.com`. A value with a scheme is used as the base URL verbatim.
    pub host: String,
    pub access_token: String,
    /// Account used in `user:` and `involves:` search modifiers.
    pub me_account: String,
    /// Search every pull request involving the account instead of scoping to its orgs.
    pub pr_all_involve_me: bool,
    /// Cache directory; `None` disables caching.
    pub cache_dir: Option<PathBuf>,
    pub cache_ttl_sec_repo: u64,
    pub cache_ttl_sec_org: u64,
    pub cache_ttl_sec_pr: u64,
    /// Web host used for links that open in the browser.
    pub web_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            access_token: String::new(),
            me_account: DEFAULT_ME_ACCOUNT.to_string(),
            pr_all_involve_me: false,
            cache_dir: None,
            cache_ttl_sec_repo: DEFAULT_TTL_SEC_REPO,
            cache_ttl_sec_org: DEFAULT_TTL_SEC_ORG,
            cache_ttl_sec_pr: DEFAULT_TTL_SEC_PR,
            web_host: DEFAULT_WEB_HOST.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            host: get("GITHUB_API_HOST").unwrap_or(defaults.host),
            access_token: get("GITHUB_ACCESS_TOKEN").unwrap_or(defaults.access_token),
            me_account: get("GITHUB_ME_ACCOUNT").unwrap_or(defaults.me_account),
            pr_all_involve_me: get("PR_ALL_INVOLVE_ME")
                .map(|value| value.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.pr_all_involve_me),
            cache_dir: get("alfred_workflow_cache").map(PathBuf::from),
            cache_ttl_sec_repo: parse_ttl("CACHE_TTL_SEC_REPO", get("CACHE_TTL_SEC_REPO"))
                .unwrap_or(defaults.cache_ttl_sec_repo),
            cache_ttl_sec_org: parse_ttl("CACHE_TTL_SEC_ORG", get("CACHE_TTL_SEC_ORG"))
                .unwrap_or(defaults.cache_ttl_sec_org),
            cache_ttl_sec_pr: parse_ttl("CACHE_TTL_SEC_PR", get("CACHE_TTL_SEC_PR"))
                .unwrap_or(defaults.cache_ttl_sec_pr),
            web_host: get("GITHUB_HOST").unwrap_or(defaults.web_host),
        }
    }

    /// Base URL for API requests.
    pub fn api_base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    /// Web page listing the user's pull requests.
    pub fn pulls_page_url(&self) -> String {
        format!("https://{}/pulls", self.web_host.trim_end_matches('/'))
    }
}

fn parse_ttl(name: &str, value: Option<String>) -> Option<u64> {
    let value = value?;
    match value.trim().parse() {
        Ok(secs) => Some(secs),
        Err(_) => {
            warn!(variable = name, value = %value, "ignoring invalid TTL, using default");
            None
        }
    }
}
