// GitHub API HTTP client.
// Handles authentication, request headers, error bodies and Link-header pagination.

use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, LINK, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{AppError, Result};

use super::link;
use super::types::ApiErrorBody;

/// Media type sent as both `Accept` and `Content-Type`.
pub const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// GitHub API client with Basic authentication and an on-disk cache.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    pub(super) config: Config,
    pub(super) cache: Cache,
}

impl GitHubClient {
    /// Create a new client from the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_MEDIA_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(GITHUB_V3_MEDIA_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("github-repos/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url(),
            cache: Cache::new(config.cache_dir.clone()),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(super) fn ttl_repo(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_sec_repo)
    }

    pub(super) fn ttl_org(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_sec_org)
    }

    pub(super) fn ttl_pr(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_sec_pr)
    }

    /// Make a GET request with query parameters and fail on non-success status.
    pub async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, ?params, "GET");

        let response = self
            .client
            .get(&url)
            .query(params)
            .basic_auth("", Some(&self.config.access_token))
            .send()
            .await?;

        check_response(response).await
    }

    /// GET and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self.get(endpoint, params).await?;
        Ok(response.json().await?)
    }

    /// Fetch every page of `endpoint`, in order.
    ///
    /// Page 1 is requested first; its `Link` header's `rel="last"` entry gives
    /// the page count, and pages `2..=last` follow one at a time. Any failing
    /// page fails the whole fetch.
    pub async fn get_all_pages<P: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        per_page: u32,
    ) -> Result<Vec<P>> {
        let first = self
            .get(endpoint, &page_params(params, 1, per_page))
            .await?;
        let last = first
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(link::last_page)
            .unwrap_or(1);
        debug!(endpoint, last_page = last, "paginating");

        let mut pages = Vec::new();
        pages.push(first.json::<P>().await?);

        for page in 2..=last {
            let response = self
                .get(endpoint, &page_params(params, page, per_page))
                .await?;
            pages.push(response.json::<P>().await?);
        }

        Ok(pages)
    }
}

/// Copy `params`, replacing any `page`/`per_page` with the given values.
fn page_params<'a>(params: &[(&'a str, String)], page: u32, per_page: u32) -> Vec<(&'a str, String)> {
    let mut out: Vec<(&'a str, String)> = params
        .iter()
        .filter(|(key, _)| *key != "page" && *key != "per_page")
        .cloned()
        .collect();
    out.push(("per_page", per_page.to_string()));
    out.push(("page", page.to_string()));
    out
}

/// Check response status, turning failures into `AppError::Api` with the body's `message`.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("HTTP {}", status));

    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}
