// `user-pulls` command.
// Lists open pull requests, fuzzy-filtered on title or URL.

use crate::data_source::PullRequests;
use crate::entities::{Item, ItemList, ItemText, PullRequest};
use crate::error::Result;

use super::filter::fuzzy_regex;

pub const USAGE: &str = "Usage: github-repos user-pulls [query]";

pub const OPEN_PULLS_TITLE: &str = "Open your Pull Requests page...";

pub async fn run(pull_requests: &PullRequests<'_>, query: &str, pulls_page_url: &str) -> Result<String> {
    let pulls = pull_requests.user_pulls().await?;
    render(&filter(pulls, query)?, query, pulls_page_url)
}

/// Keep pull requests whose title or URL fuzzy-matches `query`. Case-sensitive.
pub fn filter(pulls: Vec<PullRequest>, query: &str) -> Result<Vec<PullRequest>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(pulls);
    }

    let re = fuzzy_regex(query, false)?;
    Ok(pulls
        .into_iter()
        .filter(|pull| re.is_match(&pull.title) || re.is_match(&pull.html_url))
        .collect())
}

/// Render pulls; an unfiltered list starts with a link to the pull requests page.
pub fn render(pulls: &[PullRequest], query: &str, pulls_page_url: &str) -> Result<String> {
    let mut items = Vec::with_capacity(pulls.len() + 1);
    if query.trim().is_empty() {
        items.push(open_pulls_item(pulls_page_url));
    }
    items.extend(pulls.iter().map(PullRequest::to_item));
    Ok(ItemList::new(items).to_json()?)
}

fn open_pulls_item(url: &str) -> Item {
    Item {
        title: OPEN_PULLS_TITLE.to_string(),
        subtitle: url.to_string(),
        arg: url.to_string(),
        text: ItemText {
            copy: url.to_string(),
            largetype: None,
        },
    }
}
