// `user-repos` command.
// Lists the user's repositories, fuzzy-filtered on the full name.

use crate::data_source::Repositories;
use crate::entities::{ItemList, Repository};
use crate::error::Result;

use super::filter::fuzzy_regex;

pub const USAGE: &str = "Usage: github-repos user-repos [query]";

pub async fn run(repositories: &Repositories<'_>, query: &str) -> Result<String> {
    let repos = repositories.user_repos().await?;
    render(&filter(repos, query)?)
}

/// Keep repositories whose full name fuzzy-matches `query`, ignoring case.
pub fn filter(repos: Vec<Repository>, query: &str) -> Result<Vec<Repository>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(repos);
    }

    let re = fuzzy_regex(query, true)?;
    Ok(repos.into_iter().filter(|repo| re.is_match(&repo.full_name)).collect())
}

pub fn render(repos: &[Repository]) -> Result<String> {
    Ok(repos.iter().map(Repository::to_item).collect::<ItemList>().to_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(full_name: &str) -> Repository {
        Repository {
            full_name: full_name.to_string(),
            ..Repository::default()
        }
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let repos = vec![repo("a/one"), repo("b/two")];
        assert_eq!(filter(repos.clone(), " ").unwrap(), repos);
    }

    #[test]
    fn test_fuzzy_filters_full_name_ignoring_case() {
        let repos = vec![repo("foo/Bar-Baz"), repo("hello/world")];
        assert_eq!(filter(repos, "FOBZ").unwrap(), vec![repo("foo/Bar-Baz")]);
    }

    #[test]
    fn test_render_preserves_order() {
        let output = render(&[repo("a/one"), repo("b/two")]).unwrap();
        let first = output.find("a/one").unwrap();
        let second = output.find("b/two").unwrap();
        assert!(first < second);
    }
}
