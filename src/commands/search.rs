// `search` command.
// Searches repositories by name and renders them as launcher items.

use crate::data_source::Repositories;
use crate::entities::{ItemList, Repository};
use crate::error::Result;

pub const USAGE: &str = "Usage: github-repos search [--mine] <query>";

pub async fn run(repositories: &Repositories<'_>, query: &str, mine: bool) -> Result<String> {
    let results = repositories.search(query.trim(), mine).await?;
    render(&results)
}

pub fn render(results: &[Repository]) -> Result<String> {
    Ok(results.iter().map(Repository::to_item).collect::<ItemList>().to_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::MockServer;

    use crate::config::Config;
    use crate::github::GitHubClient;

    #[tokio::test]
    async fn test_empty_query_returns_empty_items() {
        let server = MockServer::start().await;
        let client = GitHubClient::new(Config {
            host: server.uri(),
            ..Config::default()
        })
        .unwrap();

        let output = run(&Repositories::new(&client), "  ", false).await.unwrap();

        assert_eq!(output, r#"{"items":[]}"#);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn test_render_items() {
        let repo = Repository {
            id: Some(1),
            name: "hello".to_string(),
            full_name: "octocat/hello".to_string(),
            html_url: "https://github.com/octocat/hello".to_string(),
            ssh_url: "git@github.com:octocat/hello.git".to_string(),
        };

        let output = render(&[repo.clone()]).unwrap();
        let expected = ItemList::new(vec![repo.to_item()]).to_json().unwrap();
        assert_eq!(output, expected);
    }
}
