// `help` command.
// Renders the usage text for the tool or a single command.

use super::{search, user_pulls, user_repos};

const DEFAULT_USAGE: &str = "Usage: github-repos <COMMAND> [options]";

pub fn render(command: Option<&str>) -> String {
    let body = match command {
        Some("search") => search::USAGE,
        Some("user-repos") => user_repos::USAGE,
        Some("user-pulls") => user_pulls::USAGE,
        _ => DEFAULT_USAGE,
    };

    format!(
        "GitHub Repos workflow - CLI\nVersion: {}\n\n{}\n\nAvailable commands:\n  search, user-repos, user-pulls, help\n\nRun `github-repos help <COMMAND>` to see the options of a command.\n",
        env!("CARGO_PKG_VERSION"),
        body
    )
}
