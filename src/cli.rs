// Command-line interface.
// Parses arguments, applies cache overrides to the configuration and dispatches commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cache::user_cache_dir;
use crate::commands::{help, search, user_pulls, user_repos};
use crate::config::Config;
use crate::data_source::{PullRequests, Repositories};
use crate::error::Result;
use crate::github::GitHubClient;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search repositories by name
    Search {
        /// Only the configured account and its organizations
        #[arg(long)]
        mine: bool,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// List your repositories, most recently pushed first
    UserRepos {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// List open pull requests involving you
    UserPulls {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Show usage for the tool or a command
    Help { command: Option<String> },
}

#[derive(Parser, Debug)]
#[command(name = "github-repos")]
#[command(about = "Search GitHub repositories and pull requests from a launcher", long_about = None)]
#[command(version, disable_help_subcommand = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Cache directory (overrides `alfred_workflow_cache`)
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Use the per-user cache directory when none is configured
    #[arg(long, global = true)]
    pub user_cache: bool,

    /// Disable the on-disk cache
    #[arg(long, global = true, conflicts_with_all = ["cache_dir", "user_cache"])]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Apply cache flags on top of the environment configuration.
    pub fn apply(&self, config: &mut Config) {
        if self.no_cache {
            config.cache_dir = None;
        } else if let Some(dir) = &self.cache_dir {
            config.cache_dir = Some(dir.clone());
        } else if self.user_cache && config.cache_dir.is_none() {
            config.cache_dir = user_cache_dir();
        }
        debug!(cache_dir = ?config.cache_dir, "resolved cache directory");
    }
}

/// Run a command and return what should be printed on stdout.
pub async fn execute(command: &Command, config: Config) -> Result<String> {
    let client = GitHubClient::new(config)?;
    match command {
        Command::Search { mine, query } => {
            search::run(&Repositories::new(&client), &query.join(" "), *mine).await
        }
        Command::UserRepos { query } => {
            user_repos::run(&Repositories::new(&client), &query.join(" ")).await
        }
        Command::UserPulls { query } => {
            let url = client.config().pulls_page_url();
            user_pulls::run(&PullRequests::new(&client), &query.join(" "), &url).await
        }
        Command::Help { command } => Ok(help::render(command.as_deref())),
    }
}
