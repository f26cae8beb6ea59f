// github-repos entry point.
// Sets up logging on stderr, loads configuration and prints launcher JSON on stdout.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use github_repos::cli::{self, Cli};
use github_repos::commands::help;
use github_repos::config::Config;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        print!("{}", help::render(None));
        return ExitCode::FAILURE;
    };

    let mut config = Config::from_env();
    cli.apply(&mut config);
    debug!(host = %config.host, me = %config.me_account, "loaded configuration");

    match cli::execute(command, config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
