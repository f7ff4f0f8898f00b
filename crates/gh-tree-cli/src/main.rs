mod args;
mod commands;
mod config;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use gh_tree_github::GitHubTreeClient;
use tracing::debug;

use crate::config::{LogLevel, Settings};

#[derive(Parser, Debug)]
#[command(name = "gh-tree", version)]
#[command(about = "View a GitHub repository's file tree or mirror it as empty placeholders")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log verbosity on stderr
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// GitHub API base URL
    #[arg(long, global = true, env = "GH_TREE_API_URL", hide = true)]
    api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an empty placeholder copy of the repository's layout
    Touch {
        /// Output directory for the placeholder structure
        #[arg(long)]
        path: PathBuf,
        #[command(flatten)]
        repo: RepoArgs,
    },
    /// Print the repository as an ASCII tree with folder and file totals
    View {
        /// Only show entries at or below this folder
        #[arg(short = 'f', long)]
        folder: Option<String>,
        /// Draw kind icons and color folders, files and totals
        #[arg(short = 'c', long)]
        color: bool,
        #[command(flatten)]
        repo: RepoArgs,
    },
}

#[derive(Args, Debug)]
struct RepoArgs {
    /// GitHub personal access token (falls back to GH_TOKEN, then GITHUB_TOKEN)
    #[arg(long)]
    pat: Option<String>,
    /// Repository URL or owner/repo
    repo_url: String,
    /// Branch to read (defaults to the repository's default branch)
    branch: Option<String>,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(args::normalize(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            print!("{}", e.render());
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    setup_tracing(cli.log_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(
    pat: Option<String>,
    api_url: Option<String>,
    timeout: u64,
) -> Result<GitHubTreeClient> {
    let settings = Settings::resolve(pat, api_url, timeout);
    debug!(
        "Using {} requests with a {}s timeout",
        if settings.token.is_some() { "authenticated" } else { "anonymous" },
        settings.timeout.as_secs()
    );
    Ok(GitHubTreeClient::new(settings.client_config())?)
}

async fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Touch { path, repo } => {
            let client = build_client(repo.pat, cli.api_url, cli.timeout)?;
            commands::touch::run(
                &client,
                &repo.repo_url,
                repo.branch.as_deref(),
                &path,
                &mut out,
            )
            .await?;
        }
        Command::View {
            folder,
            color,
            repo,
        } => {
            let client = build_client(repo.pat, cli.api_url, cli.timeout)?;
            commands::view::run(
                &client,
                &repo.repo_url,
                repo.branch.as_deref(),
                folder.as_deref(),
                color,
                &mut out,
            )
            .await?;
        }
    }

    out.flush()?;
    Ok(())
}
