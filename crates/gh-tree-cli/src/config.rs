use std::time::Duration;

use clap::ValueEnum;
use gh_tree_github::GitHubClientConfig;

/// Environment variables consulted, in order, when `--pat` is not given.
const TOKEN_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// Everything needed to build a GitHub client for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub token: Option<String>,
    pub api_base_url: Option<String>,
    pub timeout: Duration,
}

impl Settings {
    /// Resolve settings from flags, falling back to the process environment
    /// for the token.
    pub fn resolve(pat: Option<String>, api_base_url: Option<String>, timeout_secs: u64) -> Self {
        Self::resolve_with(pat, api_base_url, timeout_secs, |name| std::env::var(name).ok())
    }

    fn resolve_with(
        pat: Option<String>,
        api_base_url: Option<String>,
        timeout_secs: u64,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let token = non_empty(pat).or_else(|| {
            TOKEN_VARS
                .iter()
                .find_map(|name| non_empty(lookup(name)))
        });

        Self {
            token,
            api_base_url: non_empty(api_base_url),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn client_config(&self) -> GitHubClientConfig {
        GitHubClientConfig {
            token: self.token.clone(),
            api_base_url: self.api_base_url.clone(),
            timeout: self.timeout,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
