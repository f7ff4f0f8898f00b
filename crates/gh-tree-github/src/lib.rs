pub mod client;
pub mod repo_info;
pub mod tree;

pub use client::{DEFAULT_API_BASE, GitHubClientConfig, GitHubTreeClient};
