pub mod client;

pub use client::{GitHubClient, GitHubError, RawContent, SharedClient};
