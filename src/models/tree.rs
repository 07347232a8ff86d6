//! Upstream tree-listing DTOs.
//!
//! Shapes match the GitHub `git/trees` API response; fields the server never
//! looks at are simply not declared.

use serde::{Deserialize, Serialize};

/// One item from the recursive tree listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeItem {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub mode: Option<String>,
    pub sha: Option<String>,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    #[serde(other)]
    Other,
}

/// Envelope around the tree array; `sha`, `url` and `truncated` are ignored.
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<TreeItem>,
}
