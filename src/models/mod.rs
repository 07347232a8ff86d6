//! Data transfer objects (DTOs).
//!
//! - `tree`: upstream tree-listing shapes (TreeItem, EntryKind, TreeResponse)
//! - `topics`: derived topic/test shapes serialized for the frontend

pub mod topics;
pub mod tree;

pub use topics::*;
pub use tree::*;
