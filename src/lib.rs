//! Backend for the KnockMock test browser.
//!
//! Proxies one GitHub repository's recursive tree and raw file contents,
//! reshaping the tree into a topic → test hierarchy for the frontend.

pub mod classify;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod routes;
