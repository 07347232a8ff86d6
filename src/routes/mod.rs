//! API route handlers - maps HTTP endpoints to upstream fetches.
//!
//! - `topics`: classified tree listing (GET /api/topics)
//! - `test`: raw test file passthrough (GET /api/test/{*path})

pub mod topics;

use axum::Router;

use crate::github::SharedClient;

pub fn create_router(client: SharedClient) -> Router {
    Router::new()
        .merge(topics::routes(client.clone()))
        .merge(test::routes(client))
}
