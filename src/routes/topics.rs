use axum::{Json, Router, extract::State, routing::get};

use crate::classify::classify_tree;
use crate::error::{AppError, Result};
use crate::github::SharedClient;
use crate::models::TopicsResponse;

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/api/topics", get(get_topics))
        .with_state(client)
}

async fn get_topics(State(client): State<SharedClient>) -> Result<Json<TopicsResponse>> {
    // Always a fresh fetch - there is no invalidation story that would make
    // caching the classified tree safe.
    let items = client.fetch_tree().await.map_err(AppError::Topics)?;
    let topics = classify_tree(&items);

    Ok(Json(TopicsResponse {
        success: true,
        data: topics,
    }))
}
