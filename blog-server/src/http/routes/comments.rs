//! Comment pages: overview and delete

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};

use super::posts::post_path;
use crate::http::error::ApiError;
use crate::http::extractors::RowId;
use crate::http::server::AppState;

/// GET /comments/ - every comment, newest first
async fn list_comments(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let comments = state.db.comments().list().await?;
    Ok(Html(state.templates.comments(&comments)?))
}

/// POST /comments/{comment_id}/delete - delete, then back to the owning post
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
) -> Result<Redirect, ApiError> {
    let owner = state.db.comments().delete(id).await?;

    tracing::info!(comment_id = id, post_id = %owner, "comment deleted");
    Ok(Redirect::to(&post_path(owner)))
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/comments/", get(list_comments))
        .route("/comments/{comment_id}/delete", post(delete_comment))
}
