//! Post pages: front page, post detail and the add-comment form

use std::fmt::Display;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::RowId;
use crate::http::server::AppState;
use crate::models::CommentContent;

/// Submitted add-comment form
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub content: Option<String>,
}

/// Location of a post's detail page.
pub fn post_path(id: impl Display) -> String {
    format!("/{}/", id)
}

/// GET / - list every post
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let posts = state.db.posts().list().await?;
    Ok(Html(state.templates.index(&posts)?))
}

/// GET /{post_id}/ - show one post with its comments
async fn show_post(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
) -> Result<Html<String>, ApiError> {
    let post = state.db.posts().get(id).await?;
    Ok(Html(state.templates.post(&post)?))
}

/// POST /{post_id}/ - add a comment, then back to the post
async fn add_comment(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, ApiError> {
    let content = CommentContent::new(form.content.as_deref().unwrap_or_default())?;
    let comment = state.db.comments().create(id, content).await?;

    tracing::info!(post_id = id, comment_id = comment.id, "comment added");
    Ok(Redirect::to(&post_path(id)))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/{post_id}/", get(show_post).post(add_comment))
}
