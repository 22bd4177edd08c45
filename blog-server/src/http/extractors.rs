//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Numeric row id taken from the single path parameter.
///
/// Anything that is not an integer cannot name a row, so it is rejected as
/// not found rather than as a malformed request.
pub struct RowId(pub i64);

impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("missing path parameter: {}", e),
            })?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ApiError::NotFound {
                resource: "page",
                id: raw,
            })
    }
}
