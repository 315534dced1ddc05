use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};

use crate::pagination::PaginationResult;
use crate::query::QueryParams;

/// Extracts the request's query string as an ordered [`QueryParams`].
/// Never rejects; a request without a query yields an empty mapping.
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.uri.query().map(QueryParams::parse).unwrap_or_default())
    }
}

impl IntoResponse for PaginationResult {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
