//! `AuthPainter` extractor — resolves the acting painter from the
//! `x-painter-id` header set by the upstream gateway.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use minihub_core::error::AppError;
use minihub_core::types::PainterId;
use minihub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the authenticated painter's ID.
const PAINTER_ID_HEADER: &str = "x-painter-id";

/// Extracted painter context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthPainter(pub RequestContext);

impl AuthPainter {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthPainter {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthPainter {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(PAINTER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing x-painter-id header"))?;

        let painter_id = header
            .parse::<PainterId>()
            .map_err(|_| AppError::authentication("Invalid painter ID"))?;

        // The gateway vouches for the header, but the painter must exist.
        state
            .painter_repo
            .find_by_id(painter_id)
            .await?
            .ok_or_else(|| AppError::authentication("Unknown painter"))?;

        Ok(AuthPainter(RequestContext::new(painter_id)))
    }
}
