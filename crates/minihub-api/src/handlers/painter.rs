//! Painter registration handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use minihub_core::error::AppError;
use minihub_entity::painter::Painter;
use minihub_service::painter::RegisterPainterRequest as SvcRegisterPainter;

use crate::dto::request::RegisterPainterRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/painters
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterPainterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Painter>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let painter = state
        .painter_service
        .register(SvcRegisterPainter { name: req.name })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(painter))))
}
