use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::ResourceKind;
use crate::services::window::booking_window;

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// Pins the generation instant; defaults to the server's UTC wall clock.
    pub reference: Option<NaiveDateTime>,
}

#[axum::debug_handler]
pub async fn get_booking_window(
    State(_state): State<Arc<AppConfig>>,
    Path(kind): Path<String>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<Value>, AppError> {
    let kind = ResourceKind::parse(&kind)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown resource kind: {}", kind)))?;

    let reference = query.reference.unwrap_or_else(|| Utc::now().naive_utc());
    debug!("Generating booking window for {:?} at {}", kind, reference);

    let days = booking_window(reference, &kind.window_config());

    Ok(Json(json!({
        "kind": kind,
        "generated_at": reference,
        "days": days
    })))
}
