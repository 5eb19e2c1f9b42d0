use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::TypedHeader;
use chrono::{DateTime, NaiveDateTime};
use headers::{authorization::Bearer, Authorization};
use serde_json::Value;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::BookingSubmission;
use crate::services::booking::BookingService;

#[axum::debug_handler]
pub async fn submit_booking(
    State(state): State<Arc<AppConfig>>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
    Json(submission): Json<BookingSubmission>,
) -> Result<Json<Value>, AppError> {
    validate_submission(&submission)?;

    debug!(
        "Submitting booking for resource {} at {}",
        submission.resource_id, submission.appointment_time
    );

    let booking_service = BookingService::new(&state);
    let booking = booking_service
        .submit_booking(&submission, bearer.token())
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(booking))
}

pub fn validate_submission(submission: &BookingSubmission) -> Result<(), AppError> {
    if submission.resource_id.trim().is_empty() {
        return Err(AppError::ValidationError(
            "resource_id must not be empty".to_string(),
        ));
    }

    // Slots come off the booking window as naive datetimes; clients that
    // attach an offset are accepted too.
    let time = &submission.appointment_time;
    let parses = DateTime::parse_from_rfc3339(time).is_ok() || time.parse::<NaiveDateTime>().is_ok();
    if !parses {
        return Err(AppError::ValidationError(format!(
            "appointment_time is not an ISO-8601 datetime: {}",
            time
        )));
    }

    if submission.purpose.trim().is_empty() {
        return Err(AppError::ValidationError(
            "purpose must not be empty".to_string(),
        ));
    }

    Ok(())
}
