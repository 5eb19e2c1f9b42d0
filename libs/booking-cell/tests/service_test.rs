// libs/booking-cell/tests/service_test.rs
//
// Tests for the booking passthrough: submission validation and forwarding
// to a mocked upstream booking API.

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use booking_cell::handlers::validate_submission;
use booking_cell::models::BookingSubmission;
use booking_cell::services::booking::BookingService;
use shared_config::AppConfig;
use shared_models::error::AppError;

fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        booking_api_url: base_url.to_string(),
        booking_api_key: String::new(),
        bind_port: 3000,
    }
}

fn sample_submission() -> BookingSubmission {
    BookingSubmission {
        resource_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
        resource_snapshot: json!({
            "first_name": "Jane",
            "last_name": "Smith",
            "specialty": "Cardiology"
        }),
        appointment_time: "2025-06-20T10:30:00".to_string(),
        method: "video".to_string(),
        purpose: "Follow-up consultation".to_string(),
        notes: None,
    }
}

// ==============================================================================
// VALIDATION
// ==============================================================================

#[test]
fn test_valid_submission_passes() {
    assert!(validate_submission(&sample_submission()).is_ok());
}

#[test]
fn test_offset_datetime_is_accepted() {
    let mut submission = sample_submission();
    submission.appointment_time = "2025-06-20T10:30:00+02:00".to_string();

    assert!(validate_submission(&submission).is_ok());
}

#[test]
fn test_blank_resource_id_is_rejected() {
    let mut submission = sample_submission();
    submission.resource_id = "  ".to_string();

    assert_matches!(
        validate_submission(&submission),
        Err(AppError::ValidationError(_))
    );
}

#[test]
fn test_unparseable_appointment_time_is_rejected() {
    let mut submission = sample_submission();
    submission.appointment_time = "next tuesday at ten".to_string();

    assert_matches!(
        validate_submission(&submission),
        Err(AppError::ValidationError(_))
    );
}

#[test]
fn test_blank_purpose_is_rejected() {
    let mut submission = sample_submission();
    submission.purpose = String::new();

    assert_matches!(
        validate_submission(&submission),
        Err(AppError::ValidationError(_))
    );
}

// ==============================================================================
// UPSTREAM FORWARDING
// ==============================================================================

#[tokio::test]
async fn test_submission_is_forwarded_with_bearer_token() {
    let mock_server = MockServer::start().await;
    let submission = sample_submission();

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(header("authorization", "Bearer patient_token"))
        .and(body_json(&submission))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "booking-1",
            "status": "confirmed"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = BookingService::new(&test_config(&mock_server.uri()));
    let booking = service
        .submit_booking(&submission, "patient_token")
        .await
        .unwrap();

    assert_eq!(booking["id"], "booking-1");
    assert_eq!(booking["status"], "confirmed");
}

#[tokio::test]
async fn test_upstream_conflict_surfaces_as_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "slot already taken"})),
        )
        .mount(&mock_server)
        .await;

    let service = BookingService::new(&test_config(&mock_server.uri()));
    let result = service
        .submit_booking(&sample_submission(), "patient_token")
        .await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("conflict"), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_upstream_auth_failure_surfaces_as_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad token"})))
        .mount(&mock_server)
        .await;

    let service = BookingService::new(&test_config(&mock_server.uri()));
    let result = service
        .submit_booking(&sample_submission(), "expired_token")
        .await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("Authentication"), "unexpected error: {}", err);
}
