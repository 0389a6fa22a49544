//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tripdesk_api::error::AppError;
use tripdesk_core::error::CoreError;
use tripdesk_core::form::FormState;
use tripdesk_core::package::PackageKind;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::UnknownKind maps to 404 with UNKNOWN_KIND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_kind_returns_404() {
    let core = PackageKind::parse("hotel").unwrap_err();
    assert_matches!(core, CoreError::UnknownKind(ref k) if k == "hotel");

    let (status, json) = error_to_response(core.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "UNKNOWN_KIND");
    assert_eq!(
        json["error"],
        "Unknown package kind 'hotel'. Must be one of: tour, transfer"
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Invalid field path 'tags.x'".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid field path 'tags.x'");
}

// ---------------------------------------------------------------------------
// Test: form state errors map to 409 with CONFLICT code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_before_validation_returns_409() {
    let err = AppError::Core(CoreError::NotValidated(FormState::Dirty));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(
        json["error"],
        "Please validate the form before submitting (form is dirty)"
    );
}

#[tokio::test]
async fn invalid_transition_returns_409() {
    let err = AppError::Core(CoreError::InvalidTransition {
        from: FormState::Dirty,
        to: FormState::Valid,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}
