//! Handlers for the `/packages` resource.
//!
//! Every request carries the full draft snapshot; nothing is stored between
//! calls. A draft that fails validation still answers 200, with the errors
//! in the payload. Only malformed requests and unknown kinds are errors.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tripdesk_core::package::{Label, PackageKind, Period, PickupOption, ValidDraft};
use tripdesk_core::slug;
use tripdesk_core::validation::{self, ErrorSet};

use crate::error::AppResult;
use crate::response::DataResponse;

// ── Form options ─────────────────────────────────────────────────────

/// Choices the dashboard form offers for one package kind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub kind: PackageKind,
    pub types: &'static [&'static str],
    pub labels: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_options: Option<&'static [&'static str]>,
}

impl FormOptions {
    pub fn for_kind(kind: PackageKind) -> Self {
        let (periods, pickup_options) = match kind {
            PackageKind::Tour => (Some(Period::VALUES), None),
            PackageKind::Transfer => (None, Some(PickupOption::VALUES)),
        };
        Self {
            kind,
            types: kind.type_options(),
            labels: Label::VALUES,
            periods,
            pickup_options,
        }
    }
}

/// GET /api/v1/packages/{kind}/options
pub async fn options(Path(kind): Path<String>) -> AppResult<Json<DataResponse<FormOptions>>> {
    let kind = PackageKind::parse(&kind)?;
    Ok(Json(DataResponse {
        data: FormOptions::for_kind(kind),
    }))
}

// ── Validation ───────────────────────────────────────────────────────

/// Which passes the validate endpoint runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Per-field rules and refinements only.
    Schema,
    /// Schema pass plus the FAQ completeness pass.
    #[default]
    Full,
}

/// Query parameters for the validate endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateParams {
    #[serde(default)]
    pub phase: Phase,
}

/// Result of validating one draft. `draft` is the normalized draft, present
/// only when `errors` is empty.
#[derive(Debug, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: ErrorSet,
    pub draft: Option<ValidDraft>,
}

impl From<Result<ValidDraft, ErrorSet>> for ValidationOutcome {
    fn from(result: Result<ValidDraft, ErrorSet>) -> Self {
        match result {
            Ok(draft) => Self {
                valid: true,
                errors: ErrorSet::new(),
                draft: Some(draft),
            },
            Err(errors) => Self {
                valid: false,
                errors,
                draft: None,
            },
        }
    }
}

/// POST /api/v1/packages/{kind}/validate?phase=schema|full
///
/// Validate a draft snapshot. Defaults to both passes.
pub async fn validate(
    Path(kind): Path<String>,
    params: Result<Query<ValidateParams>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidationOutcome>>> {
    let kind = PackageKind::parse(&kind)?;
    let Query(params) = params?;
    let Json(draft) = payload?;

    let result = match params.phase {
        Phase::Schema => validation::validate(kind, &draft),
        Phase::Full => validation::validate_draft(kind, &draft),
    };
    let outcome = ValidationOutcome::from(result);

    tracing::info!(
        %kind,
        phase = ?params.phase,
        valid = outcome.valid,
        error_count = outcome.errors.len(),
        "Validated package draft"
    );

    Ok(Json(DataResponse { data: outcome }))
}

// ── Slug ─────────────────────────────────────────────────────────────

/// Request body for slug generation.
#[derive(Debug, Deserialize)]
pub struct SlugRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct SlugResponse {
    pub slug: String,
}

/// POST /api/v1/packages/slug
///
/// A title with no letters or digits yields an empty slug.
pub async fn generate_slug(
    payload: Result<Json<SlugRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<SlugResponse>>> {
    let Json(request) = payload?;
    Ok(Json(DataResponse {
        data: SlugResponse {
            slug: slug::generate_slug(&request.title),
        },
    }))
}
