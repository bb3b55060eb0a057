//! Response types for the Employee Lifecycle Engine API.
//!
//! This module defines the error response structures, the error → status
//! mapping, and the canonical list envelope every list endpoint uses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::{days_left, progress_percent};
use crate::error::LifecycleError;
use crate::models::{AttendanceAdjustmentRequest, ProbationPeriod};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a bad-request response.
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new(code, message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LifecycleError> for ApiErrorResponse {
    fn from(error: LifecycleError) -> Self {
        use LifecycleError::*;
        let (status, code) = match &error {
            EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            ExitNotFound { .. } => (StatusCode::NOT_FOUND, "EXIT_NOT_FOUND"),
            TaskNotFound { .. } => (StatusCode::NOT_FOUND, "TASK_NOT_FOUND"),
            TemplateNotFound { .. } => (StatusCode::NOT_FOUND, "TEMPLATE_NOT_FOUND"),
            TemplateTaskNotFound { .. } => (StatusCode::NOT_FOUND, "TEMPLATE_TASK_NOT_FOUND"),
            ProbationNotFound { .. } => (StatusCode::NOT_FOUND, "PROBATION_NOT_FOUND"),
            AdjustmentNotFound { .. } => (StatusCode::NOT_FOUND, "ADJUSTMENT_NOT_FOUND"),
            ExitAlreadyExists { .. } => (StatusCode::CONFLICT, "EXIT_ALREADY_EXISTS"),
            EmployeeAlreadyTerminated { .. } => {
                (StatusCode::CONFLICT, "EMPLOYEE_ALREADY_TERMINATED")
            }
            TemplateEmpty { .. } => (StatusCode::CONFLICT, "TEMPLATE_EMPTY"),
            ProbationAlreadyOpen { .. } => (StatusCode::CONFLICT, "PROBATION_ALREADY_OPEN"),
            EmployeeNotOnProbation { .. } => (StatusCode::CONFLICT, "EMPLOYEE_NOT_ON_PROBATION"),
            ProbationClosed { .. } => (StatusCode::CONFLICT, "PROBATION_CLOSED"),
            AdjustmentNotPending { .. } => (StatusCode::CONFLICT, "ADJUSTMENT_NOT_PENDING"),
            AdjustmentNotDeletable { .. } => (StatusCode::CONFLICT, "ADJUSTMENT_NOT_DELETABLE"),
            AdjustmentUnchanged => (StatusCode::BAD_REQUEST, "ADJUSTMENT_UNCHANGED"),
            MissingField { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ConfigNotFound { .. } | ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            Store { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

/// The canonical list response shape: `{"data": [...]}`.
///
/// Serialization always emits the wrapped form. Deserialization accepts
/// the three shapes historically produced by list endpoints — a bare
/// array, `{"data": [...]}`, and `{"data": {"data": [...]}}` — and
/// normalizes all of them to one sequence, so nothing past this adapter
/// ever sees the variability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEnvelope<T> {
    /// The items.
    pub data: Vec<T>,
}

impl<T> ListEnvelope<T> {
    /// Wraps items in the canonical envelope.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<'de, T> Deserialize<'de> for ListEnvelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Nested<T> {
            data: Vec<T>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape<T> {
            Bare(Vec<T>),
            Wrapped { data: Vec<T> },
            DoubleWrapped { data: Nested<T> },
        }

        let data = match Shape::deserialize(deserializer)? {
            Shape::Bare(items) => items,
            Shape::Wrapped { data } => data,
            Shape::DoubleWrapped { data } => data.data,
        };
        Ok(Self { data })
    }
}

/// A probation period together with its derived, date-interpolated
/// progress as of a given day.
#[derive(Debug, Clone, Serialize)]
pub struct ProbationView {
    /// The stored period.
    #[serde(flatten)]
    pub period: ProbationPeriod,
    /// Percent of the period elapsed, clamped to [0, 100].
    pub progress: u8,
    /// Whole days until the period ends; negative once past.
    pub days_left: i64,
}

impl ProbationView {
    /// Evaluates a period's derived fields as of `today`.
    pub fn at(period: ProbationPeriod, today: NaiveDate) -> Self {
        let progress = progress_percent(period.start_date, period.end_date, today);
        let remaining = days_left(period.end_date, today);
        Self {
            period,
            progress,
            days_left: remaining,
        }
    }
}

/// An adjustment request together with its derived hour delta.
#[derive(Debug, Clone, Serialize)]
pub struct AdjustmentView {
    /// The stored request.
    #[serde(flatten)]
    pub request: AttendanceAdjustmentRequest,
    /// The requested change in worked minutes.
    pub delta_minutes: i64,
    /// The delta formatted for display, e.g. `"-0h 30m"`.
    pub hour_delta: String,
}

impl From<AttendanceAdjustmentRequest> for AdjustmentView {
    fn from(request: AttendanceAdjustmentRequest) -> Self {
        let delta_minutes = request.delta_minutes();
        let hour_delta = request.formatted_delta();
        Self {
            request,
            delta_minutes,
            hour_delta,
        }
    }
}
