//! Request types and extractors for the Employee Lifecycle Engine API.
//!
//! Engine input types double as request bodies; this module holds the
//! API-only shapes plus the header extractor that builds the explicit
//! [`OperationContext`] every operation requires.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EmployeeStatus, OperationContext};

use super::response::ApiErrorResponse;

/// Header carrying the organization an operation is scoped to.
pub const ORGANIZATION_HEADER: &str = "x-organization-id";
/// Header carrying the acting user.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Request body for seeding an employee into the demo directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The employee's display name.
    pub full_name: String,
    /// The department the employee belongs to, if assigned.
    #[serde(default)]
    pub department_id: Option<Uuid>,
    /// The initial lifecycle status.
    pub status: EmployeeStatus,
    /// The date the employee joined the organization.
    pub joining_date: NaiveDate,
}

/// Request body for creating an offboarding template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    /// The template's display name.
    pub name: String,
    /// A description of when to use the template.
    #[serde(default)]
    pub description: String,
}

/// Optional `as_of` date for derived read views; defaults to the current
/// local date.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AsOfQuery {
    /// The date to evaluate the view at.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl AsOfQuery {
    /// Resolves the query to a concrete date.
    pub fn resolve(self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

fn header_uuid(headers: &HeaderMap, name: &'static str) -> Result<Uuid, ApiErrorResponse> {
    let value = headers.get(name).ok_or_else(|| {
        ApiErrorResponse::bad_request("MISSING_CONTEXT", format!("missing header: {name}"))
    })?;
    let value = value.to_str().map_err(|_| {
        ApiErrorResponse::bad_request("INVALID_CONTEXT", format!("invalid header: {name}"))
    })?;
    Uuid::parse_str(value).map_err(|_| {
        ApiErrorResponse::bad_request(
            "INVALID_CONTEXT",
            format!("header {name} is not a valid UUID"),
        )
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for OperationContext
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let organization_id = header_uuid(&parts.headers, ORGANIZATION_HEADER)?;
        let actor_id = header_uuid(&parts.headers, ACTOR_HEADER)?;
        Ok(OperationContext::new(organization_id, actor_id))
    }
}
