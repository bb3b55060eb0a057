//! Error types for the Employee Lifecycle Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure mode of the lifecycle state machines. Precondition
//! violations get their own named variants so callers can reject a
//! transition before any write happens.

use thiserror::Error;
use uuid::Uuid;

use crate::models::AdjustmentStatus;

/// The main error type for the Employee Lifecycle Engine.
///
/// All engine and store operations return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use lifecycle_engine::error::LifecycleError;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let error = LifecycleError::ExitAlreadyExists { employee_id: id };
/// assert_eq!(
///     error.to_string(),
///     format!("Employee {id} already has an exit record"),
/// );
/// ```
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// An employee was not found in the directory.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was looked up.
        employee_id: Uuid,
    },

    /// Exit initiation was attempted for an employee that already has an
    /// exit record.
    #[error("Employee {employee_id} already has an exit record")]
    ExitAlreadyExists {
        /// The employee the duplicate initiation targeted.
        employee_id: Uuid,
    },

    /// Exit initiation was attempted for an already-terminated employee.
    #[error("Employee {employee_id} is already terminated")]
    EmployeeAlreadyTerminated {
        /// The employee whose status is already `Terminated`.
        employee_id: Uuid,
    },

    /// An exit record was not found.
    #[error("Exit record not found: {exit_id}")]
    ExitNotFound {
        /// The exit record id that was looked up.
        exit_id: Uuid,
    },

    /// An offboarding task was not found.
    #[error("Offboarding task not found: {task_id}")]
    TaskNotFound {
        /// The task id that was looked up.
        task_id: Uuid,
    },

    /// An offboarding template was not found.
    #[error("Offboarding template not found: {template_id}")]
    TemplateNotFound {
        /// The template id that was looked up.
        template_id: Uuid,
    },

    /// A template blueprint task was not found.
    #[error("Template task not found: {template_task_id}")]
    TemplateTaskNotFound {
        /// The blueprint id that was looked up.
        template_task_id: Uuid,
    },

    /// A template with no blueprint tasks was applied to an exit record.
    #[error("Template {template_id} has no tasks to apply")]
    TemplateEmpty {
        /// The empty template.
        template_id: Uuid,
    },

    /// A probation period was not found.
    #[error("Probation period not found: {period_id}")]
    ProbationNotFound {
        /// The period id that was looked up.
        period_id: Uuid,
    },

    /// Probation start was attempted while the employee already has an open
    /// (non-completed) period.
    #[error("Employee {employee_id} already has an open probation period")]
    ProbationAlreadyOpen {
        /// The employee with the existing open period.
        employee_id: Uuid,
    },

    /// Probation start was attempted for an employee whose directory status
    /// is not `OnProbation`.
    #[error("Employee {employee_id} is not on probation")]
    EmployeeNotOnProbation {
        /// The employee whose status did not match.
        employee_id: Uuid,
    },

    /// Confirm or extend was attempted on a period that is already
    /// completed.
    #[error("Probation period {period_id} is already completed")]
    ProbationClosed {
        /// The completed period.
        period_id: Uuid,
    },

    /// An attendance-adjustment request was not found.
    #[error("Adjustment request not found: {request_id}")]
    AdjustmentNotFound {
        /// The request id that was looked up.
        request_id: Uuid,
    },

    /// A pending-only transition (edit, approve, reject) was attempted on a
    /// request that is no longer pending.
    #[error("Adjustment request {request_id} is {status}, not pending")]
    AdjustmentNotPending {
        /// The request the transition targeted.
        request_id: Uuid,
        /// The status the request was actually in.
        status: AdjustmentStatus,
    },

    /// Deletion was attempted on a request that is not rejected.
    #[error("Adjustment request {request_id} is {status}; only rejected requests may be deleted")]
    AdjustmentNotDeletable {
        /// The request the deletion targeted.
        request_id: Uuid,
        /// The status the request was actually in.
        status: AdjustmentStatus,
    },

    /// A submission whose adjusted times do not differ from the original
    /// snapshot.
    #[error("Adjustment request changes nothing: adjusted times equal the original times")]
    AdjustmentUnchanged,

    /// A required field was missing or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The field that was absent or empty.
        field: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A failure reported by a backing store or remote collaborator,
    /// propagated unchanged. The engine performs no automatic retry.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return [`LifecycleError`].
pub type LifecycleResult<T> = Result<T, LifecycleError>;
