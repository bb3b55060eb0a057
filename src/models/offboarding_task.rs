//! Offboarding task model and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AssignedRole;

/// The completion status of an offboarding task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task has not been completed.
    Pending,
    /// The task has been completed.
    Completed,
}

/// A concrete offboarding task belonging to an exit record.
///
/// The due date is absolute: it is derived once at creation time from the
/// exit record's last working day and a blueprint offset (or supplied
/// directly for ad-hoc tasks) and is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffboardingTask {
    /// Unique identifier for the task.
    pub id: Uuid,
    /// The owning exit record.
    pub exit_id: Uuid,
    /// The task's display name.
    pub task_name: String,
    /// A description of the work.
    pub description: String,
    /// The absolute date the task is due.
    pub due_date: NaiveDate,
    /// The completion status.
    pub status: TaskStatus,
    /// When the task was completed. Set on Pending → Completed, cleared on
    /// the reverse toggle.
    pub completed_at: Option<DateTime<Utc>>,
    /// The role the task is assigned to.
    pub assigned_to: AssignedRole,
}

impl OffboardingTask {
    /// Returns true if the task has been completed.
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
