//! Offboarding template model and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of roles an offboarding task can be assigned to.
///
/// Role values arriving from the wire that are not in this set deserialize
/// to [`AssignedRole::Unknown`]. Tasks assigned to `Unknown` are accepted
/// but unassignable — a data-quality risk surfaced in the exit summary, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignedRole {
    /// Human resources.
    Hr,
    /// IT administration.
    It,
    /// The employee's line manager.
    Manager,
    /// Finance/payroll.
    Finance,
    /// Facilities and physical assets.
    Facilities,
    /// A role value outside the fixed set.
    #[serde(other)]
    Unknown,
}

/// A named offboarding template holding an ordered set of task blueprints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffboardingTemplate {
    /// Unique identifier for the template.
    pub id: Uuid,
    /// The organization the template belongs to.
    pub organization_id: Uuid,
    /// The template's display name.
    pub name: String,
    /// A description of when to use the template.
    pub description: String,
}

/// A task blueprint inside an offboarding template.
///
/// Blueprints carry a relative offset (`due_before_days`); the task
/// generator turns them into concrete tasks with absolute due dates
/// computed backwards from an exit record's last working day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateTask {
    /// Unique identifier for the blueprint.
    pub id: Uuid,
    /// The owning template.
    pub template_id: Uuid,
    /// The name of the task to generate.
    pub task_name: String,
    /// A description of the task to generate.
    pub description: String,
    /// How many days before the last working day the task is due.
    pub due_before_days: u32,
    /// The role generated tasks are assigned to by default.
    pub default_assigned_role: AssignedRole,
}
