//! Exit record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee's exit record.
///
/// At most one exit record exists per employee. There are no exit-level
/// sub-states: the record existing at all is what makes an exit active, and
/// deleting it is the explicit reversal path (which also reverts the
/// employee's directory status to active).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitRecord {
    /// Unique identifier for the exit record.
    pub id: Uuid,
    /// The exiting employee.
    pub employee_id: Uuid,
    /// The organization the record belongs to.
    pub organization_id: Uuid,
    /// The date the resignation was tendered.
    pub resignation_date: NaiveDate,
    /// The employee's final working day; offboarding task due dates are
    /// computed backwards from this date.
    pub last_working_day: NaiveDate,
    /// The stated reason for leaving.
    pub reason_for_leaving: String,
    /// Free-text notes from the exit interview.
    pub exit_interview_feedback: String,
    /// Whether the employee is eligible for rehire.
    pub is_eligible_for_rehire: bool,
}
