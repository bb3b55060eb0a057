//! Probation period model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The status of a probation period.
///
/// `Completed` is terminal; `Active` and `Extended` are both "open" states.
/// At most one open period may exist per employee at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbationStatus {
    /// The period is running with its original end date.
    Active,
    /// The period has been extended at least once.
    Extended,
    /// The employee has been confirmed; the period is closed.
    Completed,
}

/// A probation period for a single employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbationPeriod {
    /// Unique identifier for the period.
    pub id: Uuid,
    /// The employee under probation.
    pub employee_id: Uuid,
    /// The organization the period belongs to.
    pub organization_id: Uuid,
    /// The first day of the probation period.
    pub start_date: NaiveDate,
    /// The last day of the probation period.
    pub end_date: NaiveDate,
    /// The current status of the period.
    pub status: ProbationStatus,
    /// Free-text feedback; extension notes are appended here.
    pub feedback: String,
    /// The date the employee was confirmed. Set only when `status` is
    /// [`ProbationStatus::Completed`].
    pub confirmation_date: Option<NaiveDate>,
}

impl ProbationPeriod {
    /// Returns true while the period has not been completed.
    pub fn is_open(&self) -> bool {
        self.status != ProbationStatus::Completed
    }
}
