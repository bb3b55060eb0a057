//! Attendance-adjustment request model and related types.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The status of an attendance-adjustment request.
///
/// `Approved` and `Rejected` are terminal. Rejected requests remain
/// deletable; approved requests are preserved as history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentStatus {
    /// Awaiting an approve/reject decision; adjusted times are editable.
    Pending,
    /// Approved; no further edits permitted.
    Approved,
    /// Rejected; the record remains deletable.
    Rejected,
}

impl fmt::Display for AdjustmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdjustmentStatus::Pending => "pending",
            AdjustmentStatus::Approved => "approved",
            AdjustmentStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// A manual attendance-adjustment request.
///
/// Times are carried as `HH:MM[:SS]` strings exactly as captured from the
/// attendance source; parsing happens in
/// [`crate::calculation::hour_delta`], where malformed values degrade to a
/// zero-duration contribution instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceAdjustmentRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The employee whose attendance is being adjusted.
    pub employee_id: Uuid,
    /// The organization the request belongs to.
    pub organization_id: Uuid,
    /// The attendance date being adjusted.
    pub date: NaiveDate,
    /// Link to the existing attendance record, when one exists.
    pub attendance_id: Option<Uuid>,
    /// Snapshot of the original check-in time. Immutable after creation.
    pub original_check_in: Option<String>,
    /// Snapshot of the original check-out time. Immutable after creation.
    pub original_check_out: Option<String>,
    /// The requested check-in time. Editable while pending.
    pub adjusted_check_in: Option<String>,
    /// The requested check-out time. Editable while pending.
    pub adjusted_check_out: Option<String>,
    /// Why the adjustment is being requested.
    pub reason: String,
    /// The current status of the request.
    pub status: AdjustmentStatus,
    /// Who approved the request. Set only on approval.
    pub approved_by: Option<Uuid>,
    /// When the request was approved. Set only on approval.
    pub approved_at: Option<DateTime<Utc>>,
    /// Who rejected the request. Set only on rejection.
    pub rejected_by: Option<Uuid>,
    /// Who submitted the request.
    pub created_by: Uuid,
}

impl AttendanceAdjustmentRequest {
    /// Returns true while the request awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == AdjustmentStatus::Pending
    }

    /// The change in worked minutes this request asks for: the adjusted
    /// span minus the original span, with unparsable or inverted legs
    /// contributing zero duration.
    pub fn delta_minutes(&self) -> i64 {
        crate::calculation::hour_delta(
            self.original_check_in.as_deref(),
            self.original_check_out.as_deref(),
            self.adjusted_check_in.as_deref(),
            self.adjusted_check_out.as_deref(),
        )
    }

    /// The hour delta formatted for display, e.g. `"-0h 30m"`.
    pub fn formatted_delta(&self) -> String {
        crate::calculation::format_hour_delta(self.delta_minutes())
    }
}
