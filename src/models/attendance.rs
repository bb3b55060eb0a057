//! Attendance record shape, as returned by the external attendance lookup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raw attendance record for one employee on one date.
///
/// Check-in/check-out values are carried as the `HH:MM[:SS]` strings the
/// attendance source captured; they may be absent or malformed, and
/// downstream computations treat such legs as zero-duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee the record belongs to.
    pub employee_id: Uuid,
    /// The attendance date.
    pub date: NaiveDate,
    /// The captured check-in time, if any.
    pub check_in: Option<String>,
    /// The captured check-out time, if any.
    pub check_out: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_round_trip() {
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 4, 18).unwrap(),
            check_in: Some("08:57".to_string()),
            check_out: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
