//! Employee model and related types.
//!
//! The employee record is owned by the external directory; the lifecycle
//! engine only ever reads it and writes the `status` field through
//! [`crate::store::EmployeeDirectory`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The lifecycle status of an employee in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// A confirmed, active employee.
    Active,
    /// An employee inside a probation period.
    OnProbation,
    /// An employee on extended leave.
    OnLeave,
    /// An employee whose record is inactive (e.g. suspended).
    Inactive,
    /// An employee with an initiated exit.
    Terminated,
}

/// An employee as seen by the lifecycle engine.
///
/// Only `status` is ever mutated by this crate, and only via the directory
/// collaborator; everything else is read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The organization the employee belongs to.
    pub organization_id: Uuid,
    /// The department the employee belongs to, if assigned.
    pub department_id: Option<Uuid>,
    /// The employee's display name.
    pub full_name: String,
    /// The current lifecycle status.
    pub status: EmployeeStatus,
    /// The date the employee joined the organization.
    pub joining_date: NaiveDate,
}

/// A department, used for display grouping only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: Uuid,
    /// The organization the department belongs to.
    pub organization_id: Uuid,
    /// The department's display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnProbation).unwrap(),
            "\"on_probation\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Terminated).unwrap(),
            "\"terminated\""
        );
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "organization_id": "00000000-0000-0000-0000-000000000002",
            "department_id": null,
            "full_name": "Asha Nair",
            "status": "on_probation",
            "joining_date": "2024-03-01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.full_name, "Asha Nair");
        assert_eq!(employee.status, EmployeeStatus::OnProbation);
        assert_eq!(
            employee.joining_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(employee.department_id.is_none());
    }

    #[test]
    fn test_employee_round_trip() {
        let employee = Employee {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            department_id: Some(Uuid::new_v4()),
            full_name: "Rosa Marquez".to_string(),
            status: EmployeeStatus::Active,
            joining_date: NaiveDate::from_ymd_opt(2022, 11, 14).unwrap(),
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
