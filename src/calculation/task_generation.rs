//! Offboarding task generation from template blueprints.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::models::{AssignedRole, ExitRecord, OffboardingTask, TaskStatus, TemplateTask};

/// Computes the absolute due date for a blueprint offset.
///
/// `due_before_days` counts backwards from the exit's last working day; an
/// offset of zero is due on the last working day itself. Offsets that
/// would underflow the calendar saturate at the minimum representable
/// date.
pub fn due_date_for(last_working_day: NaiveDate, due_before_days: u32) -> NaiveDate {
    last_working_day
        .checked_sub_days(Days::new(u64::from(due_before_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Instantiates concrete offboarding tasks from a set of blueprints.
///
/// Every generated task starts as [`TaskStatus::Pending`] with
/// `due_date = exit.last_working_day - blueprint.due_before_days`. The due
/// date is fixed at this point and never recomputed.
///
/// Generation is **not idempotent**: calling it twice with the same
/// blueprints produces duplicate tasks. Preventing duplicate application
/// of a template to an exit is the calling state machine's responsibility.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lifecycle_engine::calculation::generate_tasks;
/// use lifecycle_engine::models::{AssignedRole, ExitRecord, TemplateTask};
/// use uuid::Uuid;
///
/// let exit = ExitRecord {
///     id: Uuid::new_v4(),
///     employee_id: Uuid::new_v4(),
///     organization_id: Uuid::new_v4(),
///     resignation_date: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
///     last_working_day: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
///     reason_for_leaving: String::new(),
///     exit_interview_feedback: String::new(),
///     is_eligible_for_rehire: true,
/// };
/// let blueprint = TemplateTask {
///     id: Uuid::new_v4(),
///     template_id: Uuid::new_v4(),
///     task_name: "Return badge".to_string(),
///     description: String::new(),
///     due_before_days: 3,
///     default_assigned_role: AssignedRole::Facilities,
/// };
///
/// let tasks = generate_tasks(&exit, &[blueprint]);
/// assert_eq!(tasks[0].due_date, NaiveDate::from_ymd_opt(2024, 6, 27).unwrap());
/// ```
pub fn generate_tasks(exit: &ExitRecord, blueprints: &[TemplateTask]) -> Vec<OffboardingTask> {
    blueprints
        .iter()
        .map(|blueprint| OffboardingTask {
            id: Uuid::new_v4(),
            exit_id: exit.id,
            task_name: blueprint.task_name.clone(),
            description: blueprint.description.clone(),
            due_date: due_date_for(exit.last_working_day, blueprint.due_before_days),
            status: TaskStatus::Pending,
            completed_at: None,
            assigned_to: blueprint.default_assigned_role,
        })
        .collect()
}

/// Builds a single ad-hoc task for an exit record, bypassing templates.
///
/// The caller supplies the due date; when omitted it defaults to the
/// exit's last working day.
pub fn adhoc_task(
    exit: &ExitRecord,
    task_name: String,
    description: String,
    due_date: Option<NaiveDate>,
    assigned_to: AssignedRole,
) -> OffboardingTask {
    OffboardingTask {
        id: Uuid::new_v4(),
        exit_id: exit.id,
        task_name,
        description,
        due_date: due_date.unwrap_or(exit.last_working_day),
        status: TaskStatus::Pending,
        completed_at: None,
        assigned_to,
    }
}
