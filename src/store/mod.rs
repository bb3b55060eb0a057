//! Collaborator interfaces consumed by the lifecycle engine.
//!
//! The employee directory and every record store are external systems;
//! this module defines the traits the state machines talk to. All
//! operations are async and behave as request/response calls against a
//! remote store: failures propagate unchanged (no retry here), and no
//! locking discipline is assumed beyond the backing store's
//! last-write-wins semantics.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::LifecycleResult;
use crate::models::{
    AttendanceAdjustmentRequest, AttendanceRecord, Department, Employee, EmployeeStatus,
    ExitRecord, OffboardingTask, OffboardingTemplate, ProbationPeriod, TemplateTask,
};

/// Read access to the employee directory, plus the single status write the
/// lifecycle engine is allowed to make.
pub trait EmployeeDirectory: Send + Sync {
    /// Lists the employees of an organization.
    fn get_employees(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Vec<Employee>>> + Send;

    /// Fetches a single employee.
    fn get_employee(&self, id: Uuid) -> impl Future<Output = LifecycleResult<Employee>> + Send;

    /// Updates an employee's lifecycle status. The directory owns the
    /// record; this is the only employee field the engine ever writes.
    fn set_employee_status(
        &self,
        id: Uuid,
        status: EmployeeStatus,
    ) -> impl Future<Output = LifecycleResult<Employee>> + Send;

    /// Lists an organization's departments (display grouping only).
    fn get_departments(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Vec<Department>>> + Send;
}

/// Storage for exit records.
pub trait ExitRecordStore: Send + Sync {
    /// Lists an organization's exit records.
    fn list_exits(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Vec<ExitRecord>>> + Send;

    /// Fetches a single exit record.
    fn get_exit(&self, id: Uuid) -> impl Future<Output = LifecycleResult<ExitRecord>> + Send;

    /// Finds the exit record for an employee, if one exists.
    fn find_exit_by_employee(
        &self,
        employee_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Option<ExitRecord>>> + Send;

    /// Persists a new exit record.
    fn create_exit(
        &self,
        record: ExitRecord,
    ) -> impl Future<Output = LifecycleResult<ExitRecord>> + Send;

    /// Deletes an exit record.
    fn delete_exit(&self, id: Uuid) -> impl Future<Output = LifecycleResult<()>> + Send;
}

/// Storage for offboarding tasks, always filtered by their owning exit.
pub trait OffboardingTaskStore: Send + Sync {
    /// Lists the tasks belonging to an exit record, due-soonest first.
    fn list_tasks(
        &self,
        exit_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Vec<OffboardingTask>>> + Send;

    /// Fetches a single task.
    fn get_task(&self, id: Uuid) -> impl Future<Output = LifecycleResult<OffboardingTask>> + Send;

    /// Persists a new task.
    fn create_task(
        &self,
        task: OffboardingTask,
    ) -> impl Future<Output = LifecycleResult<OffboardingTask>> + Send;

    /// Replaces a task's stored state.
    fn update_task(
        &self,
        task: OffboardingTask,
    ) -> impl Future<Output = LifecycleResult<OffboardingTask>> + Send;

    /// Deletes a single task.
    fn delete_task(&self, id: Uuid) -> impl Future<Output = LifecycleResult<()>> + Send;

    /// Deletes every task belonging to an exit record.
    fn delete_tasks_for_exit(
        &self,
        exit_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<()>> + Send;
}

/// Storage for offboarding templates and their blueprint tasks.
pub trait TemplateStore: Send + Sync {
    /// Lists an organization's templates.
    fn list_templates(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Vec<OffboardingTemplate>>> + Send;

    /// Fetches a single template.
    fn get_template(
        &self,
        id: Uuid,
    ) -> impl Future<Output = LifecycleResult<OffboardingTemplate>> + Send;

    /// Persists a new template.
    fn create_template(
        &self,
        template: OffboardingTemplate,
    ) -> impl Future<Output = LifecycleResult<OffboardingTemplate>> + Send;

    /// Deletes a template (blueprints are cascaded by the engine).
    fn delete_template(&self, id: Uuid) -> impl Future<Output = LifecycleResult<()>> + Send;

    /// Lists a template's blueprint tasks in their defined order.
    fn list_template_tasks(
        &self,
        template_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Vec<TemplateTask>>> + Send;

    /// Persists a new blueprint task.
    fn create_template_task(
        &self,
        task: TemplateTask,
    ) -> impl Future<Output = LifecycleResult<TemplateTask>> + Send;

    /// Deletes a single blueprint task.
    fn delete_template_task(&self, id: Uuid) -> impl Future<Output = LifecycleResult<()>> + Send;

    /// Deletes every blueprint belonging to a template.
    fn delete_template_tasks_for_template(
        &self,
        template_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<()>> + Send;
}

/// Storage for probation periods.
pub trait ProbationStore: Send + Sync {
    /// Lists an organization's probation periods.
    fn list_periods(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Vec<ProbationPeriod>>> + Send;

    /// Fetches a single period.
    fn get_period(
        &self,
        id: Uuid,
    ) -> impl Future<Output = LifecycleResult<ProbationPeriod>> + Send;

    /// Finds an employee's open (non-completed) period, if any.
    fn find_open_period(
        &self,
        employee_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Option<ProbationPeriod>>> + Send;

    /// Persists a new period.
    fn create_period(
        &self,
        period: ProbationPeriod,
    ) -> impl Future<Output = LifecycleResult<ProbationPeriod>> + Send;

    /// Replaces a period's stored state.
    fn update_period(
        &self,
        period: ProbationPeriod,
    ) -> impl Future<Output = LifecycleResult<ProbationPeriod>> + Send;

    /// Deletes a period.
    fn delete_period(&self, id: Uuid) -> impl Future<Output = LifecycleResult<()>> + Send;
}

/// Read access to the external attendance source.
pub trait AttendanceStore: Send + Sync {
    /// Fetches the attendance record for an employee on a date, if one was
    /// captured.
    fn get_attendance_by_employee_date(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = LifecycleResult<Option<AttendanceRecord>>> + Send;
}

/// Storage for attendance-adjustment requests.
pub trait AdjustmentStore: Send + Sync {
    /// Lists an organization's adjustment requests.
    fn list_adjustments(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = LifecycleResult<Vec<AttendanceAdjustmentRequest>>> + Send;

    /// Fetches a single request.
    fn get_adjustment(
        &self,
        id: Uuid,
    ) -> impl Future<Output = LifecycleResult<AttendanceAdjustmentRequest>> + Send;

    /// Persists a new request.
    fn create_adjustment(
        &self,
        request: AttendanceAdjustmentRequest,
    ) -> impl Future<Output = LifecycleResult<AttendanceAdjustmentRequest>> + Send;

    /// Replaces a request's stored state.
    fn update_adjustment(
        &self,
        request: AttendanceAdjustmentRequest,
    ) -> impl Future<Output = LifecycleResult<AttendanceAdjustmentRequest>> + Send;

    /// Deletes a request.
    fn delete_adjustment(&self, id: Uuid) -> impl Future<Output = LifecycleResult<()>> + Send;
}
