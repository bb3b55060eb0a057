//! In-memory implementation of the store traits.
//!
//! Backs the test suite and the demo API surface. Collections are plain
//! vectors behind one `RwLock`, which preserves insertion order (template
//! blueprints are an ordered set) and mirrors the last-write-wins
//! semantics of the real backing stores.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{LifecycleError, LifecycleResult};
use crate::models::{
    AttendanceAdjustmentRequest, AttendanceRecord, Department, Employee, EmployeeStatus,
    ExitRecord, OffboardingTask, OffboardingTemplate, ProbationPeriod, TemplateTask,
};

use super::{
    AdjustmentStore, AttendanceStore, EmployeeDirectory, ExitRecordStore, OffboardingTaskStore,
    ProbationStore, TemplateStore,
};

#[derive(Debug, Default)]
struct State {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    exits: Vec<ExitRecord>,
    tasks: Vec<OffboardingTask>,
    templates: Vec<OffboardingTemplate>,
    template_tasks: Vec<TemplateTask>,
    periods: Vec<ProbationPeriod>,
    attendance: Vec<AttendanceRecord>,
    adjustments: Vec<AttendanceAdjustmentRequest>,
}

/// An in-memory store implementing every collaborator trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> LifecycleResult<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(|_| LifecycleError::Store {
            message: "state lock poisoned".to_string(),
        })
    }

    fn write(&self) -> LifecycleResult<RwLockWriteGuard<'_, State>> {
        self.state.write().map_err(|_| LifecycleError::Store {
            message: "state lock poisoned".to_string(),
        })
    }

    /// Seeds an employee record. The directory is external in production;
    /// tests and the demo surface populate it through this.
    pub fn add_employee(&self, employee: Employee) -> LifecycleResult<Employee> {
        let mut state = self.write()?;
        state.employees.push(employee.clone());
        Ok(employee)
    }

    /// Seeds a department record.
    pub fn add_department(&self, department: Department) -> LifecycleResult<Department> {
        let mut state = self.write()?;
        state.departments.push(department.clone());
        Ok(department)
    }

    /// Seeds an attendance record.
    pub fn add_attendance(&self, record: AttendanceRecord) -> LifecycleResult<AttendanceRecord> {
        let mut state = self.write()?;
        state.attendance.push(record.clone());
        Ok(record)
    }
}

impl EmployeeDirectory for MemoryStore {
    async fn get_employees(&self, organization_id: Uuid) -> LifecycleResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(state
            .employees
            .iter()
            .filter(|e| e.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn get_employee(&self, id: Uuid) -> LifecycleResult<Employee> {
        let state = self.read()?;
        state
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(LifecycleError::EmployeeNotFound { employee_id: id })
    }

    async fn set_employee_status(
        &self,
        id: Uuid,
        status: EmployeeStatus,
    ) -> LifecycleResult<Employee> {
        let mut state = self.write()?;
        let employee = state
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(LifecycleError::EmployeeNotFound { employee_id: id })?;
        employee.status = status;
        Ok(employee.clone())
    }

    async fn get_departments(&self, organization_id: Uuid) -> LifecycleResult<Vec<Department>> {
        let state = self.read()?;
        Ok(state
            .departments
            .iter()
            .filter(|d| d.organization_id == organization_id)
            .cloned()
            .collect())
    }
}

impl ExitRecordStore for MemoryStore {
    async fn list_exits(&self, organization_id: Uuid) -> LifecycleResult<Vec<ExitRecord>> {
        let state = self.read()?;
        Ok(state
            .exits
            .iter()
            .filter(|x| x.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn get_exit(&self, id: Uuid) -> LifecycleResult<ExitRecord> {
        let state = self.read()?;
        state
            .exits
            .iter()
            .find(|x| x.id == id)
            .cloned()
            .ok_or(LifecycleError::ExitNotFound { exit_id: id })
    }

    async fn find_exit_by_employee(
        &self,
        employee_id: Uuid,
    ) -> LifecycleResult<Option<ExitRecord>> {
        let state = self.read()?;
        Ok(state
            .exits
            .iter()
            .find(|x| x.employee_id == employee_id)
            .cloned())
    }

    async fn create_exit(&self, record: ExitRecord) -> LifecycleResult<ExitRecord> {
        let mut state = self.write()?;
        state.exits.push(record.clone());
        Ok(record)
    }

    async fn delete_exit(&self, id: Uuid) -> LifecycleResult<()> {
        let mut state = self.write()?;
        let before = state.exits.len();
        state.exits.retain(|x| x.id != id);
        if state.exits.len() == before {
            return Err(LifecycleError::ExitNotFound { exit_id: id });
        }
        Ok(())
    }
}

impl OffboardingTaskStore for MemoryStore {
    async fn list_tasks(&self, exit_id: Uuid) -> LifecycleResult<Vec<OffboardingTask>> {
        let state = self.read()?;
        let mut tasks: Vec<OffboardingTask> = state
            .tasks
            .iter()
            .filter(|t| t.exit_id == exit_id)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(tasks)
    }

    async fn get_task(&self, id: Uuid) -> LifecycleResult<OffboardingTask> {
        let state = self.read()?;
        state
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(LifecycleError::TaskNotFound { task_id: id })
    }

    async fn create_task(&self, task: OffboardingTask) -> LifecycleResult<OffboardingTask> {
        let mut state = self.write()?;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task: OffboardingTask) -> LifecycleResult<OffboardingTask> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(LifecycleError::TaskNotFound { task_id: task.id })?;
        *stored = task.clone();
        Ok(task)
    }

    async fn delete_task(&self, id: Uuid) -> LifecycleResult<()> {
        let mut state = self.write()?;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(LifecycleError::TaskNotFound { task_id: id });
        }
        Ok(())
    }

    async fn delete_tasks_for_exit(&self, exit_id: Uuid) -> LifecycleResult<()> {
        let mut state = self.write()?;
        state.tasks.retain(|t| t.exit_id != exit_id);
        Ok(())
    }
}

impl TemplateStore for MemoryStore {
    async fn list_templates(
        &self,
        organization_id: Uuid,
    ) -> LifecycleResult<Vec<OffboardingTemplate>> {
        let state = self.read()?;
        Ok(state
            .templates
            .iter()
            .filter(|t| t.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn get_template(&self, id: Uuid) -> LifecycleResult<OffboardingTemplate> {
        let state = self.read()?;
        state
            .templates
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(LifecycleError::TemplateNotFound { template_id: id })
    }

    async fn create_template(
        &self,
        template: OffboardingTemplate,
    ) -> LifecycleResult<OffboardingTemplate> {
        let mut state = self.write()?;
        state.templates.push(template.clone());
        Ok(template)
    }

    async fn delete_template(&self, id: Uuid) -> LifecycleResult<()> {
        let mut state = self.write()?;
        let before = state.templates.len();
        state.templates.retain(|t| t.id != id);
        if state.templates.len() == before {
            return Err(LifecycleError::TemplateNotFound { template_id: id });
        }
        Ok(())
    }

    async fn list_template_tasks(&self, template_id: Uuid) -> LifecycleResult<Vec<TemplateTask>> {
        let state = self.read()?;
        Ok(state
            .template_tasks
            .iter()
            .filter(|t| t.template_id == template_id)
            .cloned()
            .collect())
    }

    async fn create_template_task(&self, task: TemplateTask) -> LifecycleResult<TemplateTask> {
        let mut state = self.write()?;
        state.template_tasks.push(task.clone());
        Ok(task)
    }

    async fn delete_template_task(&self, id: Uuid) -> LifecycleResult<()> {
        let mut state = self.write()?;
        let before = state.template_tasks.len();
        state.template_tasks.retain(|t| t.id != id);
        if state.template_tasks.len() == before {
            return Err(LifecycleError::TemplateTaskNotFound {
                template_task_id: id,
            });
        }
        Ok(())
    }

    async fn delete_template_tasks_for_template(&self, template_id: Uuid) -> LifecycleResult<()> {
        let mut state = self.write()?;
        state.template_tasks.retain(|t| t.template_id != template_id);
        Ok(())
    }
}

impl ProbationStore for MemoryStore {
    async fn list_periods(&self, organization_id: Uuid) -> LifecycleResult<Vec<ProbationPeriod>> {
        let state = self.read()?;
        Ok(state
            .periods
            .iter()
            .filter(|p| p.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn get_period(&self, id: Uuid) -> LifecycleResult<ProbationPeriod> {
        let state = self.read()?;
        state
            .periods
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(LifecycleError::ProbationNotFound { period_id: id })
    }

    async fn find_open_period(
        &self,
        employee_id: Uuid,
    ) -> LifecycleResult<Option<ProbationPeriod>> {
        let state = self.read()?;
        Ok(state
            .periods
            .iter()
            .find(|p| p.employee_id == employee_id && p.is_open())
            .cloned())
    }

    async fn create_period(&self, period: ProbationPeriod) -> LifecycleResult<ProbationPeriod> {
        let mut state = self.write()?;
        state.periods.push(period.clone());
        Ok(period)
    }

    async fn update_period(&self, period: ProbationPeriod) -> LifecycleResult<ProbationPeriod> {
        let mut state = self.write()?;
        let stored = state
            .periods
            .iter_mut()
            .find(|p| p.id == period.id)
            .ok_or(LifecycleError::ProbationNotFound {
                period_id: period.id,
            })?;
        *stored = period.clone();
        Ok(period)
    }

    async fn delete_period(&self, id: Uuid) -> LifecycleResult<()> {
        let mut state = self.write()?;
        let before = state.periods.len();
        state.periods.retain(|p| p.id != id);
        if state.periods.len() == before {
            return Err(LifecycleError::ProbationNotFound { period_id: id });
        }
        Ok(())
    }
}

impl AttendanceStore for MemoryStore {
    async fn get_attendance_by_employee_date(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> LifecycleResult<Option<AttendanceRecord>> {
        let state = self.read()?;
        Ok(state
            .attendance
            .iter()
            .find(|a| a.employee_id == employee_id && a.date == date)
            .cloned())
    }
}

impl AdjustmentStore for MemoryStore {
    async fn list_adjustments(
        &self,
        organization_id: Uuid,
    ) -> LifecycleResult<Vec<AttendanceAdjustmentRequest>> {
        let state = self.read()?;
        Ok(state
            .adjustments
            .iter()
            .filter(|r| r.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn get_adjustment(&self, id: Uuid) -> LifecycleResult<AttendanceAdjustmentRequest> {
        let state = self.read()?;
        state
            .adjustments
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(LifecycleError::AdjustmentNotFound { request_id: id })
    }

    async fn create_adjustment(
        &self,
        request: AttendanceAdjustmentRequest,
    ) -> LifecycleResult<AttendanceAdjustmentRequest> {
        let mut state = self.write()?;
        state.adjustments.push(request.clone());
        Ok(request)
    }

    async fn update_adjustment(
        &self,
        request: AttendanceAdjustmentRequest,
    ) -> LifecycleResult<AttendanceAdjustmentRequest> {
        let mut state = self.write()?;
        let stored = state
            .adjustments
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or(LifecycleError::AdjustmentNotFound {
                request_id: request.id,
            })?;
        *stored = request.clone();
        Ok(request)
    }

    async fn delete_adjustment(&self, id: Uuid) -> LifecycleResult<()> {
        let mut state = self.write()?;
        let before = state.adjustments.len();
        state.adjustments.retain(|r| r.id != id);
        if state.adjustments.len() == before {
            return Err(LifecycleError::AdjustmentNotFound { request_id: id });
        }
        Ok(())
    }
}
