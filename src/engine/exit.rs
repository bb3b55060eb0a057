//! Exit/offboarding state machine.
//!
//! An exit has two states: no record, or an active record. Initiation
//! creates the record, terminates the employee in the directory, and
//! best-effort applies an offboarding template; deleting the record is the
//! single reversal path and reverts the employee to active.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{adhoc_task, completion_percent, generate_tasks, is_overdue};
use crate::error::{LifecycleError, LifecycleResult};
use crate::models::{
    AssignedRole, EmployeeStatus, ExitRecord, OffboardingTask, OperationContext, TaskStatus,
};
use crate::store::{EmployeeDirectory, ExitRecordStore, OffboardingTaskStore, TemplateStore};

/// Input for initiating an exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiateExit {
    /// The exiting employee.
    pub employee_id: Uuid,
    /// The date the resignation was tendered.
    pub resignation_date: NaiveDate,
    /// The employee's final working day.
    pub last_working_day: NaiveDate,
    /// The stated reason for leaving.
    pub reason_for_leaving: String,
    /// Exit interview notes, if already captured.
    #[serde(default)]
    pub exit_interview_feedback: String,
    /// Whether the employee is eligible for rehire.
    pub is_eligible_for_rehire: bool,
    /// Offboarding template to apply on initiation, if any.
    #[serde(default)]
    pub template_id: Option<Uuid>,
}

/// Input for adding a single ad-hoc offboarding task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdhocTask {
    /// The task's display name.
    pub task_name: String,
    /// A description of the work.
    #[serde(default)]
    pub description: String,
    /// The due date; defaults to the exit's last working day.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// The role to assign the task to.
    pub assigned_to: AssignedRole,
}

/// The outcome of applying a template to an exit record.
///
/// Task generation is a non-atomic batch: some tasks can be created while
/// others fail, and nothing already created is rolled back. The counts
/// here report exactly what happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateApplication {
    /// How many tasks the template asked for.
    pub requested: usize,
    /// The tasks that were created.
    pub created: Vec<OffboardingTask>,
    /// How many task creations failed.
    pub failed: usize,
    /// Set when the application could not run at all (missing or empty
    /// template during best-effort initiation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TemplateApplication {
    fn not_applied(message: String) -> Self {
        Self {
            requested: 0,
            created: Vec::new(),
            failed: 0,
            error: Some(message),
        }
    }
}

/// The outcome of exit initiation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitInitiation {
    /// The created exit record.
    pub exit: ExitRecord,
    /// The template application report, when a template was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateApplication>,
}

/// Derived progress for one exit record. Computed on demand, never
/// stored, and zero-safe for records with no tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitSummary {
    /// The exit record the summary describes.
    pub exit_id: Uuid,
    /// Total number of offboarding tasks.
    pub total_tasks: usize,
    /// Number of completed tasks.
    pub completed_tasks: usize,
    /// Rounded completion percentage (0 when there are no tasks).
    pub progress: u8,
    /// Number of incomplete tasks past their due date.
    pub overdue_tasks: usize,
    /// Number of tasks assigned to a role outside the fixed set.
    pub unassigned_tasks: usize,
}

/// The exit/offboarding state machine.
pub struct ExitEngine<S> {
    store: Arc<S>,
}

impl<S> ExitEngine<S>
where
    S: EmployeeDirectory + ExitRecordStore + OffboardingTaskStore + TemplateStore,
{
    /// Creates an engine over the given collaborators.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches an exit record, hiding records outside the caller's
    /// organization.
    async fn scoped_exit(
        &self,
        ctx: &OperationContext,
        exit_id: Uuid,
    ) -> LifecycleResult<ExitRecord> {
        let exit = self.store.get_exit(exit_id).await?;
        if exit.organization_id != ctx.organization_id {
            return Err(LifecycleError::ExitNotFound { exit_id });
        }
        Ok(exit)
    }

    /// Initiates an exit for an employee.
    ///
    /// Preconditions: the employee has no existing exit record and is not
    /// already terminated. On success the exit record exists and the
    /// employee's directory status is `Terminated`.
    ///
    /// When a template is requested, its application is best-effort: a
    /// missing, empty, or partially-failing template never rolls back the
    /// record or the status change. The returned
    /// [`TemplateApplication`] reports what actually happened.
    pub async fn initiate(
        &self,
        ctx: &OperationContext,
        input: InitiateExit,
    ) -> LifecycleResult<ExitInitiation> {
        let employee = self.store.get_employee(input.employee_id).await?;
        if employee.organization_id != ctx.organization_id {
            return Err(LifecycleError::EmployeeNotFound {
                employee_id: input.employee_id,
            });
        }
        if employee.status == EmployeeStatus::Terminated {
            return Err(LifecycleError::EmployeeAlreadyTerminated {
                employee_id: employee.id,
            });
        }
        if self
            .store
            .find_exit_by_employee(employee.id)
            .await?
            .is_some()
        {
            return Err(LifecycleError::ExitAlreadyExists {
                employee_id: employee.id,
            });
        }

        let record = ExitRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            organization_id: ctx.organization_id,
            resignation_date: input.resignation_date,
            last_working_day: input.last_working_day,
            reason_for_leaving: input.reason_for_leaving,
            exit_interview_feedback: input.exit_interview_feedback,
            is_eligible_for_rehire: input.is_eligible_for_rehire,
        };
        let record = self.store.create_exit(record).await?;
        self.store
            .set_employee_status(employee.id, EmployeeStatus::Terminated)
            .await?;
        info!(
            exit_id = %record.id,
            employee_id = %employee.id,
            last_working_day = %record.last_working_day,
            "exit initiated"
        );

        let template = match input.template_id {
            Some(template_id) => Some(match self.apply_template(ctx, record.id, template_id).await
            {
                Ok(application) => application,
                Err(err) => {
                    warn!(
                        exit_id = %record.id,
                        template_id = %template_id,
                        error = %err,
                        "template not applied during initiation"
                    );
                    TemplateApplication::not_applied(err.to_string())
                }
            }),
            None => None,
        };

        Ok(ExitInitiation {
            exit: record,
            template,
        })
    }

    /// Applies an offboarding template to an existing exit record.
    ///
    /// Errors if the template has no blueprint tasks. The generation batch
    /// is non-atomic: per-task store failures are counted and skipped, and
    /// already-created tasks stay created.
    ///
    /// Re-applying a template is not guarded against and duplicates its
    /// tasks; whether to block, merge, or allow that is the caller's
    /// product decision.
    pub async fn apply_template(
        &self,
        ctx: &OperationContext,
        exit_id: Uuid,
        template_id: Uuid,
    ) -> LifecycleResult<TemplateApplication> {
        let exit = self.scoped_exit(ctx, exit_id).await?;
        let template = self.store.get_template(template_id).await?;
        if template.organization_id != ctx.organization_id {
            return Err(LifecycleError::TemplateNotFound { template_id });
        }
        let blueprints = self.store.list_template_tasks(template_id).await?;
        if blueprints.is_empty() {
            return Err(LifecycleError::TemplateEmpty { template_id });
        }

        let tasks = generate_tasks(&exit, &blueprints);
        let requested = tasks.len();
        let mut created = Vec::with_capacity(requested);
        let mut failed = 0usize;
        for task in tasks {
            match self.store.create_task(task).await {
                Ok(task) => created.push(task),
                Err(err) => {
                    failed += 1;
                    warn!(
                        exit_id = %exit.id,
                        template_id = %template.id,
                        error = %err,
                        "task creation failed during template application"
                    );
                }
            }
        }
        info!(
            exit_id = %exit.id,
            template_id = %template.id,
            created = created.len(),
            failed,
            "template applied"
        );

        Ok(TemplateApplication {
            requested,
            created,
            failed,
            error: None,
        })
    }

    /// Adds a single ad-hoc task to an exit record.
    pub async fn add_task(
        &self,
        ctx: &OperationContext,
        exit_id: Uuid,
        input: AdhocTask,
    ) -> LifecycleResult<OffboardingTask> {
        if input.task_name.trim().is_empty() {
            return Err(LifecycleError::MissingField {
                field: "task_name".to_string(),
            });
        }
        let exit = self.scoped_exit(ctx, exit_id).await?;
        let task = adhoc_task(
            &exit,
            input.task_name,
            input.description,
            input.due_date,
            input.assigned_to,
        );
        let task = self.store.create_task(task).await?;
        info!(exit_id = %exit.id, task_id = %task.id, "ad-hoc task added");
        Ok(task)
    }

    /// Toggles a task's completion state.
    ///
    /// Pending → Completed stamps `completed_at`; Completed → Pending
    /// clears it. No other task field changes through this transition.
    pub async fn toggle_task(
        &self,
        ctx: &OperationContext,
        task_id: Uuid,
    ) -> LifecycleResult<OffboardingTask> {
        let mut task = self.store.get_task(task_id).await?;
        self.scoped_exit(ctx, task.exit_id).await?;
        match task.status {
            TaskStatus::Pending => {
                task.status = TaskStatus::Completed;
                task.completed_at = Some(Utc::now());
            }
            TaskStatus::Completed => {
                task.status = TaskStatus::Pending;
                task.completed_at = None;
            }
        }
        let task = self.store.update_task(task).await?;
        info!(task_id = %task.id, status = ?task.status, "task toggled");
        Ok(task)
    }

    /// Deletes a task, in any completion state.
    pub async fn delete_task(&self, ctx: &OperationContext, task_id: Uuid) -> LifecycleResult<()> {
        let task = self.store.get_task(task_id).await?;
        self.scoped_exit(ctx, task.exit_id).await?;
        self.store.delete_task(task_id).await?;
        info!(task_id = %task_id, "task deleted");
        Ok(())
    }

    /// Lists an exit record's tasks.
    pub async fn tasks(
        &self,
        ctx: &OperationContext,
        exit_id: Uuid,
    ) -> LifecycleResult<Vec<OffboardingTask>> {
        self.scoped_exit(ctx, exit_id).await?;
        self.store.list_tasks(exit_id).await
    }

    /// Lists the organization's exit records.
    pub async fn list(&self, ctx: &OperationContext) -> LifecycleResult<Vec<ExitRecord>> {
        self.store.list_exits(ctx.organization_id).await
    }

    /// Deletes an exit record, cascading its tasks and reverting the
    /// employee's directory status to `Active`.
    ///
    /// This is the only path that reverses [`ExitEngine::initiate`].
    pub async fn delete_exit(&self, ctx: &OperationContext, exit_id: Uuid) -> LifecycleResult<()> {
        let exit = self.scoped_exit(ctx, exit_id).await?;
        self.store.delete_tasks_for_exit(exit.id).await?;
        self.store.delete_exit(exit.id).await?;
        self.store
            .set_employee_status(exit.employee_id, EmployeeStatus::Active)
            .await?;
        info!(
            exit_id = %exit.id,
            employee_id = %exit.employee_id,
            "exit deleted, employee reverted to active"
        );
        Ok(())
    }

    /// Computes the derived progress for an exit record as of `today`.
    pub async fn summary(
        &self,
        ctx: &OperationContext,
        exit_id: Uuid,
        today: NaiveDate,
    ) -> LifecycleResult<ExitSummary> {
        let exit = self.scoped_exit(ctx, exit_id).await?;
        let tasks = self.store.list_tasks(exit.id).await?;
        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.is_completed()).count();
        let overdue_tasks = tasks
            .iter()
            .filter(|t| is_overdue(Some(t.due_date), t.is_completed(), today))
            .count();
        let unassigned_tasks = tasks
            .iter()
            .filter(|t| t.assigned_to == AssignedRole::Unknown)
            .count();
        Ok(ExitSummary {
            exit_id: exit.id,
            total_tasks,
            completed_tasks,
            progress: completion_percent(completed_tasks, total_tasks),
            overdue_tasks,
            unassigned_tasks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, OffboardingTemplate, TemplateTask};
    use crate::store::MemoryStore;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    struct Fixture {
        store: Arc<MemoryStore>,
        engine: ExitEngine<MemoryStore>,
        ctx: OperationContext,
        employee: Employee,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let ctx = OperationContext::new(Uuid::new_v4(), Uuid::new_v4());
        let employee = store
            .add_employee(Employee {
                id: Uuid::new_v4(),
                organization_id: ctx.organization_id,
                department_id: None,
                full_name: "Asha Nair".to_string(),
                status: EmployeeStatus::Active,
                joining_date: date("2022-01-10"),
            })
            .unwrap();
        Fixture {
            engine: ExitEngine::new(Arc::clone(&store)),
            store,
            ctx,
            employee,
        }
    }

    fn initiate_input(employee_id: Uuid) -> InitiateExit {
        InitiateExit {
            employee_id,
            resignation_date: date("2024-05-31"),
            last_working_day: date("2024-06-30"),
            reason_for_leaving: "relocation".to_string(),
            exit_interview_feedback: String::new(),
            is_eligible_for_rehire: true,
            template_id: None,
        }
    }

    async fn seed_template(
        f: &Fixture,
        offsets: &[u32],
    ) -> OffboardingTemplate {
        let template = OffboardingTemplate {
            id: Uuid::new_v4(),
            organization_id: f.ctx.organization_id,
            name: "Standard offboarding".to_string(),
            description: String::new(),
        };
        f.store.create_template(template.clone()).await.unwrap();
        for (i, &offset) in offsets.iter().enumerate() {
            f.store
                .create_template_task(TemplateTask {
                    id: Uuid::new_v4(),
                    template_id: template.id,
                    task_name: format!("task {i}"),
                    description: String::new(),
                    due_before_days: offset,
                    default_assigned_role: AssignedRole::It,
                })
                .await
                .unwrap();
        }
        template
    }

    #[tokio::test]
    async fn test_initiate_creates_record_and_terminates_employee() {
        let f = fixture();
        let outcome = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap();

        assert_eq!(outcome.exit.employee_id, f.employee.id);
        assert!(outcome.template.is_none());

        let employee = f.store.get_employee(f.employee.id).await.unwrap();
        assert_eq!(employee.status, EmployeeStatus::Terminated);
    }

    #[tokio::test]
    async fn test_initiate_twice_is_rejected_before_any_write() {
        let f = fixture();
        f.engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap();

        // Revert the status manually so only the existing record blocks.
        f.store
            .set_employee_status(f.employee.id, EmployeeStatus::Active)
            .await
            .unwrap();

        let err = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::ExitAlreadyExists { .. }));
        assert_eq!(f.engine.list(&f.ctx).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_initiate_rejects_terminated_employee() {
        let f = fixture();
        f.store
            .set_employee_status(f.employee.id, EmployeeStatus::Terminated)
            .await
            .unwrap();

        let err = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::EmployeeAlreadyTerminated { .. }
        ));
    }

    /// The {0, 3, 7} template scenario: last working day 2024-06-30.
    #[tokio::test]
    async fn test_initiate_with_template_generates_due_dates() {
        let f = fixture();
        let template = seed_template(&f, &[0, 3, 7]).await;
        let mut input = initiate_input(f.employee.id);
        input.template_id = Some(template.id);

        let outcome = f.engine.initiate(&f.ctx, input).await.unwrap();
        let application = outcome.template.unwrap();
        assert_eq!(application.requested, 3);
        assert_eq!(application.failed, 0);
        assert!(application.error.is_none());

        let mut due_dates: Vec<NaiveDate> =
            application.created.iter().map(|t| t.due_date).collect();
        due_dates.sort();
        assert_eq!(
            due_dates,
            vec![date("2024-06-23"), date("2024-06-27"), date("2024-06-30")]
        );
        assert!(
            application
                .created
                .iter()
                .all(|t| t.status == TaskStatus::Pending)
        );
    }

    #[tokio::test]
    async fn test_initiate_with_empty_template_still_succeeds() {
        let f = fixture();
        let template = seed_template(&f, &[]).await;
        let mut input = initiate_input(f.employee.id);
        input.template_id = Some(template.id);

        // Best-effort: the record and status change stand, the failure is
        // reported.
        let outcome = f.engine.initiate(&f.ctx, input).await.unwrap();
        let application = outcome.template.unwrap();
        assert!(application.error.is_some());
        assert!(application.created.is_empty());

        let employee = f.store.get_employee(f.employee.id).await.unwrap();
        assert_eq!(employee.status, EmployeeStatus::Terminated);
    }

    #[tokio::test]
    async fn test_apply_empty_template_errors() {
        let f = fixture();
        let template = seed_template(&f, &[]).await;
        let outcome = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap();

        let err = f
            .engine
            .apply_template(&f.ctx, outcome.exit.id, template.id)
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::TemplateEmpty { .. }));
    }

    #[tokio::test]
    async fn test_reapplying_template_duplicates_tasks() {
        let f = fixture();
        let template = seed_template(&f, &[1, 2]).await;
        let outcome = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap();

        f.engine
            .apply_template(&f.ctx, outcome.exit.id, template.id)
            .await
            .unwrap();
        f.engine
            .apply_template(&f.ctx, outcome.exit.id, template.id)
            .await
            .unwrap();

        assert_eq!(f.engine.tasks(&f.ctx, outcome.exit.id).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let f = fixture();
        let outcome = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap();
        let task = f
            .engine
            .add_task(
                &f.ctx,
                outcome.exit.id,
                AdhocTask {
                    task_name: "Exit interview".to_string(),
                    description: String::new(),
                    due_date: None,
                    assigned_to: AssignedRole::Hr,
                },
            )
            .await
            .unwrap();
        // Ad-hoc default: due on the last working day.
        assert_eq!(task.due_date, date("2024-06-30"));

        let completed = f.engine.toggle_task(&f.ctx, task.id).await.unwrap();
        assert_eq!(completed.status, TaskStatus::Completed);
        assert!(completed.completed_at.is_some());

        let pending = f.engine.toggle_task(&f.ctx, task.id).await.unwrap();
        assert_eq!(pending.status, TaskStatus::Pending);
        assert!(pending.completed_at.is_none());
    }

    #[tokio::test]
    async fn test_add_task_requires_name() {
        let f = fixture();
        let outcome = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap();

        let err = f
            .engine
            .add_task(
                &f.ctx,
                outcome.exit.id,
                AdhocTask {
                    task_name: "  ".to_string(),
                    description: String::new(),
                    due_date: None,
                    assigned_to: AssignedRole::Hr,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::MissingField { .. }));
    }

    #[tokio::test]
    async fn test_summary_quarter_complete() {
        let f = fixture();
        let template = seed_template(&f, &[0, 3, 7, 10]).await;
        let mut input = initiate_input(f.employee.id);
        input.template_id = Some(template.id);
        let outcome = f.engine.initiate(&f.ctx, input).await.unwrap();
        let first_task = outcome.template.unwrap().created[0].id;

        f.engine.toggle_task(&f.ctx, first_task).await.unwrap();

        let summary = f
            .engine
            .summary(&f.ctx, outcome.exit.id, date("2024-06-01"))
            .await
            .unwrap();
        assert_eq!(summary.total_tasks, 4);
        assert_eq!(summary.completed_tasks, 1);
        assert_eq!(summary.progress, 25);
        assert_eq!(summary.overdue_tasks, 0);
    }

    #[tokio::test]
    async fn test_summary_with_no_tasks_is_zero_safe() {
        let f = fixture();
        let outcome = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap();

        let summary = f
            .engine
            .summary(&f.ctx, outcome.exit.id, date("2024-06-01"))
            .await
            .unwrap();
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.progress, 0);
    }

    #[tokio::test]
    async fn test_summary_counts_overdue_pending_tasks_only() {
        let f = fixture();
        let template = seed_template(&f, &[0, 7]).await;
        let mut input = initiate_input(f.employee.id);
        input.template_id = Some(template.id);
        let outcome = f.engine.initiate(&f.ctx, input).await.unwrap();
        let created = outcome.template.unwrap().created;

        // Complete the task due 2024-06-23; leave the one due 2024-06-30.
        let early = created.iter().find(|t| t.due_date == date("2024-06-23")).unwrap();
        f.engine.toggle_task(&f.ctx, early.id).await.unwrap();

        // One day past the last working day: only the pending task counts.
        let summary = f
            .engine
            .summary(&f.ctx, outcome.exit.id, date("2024-07-01"))
            .await
            .unwrap();
        assert_eq!(summary.overdue_tasks, 1);
    }

    #[tokio::test]
    async fn test_delete_exit_cascades_and_reverts_status() {
        let f = fixture();
        let template = seed_template(&f, &[0, 3]).await;
        let mut input = initiate_input(f.employee.id);
        input.template_id = Some(template.id);
        let outcome = f.engine.initiate(&f.ctx, input).await.unwrap();

        f.engine.delete_exit(&f.ctx, outcome.exit.id).await.unwrap();

        assert!(f.engine.list(&f.ctx).await.unwrap().is_empty());
        let employee = f.store.get_employee(f.employee.id).await.unwrap();
        assert_eq!(employee.status, EmployeeStatus::Active);
        let err = f
            .engine
            .tasks(&f.ctx, outcome.exit.id)
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::ExitNotFound { .. }));
    }

    #[tokio::test]
    async fn test_foreign_organization_cannot_see_exit() {
        let f = fixture();
        let outcome = f
            .engine
            .initiate(&f.ctx, initiate_input(f.employee.id))
            .await
            .unwrap();

        let foreign = OperationContext::new(Uuid::new_v4(), Uuid::new_v4());
        let err = f
            .engine
            .summary(&foreign, outcome.exit.id, date("2024-06-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::ExitNotFound { .. }));
    }
}
