//! Offboarding template management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{LifecycleError, LifecycleResult};
use crate::models::{AssignedRole, OffboardingTemplate, OperationContext, TemplateTask};
use crate::store::TemplateStore;

/// Input for adding a blueprint task to a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplateTask {
    /// The name of the task to generate.
    pub task_name: String,
    /// A description of the task to generate.
    #[serde(default)]
    pub description: String,
    /// How many days before the last working day generated tasks are due.
    pub due_before_days: u32,
    /// The role generated tasks are assigned to by default.
    ///
    /// Values outside the fixed role set arrive as
    /// [`AssignedRole::Unknown`] and are accepted; the resulting tasks
    /// are unassignable until corrected.
    pub default_assigned_role: AssignedRole,
}

/// Template and blueprint management.
pub struct TemplateEngine<S> {
    store: Arc<S>,
}

impl<S> TemplateEngine<S>
where
    S: TemplateStore,
{
    /// Creates an engine over the given template store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    async fn scoped_template(
        &self,
        ctx: &OperationContext,
        template_id: Uuid,
    ) -> LifecycleResult<OffboardingTemplate> {
        let template = self.store.get_template(template_id).await?;
        if template.organization_id != ctx.organization_id {
            return Err(LifecycleError::TemplateNotFound { template_id });
        }
        Ok(template)
    }

    /// Creates a named template.
    pub async fn create_template(
        &self,
        ctx: &OperationContext,
        name: String,
        description: String,
    ) -> LifecycleResult<OffboardingTemplate> {
        if name.trim().is_empty() {
            return Err(LifecycleError::MissingField {
                field: "name".to_string(),
            });
        }
        let template = OffboardingTemplate {
            id: Uuid::new_v4(),
            organization_id: ctx.organization_id,
            name,
            description,
        };
        let template = self.store.create_template(template).await?;
        info!(template_id = %template.id, name = %template.name, "template created");
        Ok(template)
    }

    /// Appends a blueprint task to a template.
    pub async fn add_template_task(
        &self,
        ctx: &OperationContext,
        template_id: Uuid,
        input: NewTemplateTask,
    ) -> LifecycleResult<TemplateTask> {
        if input.task_name.trim().is_empty() {
            return Err(LifecycleError::MissingField {
                field: "task_name".to_string(),
            });
        }
        let template = self.scoped_template(ctx, template_id).await?;
        let task = TemplateTask {
            id: Uuid::new_v4(),
            template_id: template.id,
            task_name: input.task_name,
            description: input.description,
            due_before_days: input.due_before_days,
            default_assigned_role: input.default_assigned_role,
        };
        let task = self.store.create_template_task(task).await?;
        info!(
            template_id = %template.id,
            template_task_id = %task.id,
            due_before_days = task.due_before_days,
            "template task added"
        );
        Ok(task)
    }

    /// Deletes a template and all of its blueprints.
    pub async fn delete_template(
        &self,
        ctx: &OperationContext,
        template_id: Uuid,
    ) -> LifecycleResult<()> {
        self.scoped_template(ctx, template_id).await?;
        self.store
            .delete_template_tasks_for_template(template_id)
            .await?;
        self.store.delete_template(template_id).await?;
        info!(template_id = %template_id, "template deleted");
        Ok(())
    }

    /// Deletes a single blueprint task.
    pub async fn delete_template_task(
        &self,
        ctx: &OperationContext,
        template_id: Uuid,
        template_task_id: Uuid,
    ) -> LifecycleResult<()> {
        self.scoped_template(ctx, template_id).await?;
        self.store.delete_template_task(template_task_id).await?;
        info!(template_task_id = %template_task_id, "template task deleted");
        Ok(())
    }

    /// Lists the organization's templates.
    pub async fn list(
        &self,
        ctx: &OperationContext,
    ) -> LifecycleResult<Vec<OffboardingTemplate>> {
        self.store.list_templates(ctx.organization_id).await
    }

    /// Lists a template's blueprints in their defined order.
    pub async fn tasks(
        &self,
        ctx: &OperationContext,
        template_id: Uuid,
    ) -> LifecycleResult<Vec<TemplateTask>> {
        self.scoped_template(ctx, template_id).await?;
        self.store.list_template_tasks(template_id).await
    }
}
