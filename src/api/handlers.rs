//! HTTP request handlers for the Employee Lifecycle Engine API.
//!
//! Handlers stay thin: they extract the operation context from headers,
//! hand the request to an engine, and map the result. The engines do the
//! logging of state transitions; handlers log request-level outcomes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use tracing::info;
use uuid::Uuid;

use crate::engine::{
    AdhocTask, EditAdjustment, EditProbation, InitiateExit, NewTemplateTask, StartProbation,
    SubmitAdjustment,
};
use crate::models::{Employee, OperationContext};

use super::request::{AsOfQuery, CreateEmployeeRequest, CreateTemplateRequest};
use super::response::{AdjustmentView, ApiErrorResponse, ListEnvelope, ProbationView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee).get(list_employees))
        .route("/departments", get(list_departments))
        .route("/templates", post(create_template).get(list_templates))
        .route("/templates/seed", post(seed_templates))
        .route("/templates/:id", delete(delete_template))
        .route(
            "/templates/:id/tasks",
            post(add_template_task).get(list_template_tasks),
        )
        .route("/templates/:id/tasks/:task_id", delete(delete_template_task))
        .route("/exits", post(initiate_exit).get(list_exits))
        .route("/exits/:id", delete(delete_exit))
        .route("/exits/:id/summary", get(exit_summary))
        .route("/exits/:id/tasks", post(add_exit_task).get(list_exit_tasks))
        .route("/exits/:id/template/:template_id", post(apply_template))
        .route("/tasks/:id/toggle", post(toggle_task))
        .route("/tasks/:id", delete(delete_task))
        .route("/probations", post(start_probation).get(list_probations))
        .route("/probations/ending-soon", get(ending_soon))
        .route(
            "/probations/:id",
            put(edit_probation).delete(delete_probation),
        )
        .route("/probations/:id/confirm", post(confirm_probation))
        .route("/probations/:id/extend", post(extend_probation))
        .route(
            "/adjustments",
            post(submit_adjustment).get(list_adjustments),
        )
        .route(
            "/adjustments/:id",
            put(edit_adjustment).delete(delete_adjustment),
        )
        .route("/adjustments/:id/approve", post(approve_adjustment))
        .route("/adjustments/:id/reject", post(reject_adjustment))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Employees & departments (demo directory)
// ---------------------------------------------------------------------------

async fn create_employee(
    State(state): State<AppState>,
    ctx: OperationContext,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let employee = state.store().add_employee(Employee {
        id: Uuid::new_v4(),
        organization_id: ctx.organization_id,
        department_id: request.department_id,
        full_name: request.full_name,
        status: request.status,
        joining_date: request.joining_date,
    })?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn list_employees(
    State(state): State<AppState>,
    ctx: OperationContext,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    use crate::store::EmployeeDirectory;
    let employees = state.store().get_employees(ctx.organization_id).await?;
    Ok(Json(ListEnvelope::new(employees)))
}

async fn list_departments(
    State(state): State<AppState>,
    ctx: OperationContext,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    use crate::store::EmployeeDirectory;
    let departments = state.store().get_departments(ctx.organization_id).await?;
    Ok(Json(ListEnvelope::new(departments)))
}

// ---------------------------------------------------------------------------
// Offboarding templates
// ---------------------------------------------------------------------------

async fn create_template(
    State(state): State<AppState>,
    ctx: OperationContext,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let template = state
        .template_engine()
        .create_template(&ctx, request.name, request.description)
        .await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// Loads the configured seed templates into the caller's organization.
async fn seed_templates(
    State(state): State<AppState>,
    ctx: OperationContext,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let engine = state.template_engine();
    let mut created = Vec::new();
    for seed in state.template_seeds() {
        let template = engine
            .create_template(&ctx, seed.name.clone(), seed.description.clone())
            .await?;
        for task in &seed.tasks {
            engine
                .add_template_task(
                    &ctx,
                    template.id,
                    NewTemplateTask {
                        task_name: task.task_name.clone(),
                        description: task.description.clone(),
                        due_before_days: task.due_before_days,
                        default_assigned_role: task.default_assigned_role,
                    },
                )
                .await?;
        }
        created.push(template);
    }
    info!(
        organization_id = %ctx.organization_id,
        templates = created.len(),
        "seed templates loaded"
    );
    Ok((StatusCode::CREATED, Json(ListEnvelope::new(created))))
}

async fn list_templates(
    State(state): State<AppState>,
    ctx: OperationContext,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let templates = state.template_engine().list(&ctx).await?;
    Ok(Json(ListEnvelope::new(templates)))
}

async fn delete_template(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    state.template_engine().delete_template(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_template_task(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
    Json(input): Json<NewTemplateTask>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let task = state
        .template_engine()
        .add_template_task(&ctx, id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_template_tasks(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let tasks = state.template_engine().tasks(&ctx, id).await?;
    Ok(Json(ListEnvelope::new(tasks)))
}

async fn delete_template_task(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path((id, task_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    state
        .template_engine()
        .delete_template_task(&ctx, id, task_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Exits and offboarding tasks
// ---------------------------------------------------------------------------

async fn initiate_exit(
    State(state): State<AppState>,
    ctx: OperationContext,
    Json(input): Json<InitiateExit>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %input.employee_id,
        "processing exit initiation"
    );
    let outcome = state.exit_engine().initiate(&ctx, input).await?;
    info!(
        correlation_id = %correlation_id,
        exit_id = %outcome.exit.id,
        tasks_created = outcome
            .template
            .as_ref()
            .map(|t| t.created.len())
            .unwrap_or(0),
        "exit initiation completed"
    );
    Ok((StatusCode::CREATED, Json(outcome)))
}

async fn list_exits(
    State(state): State<AppState>,
    ctx: OperationContext,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let exits = state.exit_engine().list(&ctx).await?;
    Ok(Json(ListEnvelope::new(exits)))
}

async fn delete_exit(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    state.exit_engine().delete_exit(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn exit_summary(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let summary = state
        .exit_engine()
        .summary(&ctx, id, query.resolve())
        .await?;
    Ok(Json(summary))
}

async fn add_exit_task(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
    Json(input): Json<AdhocTask>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let task = state.exit_engine().add_task(&ctx, id, input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_exit_tasks(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let tasks = state.exit_engine().tasks(&ctx, id).await?;
    Ok(Json(ListEnvelope::new(tasks)))
}

async fn apply_template(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path((id, template_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let application = state
        .exit_engine()
        .apply_template(&ctx, id, template_id)
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

async fn toggle_task(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let task = state.exit_engine().toggle_task(&ctx, id).await?;
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    state.exit_engine().delete_task(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Probation
// ---------------------------------------------------------------------------

async fn start_probation(
    State(state): State<AppState>,
    ctx: OperationContext,
    Json(input): Json<StartProbation>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let period = state.probation_engine().start(&ctx, input).await?;
    Ok((StatusCode::CREATED, Json(period)))
}

async fn list_probations(
    State(state): State<AppState>,
    ctx: OperationContext,
    Query(query): Query<AsOfQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let today = query.resolve();
    let periods = state.probation_engine().list(&ctx).await?;
    let views: Vec<ProbationView> = periods
        .into_iter()
        .map(|p| ProbationView::at(p, today))
        .collect();
    Ok(Json(ListEnvelope::new(views)))
}

async fn confirm_probation(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let period = state
        .probation_engine()
        .confirm(&ctx, id, query.resolve())
        .await?;
    Ok(Json(period))
}

async fn extend_probation(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let period = state.probation_engine().extend(&ctx, id).await?;
    Ok(Json(period))
}

async fn edit_probation(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
    Json(input): Json<EditProbation>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let period = state.probation_engine().edit(&ctx, id, input).await?;
    Ok(Json(period))
}

async fn delete_probation(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    state.probation_engine().delete(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn ending_soon(
    State(state): State<AppState>,
    ctx: OperationContext,
    Query(query): Query<AsOfQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let today = query.resolve();
    let periods = state.probation_engine().ending_soon(&ctx, today).await?;
    let views: Vec<ProbationView> = periods
        .into_iter()
        .map(|p| ProbationView::at(p, today))
        .collect();
    Ok(Json(ListEnvelope::new(views)))
}

// ---------------------------------------------------------------------------
// Attendance adjustments
// ---------------------------------------------------------------------------

async fn submit_adjustment(
    State(state): State<AppState>,
    ctx: OperationContext,
    Json(input): Json<SubmitAdjustment>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let request = state.adjustment_engine().submit(&ctx, input).await?;
    Ok((StatusCode::CREATED, Json(AdjustmentView::from(request))))
}

async fn list_adjustments(
    State(state): State<AppState>,
    ctx: OperationContext,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let requests = state.adjustment_engine().list(&ctx).await?;
    let views: Vec<AdjustmentView> = requests.into_iter().map(AdjustmentView::from).collect();
    Ok(Json(ListEnvelope::new(views)))
}

async fn edit_adjustment(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
    Json(input): Json<EditAdjustment>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let request = state.adjustment_engine().edit(&ctx, id, input).await?;
    Ok(Json(AdjustmentView::from(request)))
}

async fn approve_adjustment(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let request = state.adjustment_engine().approve(&ctx, id).await?;
    Ok(Json(AdjustmentView::from(request)))
}

async fn reject_adjustment(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let request = state.adjustment_engine().reject(&ctx, id).await?;
    Ok(Json(AdjustmentView::from(request)))
}

async fn delete_adjustment(
    State(state): State<AppState>,
    ctx: OperationContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    state.adjustment_engine().delete(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
