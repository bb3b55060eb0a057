//! Probation state machine.
//!
//! A period moves Active → Extended → Completed, where Completed is
//! terminal and both other states count as "open". Confirmation is the
//! transition that also flips the employee's directory status back to
//! active; deletion deliberately does not touch the directory (unlike
//! exit deletion — the asymmetry is inherited behavior, kept visible
//! rather than silently unified).

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculation::days_left;
use crate::config::LifecyclePolicy;
use crate::error::{LifecycleError, LifecycleResult};
use crate::models::{EmployeeStatus, OperationContext, ProbationPeriod, ProbationStatus};
use crate::store::{EmployeeDirectory, ProbationStore};

/// Input for starting a probation period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartProbation {
    /// The employee entering probation.
    pub employee_id: Uuid,
    /// First day of the period; defaults to the employee's joining date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the period; defaults to the start date plus the
    /// configured probation length.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Initial feedback, if any.
    #[serde(default)]
    pub feedback: String,
}

/// Input for the manual correction edit.
///
/// This is a deliberate escape hatch: every field is written through
/// as-is, and only required presence is validated. Use the named
/// transitions for normal operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditProbation {
    /// Corrected start date.
    pub start_date: NaiveDate,
    /// Corrected end date.
    pub end_date: NaiveDate,
    /// Corrected status.
    pub status: ProbationStatus,
    /// Corrected feedback; must be non-empty.
    pub feedback: String,
    /// Corrected confirmation date, if any.
    #[serde(default)]
    pub confirmation_date: Option<NaiveDate>,
}

/// The probation state machine.
pub struct ProbationEngine<S> {
    store: Arc<S>,
    policy: LifecyclePolicy,
}

impl<S> ProbationEngine<S>
where
    S: EmployeeDirectory + ProbationStore,
{
    /// Creates an engine over the given collaborators and policy.
    pub fn new(store: Arc<S>, policy: LifecyclePolicy) -> Self {
        Self { store, policy }
    }

    async fn scoped_period(
        &self,
        ctx: &OperationContext,
        period_id: Uuid,
    ) -> LifecycleResult<ProbationPeriod> {
        let period = self.store.get_period(period_id).await?;
        if period.organization_id != ctx.organization_id {
            return Err(LifecycleError::ProbationNotFound { period_id });
        }
        Ok(period)
    }

    /// Starts a probation period.
    ///
    /// Preconditions: the employee's directory status is `OnProbation`
    /// and no open period exists for them. The start date defaults to the
    /// joining date, the end date to start plus the policy's probation
    /// length (90 days by default).
    pub async fn start(
        &self,
        ctx: &OperationContext,
        input: StartProbation,
    ) -> LifecycleResult<ProbationPeriod> {
        let employee = self.store.get_employee(input.employee_id).await?;
        if employee.organization_id != ctx.organization_id {
            return Err(LifecycleError::EmployeeNotFound {
                employee_id: input.employee_id,
            });
        }
        if employee.status != EmployeeStatus::OnProbation {
            return Err(LifecycleError::EmployeeNotOnProbation {
                employee_id: employee.id,
            });
        }
        if self
            .store
            .find_open_period(employee.id)
            .await?
            .is_some()
        {
            return Err(LifecycleError::ProbationAlreadyOpen {
                employee_id: employee.id,
            });
        }

        let start_date = input.start_date.unwrap_or(employee.joining_date);
        let end_date = input
            .end_date
            .unwrap_or(start_date + Duration::days(i64::from(self.policy.default_probation_days)));
        let period = ProbationPeriod {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            organization_id: ctx.organization_id,
            start_date,
            end_date,
            status: ProbationStatus::Active,
            feedback: input.feedback,
            confirmation_date: None,
        };
        let period = self.store.create_period(period).await?;
        info!(
            period_id = %period.id,
            employee_id = %employee.id,
            start_date = %period.start_date,
            end_date = %period.end_date,
            "probation started"
        );
        Ok(period)
    }

    /// Confirms an employee, closing their probation period.
    ///
    /// Precondition: the period is open. Sets the period to Completed
    /// with `confirmation_date = today` and flips the employee's
    /// directory status to `Active`. Confirming an already-completed
    /// period is a caller error.
    pub async fn confirm(
        &self,
        ctx: &OperationContext,
        period_id: Uuid,
        today: NaiveDate,
    ) -> LifecycleResult<ProbationPeriod> {
        let mut period = self.scoped_period(ctx, period_id).await?;
        if !period.is_open() {
            return Err(LifecycleError::ProbationClosed { period_id });
        }
        period.status = ProbationStatus::Completed;
        period.confirmation_date = Some(today);
        let period = self.store.update_period(period).await?;
        self.store
            .set_employee_status(period.employee_id, EmployeeStatus::Active)
            .await?;
        info!(
            period_id = %period.id,
            employee_id = %period.employee_id,
            confirmation_date = %today,
            "probation confirmed"
        );
        Ok(period)
    }

    /// Extends an open probation period by the policy's fixed extension
    /// length (30 days by default).
    ///
    /// Appends an extension note to the feedback — never replaces it —
    /// and leaves the employee's directory status untouched.
    pub async fn extend(
        &self,
        ctx: &OperationContext,
        period_id: Uuid,
    ) -> LifecycleResult<ProbationPeriod> {
        let mut period = self.scoped_period(ctx, period_id).await?;
        if !period.is_open() {
            return Err(LifecycleError::ProbationClosed { period_id });
        }
        let days = self.policy.extension_days;
        period.end_date = period.end_date + Duration::days(i64::from(days));
        period.status = ProbationStatus::Extended;
        let note = format!("[extended {days} days to {}]", period.end_date);
        if period.feedback.is_empty() {
            period.feedback = note;
        } else {
            period.feedback.push('\n');
            period.feedback.push_str(&note);
        }
        let period = self.store.update_period(period).await?;
        info!(
            period_id = %period.id,
            end_date = %period.end_date,
            "probation extended"
        );
        Ok(period)
    }

    /// Directly overwrites a period's fields for manual correction.
    ///
    /// Only required presence is validated: feedback must be non-empty,
    /// start and end dates are required by shape. Anything else goes
    /// through unchecked, including status/confirmation combinations the
    /// named transitions would never produce.
    pub async fn edit(
        &self,
        ctx: &OperationContext,
        period_id: Uuid,
        input: EditProbation,
    ) -> LifecycleResult<ProbationPeriod> {
        if input.feedback.trim().is_empty() {
            return Err(LifecycleError::MissingField {
                field: "feedback".to_string(),
            });
        }
        let mut period = self.scoped_period(ctx, period_id).await?;
        period.start_date = input.start_date;
        period.end_date = input.end_date;
        period.status = input.status;
        period.feedback = input.feedback;
        period.confirmation_date = input.confirmation_date;
        let period = self.store.update_period(period).await?;
        info!(period_id = %period.id, "probation edited");
        Ok(period)
    }

    /// Deletes a probation period.
    ///
    /// The employee's directory status is left as-is; only exit-record
    /// deletion reverts a status.
    pub async fn delete(&self, ctx: &OperationContext, period_id: Uuid) -> LifecycleResult<()> {
        self.scoped_period(ctx, period_id).await?;
        self.store.delete_period(period_id).await?;
        info!(period_id = %period_id, "probation deleted");
        Ok(())
    }

    /// Lists the organization's probation periods.
    pub async fn list(&self, ctx: &OperationContext) -> LifecycleResult<Vec<ProbationPeriod>> {
        self.store.list_periods(ctx.organization_id).await
    }

    /// Lists open periods ending within the policy's window
    /// (`0 < days_left(end_date) <= 30` by default) as of `today`.
    pub async fn ending_soon(
        &self,
        ctx: &OperationContext,
        today: NaiveDate,
    ) -> LifecycleResult<Vec<ProbationPeriod>> {
        let window = i64::from(self.policy.ending_soon_window_days);
        let periods = self.store.list_periods(ctx.organization_id).await?;
        Ok(periods
            .into_iter()
            .filter(|p| {
                let remaining = days_left(p.end_date, today);
                p.is_open() && remaining > 0 && remaining <= window
            })
            .collect())
    }
}
