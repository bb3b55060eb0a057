//! Attendance-adjustment approval state machine.
//!
//! A request is pending until approved or rejected. Approval is final;
//! rejected requests stay around, editable by nobody but deletable, so
//! approved history is the only thing preserved forever.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{LifecycleError, LifecycleResult};
use crate::models::{AdjustmentStatus, AttendanceAdjustmentRequest, OperationContext};
use crate::store::{AdjustmentStore, AttendanceStore, EmployeeDirectory};

/// Input for submitting an adjustment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAdjustment {
    /// The employee whose attendance is being adjusted.
    pub employee_id: Uuid,
    /// The attendance date being adjusted.
    pub date: NaiveDate,
    /// The requested check-in time.
    #[serde(default)]
    pub adjusted_check_in: Option<String>,
    /// The requested check-out time.
    #[serde(default)]
    pub adjusted_check_out: Option<String>,
    /// Fallback original check-in, used only when no attendance record
    /// exists for the employee/date.
    #[serde(default)]
    pub original_check_in: Option<String>,
    /// Fallback original check-out, used only when no attendance record
    /// exists for the employee/date.
    #[serde(default)]
    pub original_check_out: Option<String>,
    /// Why the adjustment is being requested.
    pub reason: String,
}

/// Input for editing a pending request's adjusted times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditAdjustment {
    /// The new check-in time.
    #[serde(default)]
    pub adjusted_check_in: Option<String>,
    /// The new check-out time.
    #[serde(default)]
    pub adjusted_check_out: Option<String>,
}

/// The adjustment approval state machine.
pub struct AdjustmentEngine<S> {
    store: Arc<S>,
}

impl<S> AdjustmentEngine<S>
where
    S: EmployeeDirectory + AttendanceStore + AdjustmentStore,
{
    /// Creates an engine over the given collaborators.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    async fn scoped_request(
        &self,
        ctx: &OperationContext,
        request_id: Uuid,
    ) -> LifecycleResult<AttendanceAdjustmentRequest> {
        let request = self.store.get_adjustment(request_id).await?;
        if request.organization_id != ctx.organization_id {
            return Err(LifecycleError::AdjustmentNotFound { request_id });
        }
        Ok(request)
    }

    fn pending_only(request: &AttendanceAdjustmentRequest) -> LifecycleResult<()> {
        if !request.is_pending() {
            return Err(LifecycleError::AdjustmentNotPending {
                request_id: request.id,
                status: request.status,
            });
        }
        Ok(())
    }

    /// Submits an adjustment request.
    ///
    /// The original times are snapshotted from the attendance record for
    /// the employee/date when one exists, otherwise from the submitter's
    /// supplied values — a missing attendance record never blocks
    /// submission. At least one adjusted leg must differ from the
    /// resulting snapshot, and a non-empty reason is required.
    pub async fn submit(
        &self,
        ctx: &OperationContext,
        input: SubmitAdjustment,
    ) -> LifecycleResult<AttendanceAdjustmentRequest> {
        if input.reason.trim().is_empty() {
            return Err(LifecycleError::MissingField {
                field: "reason".to_string(),
            });
        }
        let employee = self.store.get_employee(input.employee_id).await?;
        if employee.organization_id != ctx.organization_id {
            return Err(LifecycleError::EmployeeNotFound {
                employee_id: input.employee_id,
            });
        }

        let attendance = self
            .store
            .get_attendance_by_employee_date(employee.id, input.date)
            .await?;
        let (attendance_id, original_check_in, original_check_out) = match attendance {
            Some(record) => (Some(record.id), record.check_in, record.check_out),
            None => (None, input.original_check_in, input.original_check_out),
        };

        if input.adjusted_check_in == original_check_in
            && input.adjusted_check_out == original_check_out
        {
            return Err(LifecycleError::AdjustmentUnchanged);
        }

        let request = AttendanceAdjustmentRequest {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            organization_id: ctx.organization_id,
            date: input.date,
            attendance_id,
            original_check_in,
            original_check_out,
            adjusted_check_in: input.adjusted_check_in,
            adjusted_check_out: input.adjusted_check_out,
            reason: input.reason,
            status: AdjustmentStatus::Pending,
            approved_by: None,
            approved_at: None,
            rejected_by: None,
            created_by: ctx.actor_id,
        };
        let request = self.store.create_adjustment(request).await?;
        info!(
            request_id = %request.id,
            employee_id = %employee.id,
            date = %request.date,
            "adjustment submitted"
        );
        Ok(request)
    }

    /// Updates a pending request's adjusted times.
    ///
    /// The original snapshot is immutable; only the adjusted legs move.
    pub async fn edit(
        &self,
        ctx: &OperationContext,
        request_id: Uuid,
        input: EditAdjustment,
    ) -> LifecycleResult<AttendanceAdjustmentRequest> {
        let mut request = self.scoped_request(ctx, request_id).await?;
        Self::pending_only(&request)?;
        request.adjusted_check_in = input.adjusted_check_in;
        request.adjusted_check_out = input.adjusted_check_out;
        let request = self.store.update_adjustment(request).await?;
        info!(request_id = %request.id, "adjustment edited");
        Ok(request)
    }

    /// Approves a pending request, recording who approved it and when.
    /// No further edits are permitted afterwards.
    pub async fn approve(
        &self,
        ctx: &OperationContext,
        request_id: Uuid,
    ) -> LifecycleResult<AttendanceAdjustmentRequest> {
        let mut request = self.scoped_request(ctx, request_id).await?;
        Self::pending_only(&request)?;
        request.status = AdjustmentStatus::Approved;
        request.approved_by = Some(ctx.actor_id);
        request.approved_at = Some(Utc::now());
        let request = self.store.update_adjustment(request).await?;
        info!(
            request_id = %request.id,
            approved_by = %ctx.actor_id,
            "adjustment approved"
        );
        Ok(request)
    }

    /// Rejects a pending request, recording who rejected it. The record
    /// stays, and becomes deletable.
    pub async fn reject(
        &self,
        ctx: &OperationContext,
        request_id: Uuid,
    ) -> LifecycleResult<AttendanceAdjustmentRequest> {
        let mut request = self.scoped_request(ctx, request_id).await?;
        Self::pending_only(&request)?;
        request.status = AdjustmentStatus::Rejected;
        request.rejected_by = Some(ctx.actor_id);
        let request = self.store.update_adjustment(request).await?;
        info!(
            request_id = %request.id,
            rejected_by = %ctx.actor_id,
            "adjustment rejected"
        );
        Ok(request)
    }

    /// Deletes a rejected request. Pending and approved requests cannot
    /// be deleted — approved history is preserved.
    pub async fn delete(&self, ctx: &OperationContext, request_id: Uuid) -> LifecycleResult<()> {
        let request = self.scoped_request(ctx, request_id).await?;
        if request.status != AdjustmentStatus::Rejected {
            return Err(LifecycleError::AdjustmentNotDeletable {
                request_id,
                status: request.status,
            });
        }
        self.store.delete_adjustment(request_id).await?;
        info!(request_id = %request_id, "adjustment deleted");
        Ok(())
    }

    /// Lists the organization's adjustment requests.
    pub async fn list(
        &self,
        ctx: &OperationContext,
    ) -> LifecycleResult<Vec<AttendanceAdjustmentRequest>> {
        self.store.list_adjustments(ctx.organization_id).await
    }
}
