//! Lifecycle state machines.
//!
//! Each engine owns one record type's transitions and performs every write
//! a transition needs in one place (record plus employee-status mirroring),
//! rather than leaving call sites responsible for ordering the writes. All
//! operations take an explicit [`crate::models::OperationContext`]; there
//! is no ambient "current organization" anywhere in the crate.

mod adjustment;
mod exit;
mod probation;
mod template;

pub use adjustment::{AdjustmentEngine, EditAdjustment, SubmitAdjustment};
pub use exit::{
    AdhocTask, ExitEngine, ExitInitiation, ExitSummary, InitiateExit, TemplateApplication,
};
pub use probation::{EditProbation, ProbationEngine, StartProbation};
pub use template::{NewTemplateTask, TemplateEngine};
