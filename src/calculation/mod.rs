//! Calculation logic for the Employee Lifecycle Engine.
//!
//! This module contains the pure, deterministic functions the state
//! machines are built on: whole-day countdowns and the overdue test,
//! date-interpolated and completion progress percentages, attendance
//! hour-delta reconciliation, and offboarding task generation from
//! template blueprints.
//!
//! Every function here is side-effect-free and takes "today"/"now"
//! explicitly where it matters, so the same arithmetic backs the exit-task
//! overdue check and the probation ending-soon check with no drift between
//! call sites.

mod days_left;
mod hour_delta;
mod progress;
mod task_generation;

pub use days_left::{days_left, is_overdue};
pub use hour_delta::{format_hour_delta, hour_delta, parse_time_minutes, span_minutes};
pub use progress::{completion_percent, progress_percent};
pub use task_generation::{adhoc_task, due_date_for, generate_tasks};
