//! HTTP API module for the Employee Lifecycle Engine.
//!
//! This module provides the REST endpoints for the exit, probation, and
//! adjustment state machines, backed by the in-memory store. The engine
//! traits are the real contract; this surface exists to drive them
//! end-to-end.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CreateEmployeeRequest;
pub use response::{AdjustmentView, ApiError, ListEnvelope, ProbationView};
pub use state::AppState;
