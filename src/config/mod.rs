//! Configuration for the Employee Lifecycle Engine.
//!
//! Policy knobs (probation lengths, the ending-soon window) and seed
//! offboarding templates are loaded from YAML files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LifecycleConfig, LifecyclePolicy, TemplateSeed, TemplateTaskSeed};
