//! Configuration types for the lifecycle engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::AssignedRole;

/// Duration policy for the lifecycle state machines.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LifecyclePolicy {
    /// Default probation length in days, applied when a start request
    /// supplies no end date.
    #[serde(default = "default_probation_days")]
    pub default_probation_days: u32,
    /// Fixed number of days each probation extension adds.
    #[serde(default = "default_extension_days")]
    pub extension_days: u32,
    /// Width of the "ending soon" window in days.
    #[serde(default = "default_ending_soon_window_days")]
    pub ending_soon_window_days: u32,
}

fn default_probation_days() -> u32 {
    90
}

fn default_extension_days() -> u32 {
    30
}

fn default_ending_soon_window_days() -> u32 {
    30
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            default_probation_days: default_probation_days(),
            extension_days: default_extension_days(),
            ending_soon_window_days: default_ending_soon_window_days(),
        }
    }
}

/// A seed offboarding template from `templates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSeed {
    /// The template's display name.
    pub name: String,
    /// A description of when to use the template.
    #[serde(default)]
    pub description: String,
    /// The template's blueprint tasks, in order.
    pub tasks: Vec<TemplateTaskSeed>,
}

/// A seed blueprint task inside a [`TemplateSeed`].
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateTaskSeed {
    /// The name of the task to generate.
    pub task_name: String,
    /// A description of the task to generate.
    #[serde(default)]
    pub description: String,
    /// How many days before the last working day the task is due.
    pub due_before_days: u32,
    /// The role generated tasks are assigned to by default.
    pub default_assigned_role: AssignedRole,
}

/// Seed templates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    /// The seed templates.
    pub templates: Vec<TemplateSeed>,
}

/// The full loaded configuration.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// Duration policy.
    pub policy: LifecyclePolicy,
    /// Seed offboarding templates.
    pub templates: Vec<TemplateSeed>,
}
