//! Application state for the Employee Lifecycle Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, LifecyclePolicy, TemplateSeed};
use crate::engine::{AdjustmentEngine, ExitEngine, ProbationEngine, TemplateEngine};
use crate::store::MemoryStore;

/// Shared application state.
///
/// Holds the in-memory store backing the demo surface and the loaded
/// lifecycle configuration, and constructs the engines handlers run.
#[derive(Clone)]
pub struct AppState {
    store: Arc<MemoryStore>,
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration
    /// loader and an empty store.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            config: Arc::new(config),
        }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Returns the duration policy.
    pub fn policy(&self) -> LifecyclePolicy {
        self.config.policy()
    }

    /// Returns the configured seed templates.
    pub fn template_seeds(&self) -> &[TemplateSeed] {
        self.config.templates()
    }

    /// Builds the exit state machine over the shared store.
    pub fn exit_engine(&self) -> ExitEngine<MemoryStore> {
        ExitEngine::new(Arc::clone(&self.store))
    }

    /// Builds the probation state machine over the shared store.
    pub fn probation_engine(&self) -> ProbationEngine<MemoryStore> {
        ProbationEngine::new(Arc::clone(&self.store), self.policy())
    }

    /// Builds the adjustment state machine over the shared store.
    pub fn adjustment_engine(&self) -> AdjustmentEngine<MemoryStore> {
        AdjustmentEngine::new(Arc::clone(&self.store))
    }

    /// Builds the template engine over the shared store.
    pub fn template_engine(&self) -> TemplateEngine<MemoryStore> {
        TemplateEngine::new(Arc::clone(&self.store))
    }
}
