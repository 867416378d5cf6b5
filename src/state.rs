//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers and middleware via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, validation::ValidationSchemas};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Request schemas, immutable after startup
    pub schemas: ValidationSchemas,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(schemas: ValidationSchemas, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { schemas, config }),
        }
    }

    /// Get a reference to the validation schemas
    pub fn schemas(&self) -> &ValidationSchemas {
        &self.inner.schemas
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
