//! Application state for the attendance report API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::pipeline::ReportPipeline;

/// Shared application state.
///
/// Holds the loaded configuration and roster. Both are read-only for the
/// lifetime of the server, so concurrent requests share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration and roster.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a pipeline over the loaded configuration and roster.
    pub fn pipeline(&self) -> ReportPipeline<'_> {
        ReportPipeline::new(self.config.config(), self.config.roster())
    }
}
