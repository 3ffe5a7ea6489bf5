//! Configuration loading and management for the attendance engine.
//!
//! This module loads the organization settings, the attendance policy and the
//! employee roster from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Reporting for: {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceRateConfig, EngineConfig, OrganizationConfig, PolicyConfig, RosterConfig,
    StatusProbabilities, WorkStoppagePolicy,
};
