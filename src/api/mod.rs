//! HTTP API module for the attendance report engine.
//!
//! This module provides the REST endpoints for downloading attendance
//! spreadsheets and for viewing a month's matrix as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExportRequest, MonthViewQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
