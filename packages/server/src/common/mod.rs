// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod period;
pub mod validation;

pub use auth::{Actor, AuthError, Capability, Role};
pub use entity_ids::*;
pub use errors::{is_unique_violation, WorkflowError};
pub use id::{Id, V4, V7};
pub use period::ReportPeriod;
pub use validation::{optional_text, required_text};
