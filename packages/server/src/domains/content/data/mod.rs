//! Content domain data types (GraphQL types)

pub mod content_types;

pub use content_types::{ContentData, ContentInput, VerificationData, VerificationResult};
