pub mod actions;
pub mod data;
pub mod events;
pub mod models;

pub use data::{ContentData, VerificationData};
pub use events::ContentEvent;
pub use models::{Content, ContentStatus, Verification, VerificationDecision};
