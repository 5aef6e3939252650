//! Content actions - entry points for the publication workflow
//!
//! All content reads and writes go through these functions. The acting user is
//! always passed in explicitly.

pub mod queries;
pub mod submission;
pub mod verification;

pub use queries::{
    content_detail, content_listing, my_contents, pending_contents, verification_history,
};
pub use submission::{create_content, edit_content, submit_content};
pub use verification::{approve_content, reject_content, VerificationOutcome};
