pub mod content;
pub mod status;
pub mod verification;

pub use content::{Content, ContentChanges, ContentListing, NewContent};
pub use status::{ContentStatus, ContentTransition, InvalidTransition};
pub use verification::{NewVerification, Verification, VerificationDecision};
