/// Authorization for workflow actions
///
/// The authenticated actor is passed explicitly into every action and checked
/// with a fluent call at the top of the action:
///
/// ```rust,ignore
/// actor.can(Capability::VerifyContent).check()?;
/// ```
mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::{Capability, Role};
pub use errors::AuthError;
