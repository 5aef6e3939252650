use thiserror::Error;

use super::{Capability, Role};

/// Authorization errors raised before any workflow state is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("{role} role cannot {capability}")]
    CapabilityDenied { role: Role, capability: Capability },

    #[error("Publisher is not affiliated with an SKPD")]
    MissingAgency,

    #[error("Access to another SKPD's data is not allowed")]
    ForeignAgency,

    #[error("User account is inactive")]
    InactiveUser,

    #[error("Invalid or expired token")]
    InvalidToken,
}
