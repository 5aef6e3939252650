use super::{AuthError, Capability, Role};
use crate::common::entity_ids::{AgencyId, UserId};

/// The authenticated user performing an action
///
/// Built by the API layer from the verified token and the stored user row.
/// Usage:
/// ```
/// use publikasi_core::common::{Actor, Capability, Role, UserId};
///
/// let operator = Actor::new(UserId::new(), Role::Operator, None);
/// assert!(operator.can(Capability::VerifyContent).check().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
    pub agency_id: Option<AgencyId>,
}

impl Actor {
    pub fn new(user_id: UserId, role: Role, agency_id: Option<AgencyId>) -> Self {
        Self {
            user_id,
            role,
            agency_id,
        }
    }

    /// Specify what capability the actor needs
    pub fn can(&self, capability: Capability) -> CapabilityBuilder<'_> {
        CapabilityBuilder {
            actor: self,
            capability,
        }
    }

    /// SKPD a publisher acts for
    pub fn publisher_agency(&self) -> Result<AgencyId, AuthError> {
        self.agency_id.ok_or(AuthError::MissingAgency)
    }

    /// Read access to one SKPD's data: cross-SKPD viewers, or a member of that SKPD.
    pub fn can_read_agency(&self, agency_id: AgencyId) -> Result<(), AuthError> {
        if Capability::ViewAllContent.is_granted_to(self.role) {
            return Ok(());
        }
        match self.agency_id {
            Some(own) if own == agency_id => Ok(()),
            Some(_) => Err(AuthError::ForeignAgency),
            None => Err(AuthError::MissingAgency),
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder<'a> {
    actor: &'a Actor,
    capability: Capability,
}

impl CapabilityBuilder<'_> {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        if !self.capability.is_granted_to(self.actor.role) {
            return Err(AuthError::CapabilityDenied {
                role: self.actor.role,
                capability: self.capability,
            });
        }

        if self.capability == Capability::SubmitContent && self.actor.agency_id.is_none() {
            return Err(AuthError::MissingAgency);
        }

        Ok(())
    }
}
