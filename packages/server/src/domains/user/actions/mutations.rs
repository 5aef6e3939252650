//! User administration (Admin only)

use tracing::info;

use crate::common::{
    is_unique_violation, required_text, Actor, AgencyId, Capability, Role, UserId, WorkflowError,
};
use crate::domains::agency::models::Agency;
use crate::domains::user::data::UserInput;
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

pub const NAME_MAX_CHARS: usize = 255;

pub async fn create_user(
    actor: &Actor,
    input: UserInput,
    deps: &ServerDeps,
) -> Result<User, WorkflowError> {
    actor.can(Capability::ManageUsers).check()?;

    let name = required_text("name", &input.name, NAME_MAX_CHARS)?;
    let email = normalize_email(&input.email)?;
    let agency_id = input.agency_id.map(AgencyId::from_uuid);
    check_affiliation(input.role, agency_id)?;

    if let Some(agency_id) = agency_id {
        Agency::get(agency_id, &deps.db_pool).await?;
    }

    info!(email = %email, role = %input.role, "Creating user");

    User::create(UserId::new(), &name, &email, input.role, agency_id, &deps.db_pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                WorkflowError::validation(format!("email '{}' is already registered", email))
            } else {
                e.into()
            }
        })
}

/// Activate or deactivate an account. Admins cannot lock themselves out.
pub async fn toggle_user_active(
    actor: &Actor,
    user_id: UserId,
    deps: &ServerDeps,
) -> Result<User, WorkflowError> {
    actor.can(Capability::ManageUsers).check()?;

    if user_id == actor.user_id {
        return Err(WorkflowError::invalid_state("you cannot deactivate your own account"));
    }

    let current = User::get(user_id, &deps.db_pool).await?;

    info!(user_id = %user_id, is_active = !current.is_active, "Toggling user");

    Ok(User::set_active(user_id, !current.is_active, &deps.db_pool).await?)
}

/// Publishers belong to exactly one SKPD; other roles to none.
pub fn check_affiliation(role: Role, agency_id: Option<AgencyId>) -> Result<(), WorkflowError> {
    match (role, agency_id) {
        (Role::Publisher, None) => Err(WorkflowError::validation("publishers must belong to an SKPD")),
        (Role::Publisher, Some(_)) | (_, None) => Ok(()),
        (role, Some(_)) => Err(WorkflowError::validation(format!(
            "{} accounts cannot belong to an SKPD",
            role
        ))),
    }
}

pub fn normalize_email(raw: &str) -> Result<String, WorkflowError> {
    let email = required_text("email", raw, 255)?.to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(WorkflowError::validation(format!("'{}' is not a valid email", email))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publisher_needs_agency() {
        assert!(check_affiliation(Role::Publisher, None).is_err());
        assert!(check_affiliation(Role::Publisher, Some(AgencyId::new())).is_ok());
    }

    #[test]
    fn staff_roles_have_no_agency() {
        assert!(check_affiliation(Role::Operator, None).is_ok());
        assert!(check_affiliation(Role::Admin, Some(AgencyId::new())).is_err());
    }

    #[test]
    fn emails_are_lowercased_and_checked() {
        assert_eq!(
            normalize_email(" Humas@Dinkes.Go.Id ").unwrap(),
            "humas@dinkes.go.id"
        );
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("@domain.id").is_err());
        assert!(normalize_email("a@b@c.id").is_err());
        assert!(normalize_email("user@localhost").is_err());
    }
}
