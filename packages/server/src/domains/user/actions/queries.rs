use sqlx::PgPool;
use tracing::debug;

use crate::common::{Actor, AuthError, Capability, UserId, WorkflowError};
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

pub async fn list_users(actor: &Actor, deps: &ServerDeps) -> Result<Vec<User>, WorkflowError> {
    actor.can(Capability::ManageUsers).check()?;
    Ok(User::find_all(&deps.db_pool).await?)
}

/// Build the actor for an authenticated user id.
///
/// Role and SKPD come from the stored row, not from token claims, so role
/// changes and deactivation take effect immediately.
pub async fn resolve_actor(user_id: UserId, pool: &PgPool) -> Result<Actor, AuthError> {
    let user = User::find_by_id(user_id, pool)
        .await
        .map_err(|e| {
            debug!(user_id = %user_id, error = %e, "User lookup failed");
            AuthError::AuthenticationRequired
        })?
        .ok_or(AuthError::InvalidToken)?;

    if !user.is_active {
        return Err(AuthError::InactiveUser);
    }

    Ok(user.actor())
}
