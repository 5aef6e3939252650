use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an application user
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, juniper::GraphQLEnum,
)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages SKPDs, categories and users
    Admin,
    /// Reviews pending content
    Operator,
    /// Submits content on behalf of an SKPD
    Publisher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Operator => write!(f, "operator"),
            Role::Publisher => write!(f, "publisher"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "admin" => Ok(Role::Admin),
            "operator" => Ok(Role::Operator),
            "publisher" => Ok(Role::Publisher),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}

/// Operations gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Create, edit and submit content for the actor's own SKPD
    SubmitContent,

    /// Approve or reject pending content
    VerifyContent,

    /// Read content from every SKPD
    ViewAllContent,

    /// Read compliance reports and exports across SKPDs
    ViewReports,

    ManageAgencies,

    ManageCategories,

    ManageUsers,
}

impl Capability {
    /// Roles allowed to exercise this capability
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Capability::SubmitContent => &[Role::Publisher],
            Capability::VerifyContent => &[Role::Operator],
            Capability::ViewAllContent | Capability::ViewReports => {
                &[Role::Operator, Role::Admin]
            }
            Capability::ManageAgencies | Capability::ManageCategories | Capability::ManageUsers => {
                &[Role::Admin]
            }
        }
    }

    pub fn is_granted_to(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Capability::SubmitContent => "submit content",
            Capability::VerifyContent => "verify content",
            Capability::ViewAllContent => "view content of all SKPDs",
            Capability::ViewReports => "view compliance reports",
            Capability::ManageAgencies => "manage SKPDs",
            Capability::ManageCategories => "manage categories",
            Capability::ManageUsers => "manage users",
        };
        f.write_str(text)
    }
}
