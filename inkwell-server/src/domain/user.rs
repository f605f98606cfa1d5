use serde::{Deserialize, Serialize};

/// Named permission tag. Checked by membership, never by hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Role {
    Admin,
    Writer,
    Reader,
}

/// The authenticated caller of one request, as carried in the verified token.
/// User lifecycle (registration, credentials) lives outside this service.
#[derive(Debug, Clone)]
pub(crate) struct Identity {
    pub(crate) user_id: i64,
    pub(crate) username: String,
    pub(crate) roles: Vec<Role>,
}

impl Identity {
    pub(crate) fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub(crate) fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}
