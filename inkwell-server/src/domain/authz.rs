use super::user::Identity;

/// Ownership-or-admin check used by every mutating handler.
///
/// Fails closed: an absent identity can never own anything, and the role
/// lookup happens only when an identity exists, so an anonymous caller gets a
/// plain deny rather than a crash.
pub(crate) fn allowed(identity: Option<&Identity>, owner_id: i64) -> bool {
    match identity {
        Some(identity) => identity.user_id == owner_id || identity.is_admin(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::allowed;
    use crate::domain::user::{Identity, Role};

    fn identity(user_id: i64, roles: Vec<Role>) -> Identity {
        Identity {
            user_id,
            username: format!("user{user_id}"),
            roles,
        }
    }

    #[test]
    fn owner_is_allowed() {
        assert!(allowed(Some(&identity(7, vec![])), 7));
    }

    #[test]
    fn admin_is_allowed_for_any_owner() {
        assert!(allowed(Some(&identity(1, vec![Role::Admin])), 7));
    }

    #[test]
    fn non_owner_without_admin_is_denied() {
        assert!(!allowed(Some(&identity(1, vec![Role::Writer])), 7));
    }

    #[test]
    fn anonymous_is_denied_without_panicking() {
        assert!(!allowed(None, 7));
    }
}
