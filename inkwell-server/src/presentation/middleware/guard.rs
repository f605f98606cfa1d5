use axum::{extract::Request, middleware::Next, response::Response};

use crate::domain::error::DomainError;
use crate::domain::user::{Identity, Role};
use crate::presentation::app_error::AppError;

/// What a route demands of the caller before its handler runs. The login
/// redirect and the 403 both happen here, not in the handlers.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Requirement {
    /// Any verified identity.
    Authenticated,
    /// An identity holding at least one of these roles.
    AnyRole(&'static [Role]),
}

pub(crate) async fn route_guard(
    requirement: Requirement,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = request.extensions().get::<Identity>();

    match requirement {
        Requirement::Authenticated => {
            if identity.is_none() {
                return Err(AppError::Unauthenticated);
            }
        }
        Requirement::AnyRole(roles) => match identity {
            None => return Err(AppError::Unauthenticated),
            Some(identity) if !holds_any(identity, roles) => {
                return Err(AppError::Domain(DomainError::Forbidden));
            }
            Some(_) => {}
        },
    }

    Ok(next.run(request).await)
}

fn holds_any(identity: &Identity, roles: &[Role]) -> bool {
    roles.iter().any(|role| identity.has_role(*role))
}

#[cfg(test)]
mod tests {
    use super::holds_any;
    use crate::domain::user::{Identity, Role};

    #[test]
    fn holds_any_matches_on_any_listed_role() {
        let writer = Identity {
            user_id: 1,
            username: "alice".to_string(),
            roles: vec![Role::Writer],
        };
        let reader = Identity {
            user_id: 2,
            username: "carol".to_string(),
            roles: vec![Role::Reader],
        };

        let required = [Role::Admin, Role::Writer];
        assert!(holds_any(&writer, &required));
        assert!(!holds_any(&reader, &required));
    }
}
