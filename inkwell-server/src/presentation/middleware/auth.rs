use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::domain::user::Identity;
use crate::infrastructure::jwt::Claims;
use crate::presentation::AppState;
use crate::presentation::app_error::AppError;

const SESSION_COOKIE: &str = "session";

/// Resolves the caller's identity for the whole request, from a bearer header
/// or the session cookie. Never rejects: an invalid or absent token just
/// leaves the request anonymous, and the route guards decide what that means.
pub(crate) async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = bearer_token(request.headers()).or_else(|| session_token(request.headers()));

    if let Some(token) = token
        && let Ok(claims) = state.jwt.verify_token(&token)
    {
        request.extensions_mut().insert(identity_from_claims(claims));
    }

    next.run(request).await
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

fn identity_from_claims(claims: Claims) -> Identity {
    Identity {
        user_id: claims.user_id,
        username: claims.username,
        roles: claims.roles,
    }
}

/// Extractor for routes behind an authentication gate. The guard has already
/// verified the identity exists; missing identity here means a wiring bug,
/// answered with the login redirect all the same.
#[derive(Debug, Clone)]
pub(crate) struct CurrentUser(pub(crate) Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AppError::Unauthenticated)
    }
}

/// Extractor for routes without a gate: carries the identity when one exists
/// and an explicit "nobody" otherwise.
#[derive(Debug, Clone)]
pub(crate) struct MaybeUser(pub(crate) Option<Identity>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<Identity>().cloned()))
    }
}
