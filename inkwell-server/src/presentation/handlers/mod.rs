use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

pub(crate) mod comments;
pub(crate) mod posts;

/// Successful mutations answer with a plain 302 rather than axum's
/// default 303.
pub(crate) fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Flattens validator output into (field, message) pairs for form redisplay,
/// sorted so rendering is deterministic.
pub(crate) fn form_errors(errors: &ValidationErrors) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .clone()
                .map(|m| m.into_owned())
                .unwrap_or_else(|| "invalid value".to_string());
            out.push((field.to_string(), message));
        }
    }
    out.sort();
    out
}

pub(crate) fn single_error(field: &str, message: &str) -> Vec<(String, String)> {
    vec![(field.to_string(), message.to_string())]
}
