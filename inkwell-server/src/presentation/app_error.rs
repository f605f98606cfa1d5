use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;
use tracing::error;

use crate::domain::error::DomainError;
use crate::presentation::views;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A gated route was reached without an identity; the guard turns this
    /// into a login redirect rather than an error page.
    #[error("unauthenticated")]
    Unauthenticated,

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Domain(DomainError::NotFound(what)) => {
                views::error_page(StatusCode::NOT_FOUND, &format!("Not found: {what}"))
                    .into_response()
            }
            AppError::Domain(DomainError::Forbidden) => {
                views::error_page(StatusCode::FORBIDDEN, "You are not allowed to do that")
                    .into_response()
            }
            // Validation failures are normally re-rendered by the handler;
            // this is the fallback for ones that escape.
            AppError::Domain(DomainError::Validation { field, message }) => views::error_page(
                StatusCode::BAD_REQUEST,
                &format!("Invalid {field}: {message}"),
            )
            .into_response(),
            AppError::Domain(DomainError::Unexpected(msg)) => {
                error!("unexpected domain error: {msg}");
                views::error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
                    .into_response()
            }
            AppError::Unauthenticated => Redirect::to("/login").into_response(),
            AppError::Internal(err) => {
                error!("internal error: {err:#}");
                views::error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
                    .into_response()
            }
        }
    }
}
