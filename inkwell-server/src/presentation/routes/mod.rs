use axum::Router;

use super::AppState;

pub(crate) mod comments;
pub(crate) mod posts;

pub(crate) fn router() -> Router<AppState> {
    posts::router().merge(comments::router())
}
