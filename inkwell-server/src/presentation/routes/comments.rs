use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::comments::{
    create_comment, delete_comment, edit_comment_form, new_comment_form, update_comment,
};
use crate::presentation::middleware::guard::{Requirement, route_guard};

pub(crate) fn router() -> Router<AppState> {
    let authenticated = Router::new()
        // GET performs the delete as well.
        .route(
            "/comment/{id}/delete",
            get(delete_comment).post(delete_comment),
        )
        .route(
            "/post/{id}/comments/new",
            get(new_comment_form).post(create_comment),
        )
        .layer(middleware::from_fn(|request: Request, next: Next| {
            route_guard(Requirement::Authenticated, request, next)
        }));

    // No authentication gate on this route; the ownership predicate denies
    // anonymous callers with a 403.
    let ungated = Router::new().route(
        "/post/{post_id}/comments/{comment_id}",
        get(edit_comment_form).post(update_comment),
    );

    authenticated.merge(ungated)
}
