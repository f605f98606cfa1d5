use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::routing::{get, post};

use crate::domain::user::Role;
use crate::presentation::AppState;
use crate::presentation::handlers::posts::{
    create_post, delete_post, edit_post_form, home, new_post_form, show_post, update_post,
};
use crate::presentation::middleware::guard::{Requirement, route_guard};

const EDITOR_ROLES: &[Role] = &[Role::Admin, Role::Writer];

pub(crate) fn router() -> Router<AppState> {
    let public = Router::new()
        .route("/", get(home))
        .route("/post/{id}", get(show_post));

    let editors = Router::new()
        .route("/post/new", get(new_post_form).post(create_post))
        .route("/post/{id}/update", get(edit_post_form).post(update_post))
        .route("/post/{id}/delete", post(delete_post))
        .layer(middleware::from_fn(|request: Request, next: Next| {
            route_guard(Requirement::AnyRole(EDITOR_ROLES), request, next)
        }));

    public.merge(editors)
}
