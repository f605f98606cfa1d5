use std::sync::Arc;

use crate::application::blog_service::BlogService;
use crate::application::comment_service::CommentService;
use crate::infrastructure::jwt::JwtService;

pub(crate) mod app_error;
pub(crate) mod flash;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod routes;
pub(crate) mod views;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) blog_service: Arc<BlogService>,
    pub(crate) comment_service: Arc<CommentService>,
    pub(crate) jwt: Arc<JwtService>,
}

impl AppState {
    pub(crate) fn new(
        blog_service: Arc<BlogService>,
        comment_service: Arc<CommentService>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            blog_service,
            comment_service,
            jwt,
        }
    }
}
