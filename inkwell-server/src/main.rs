use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;
#[cfg(test)]
mod testing;

use application::blog_service::BlogService;
use application::comment_service::CommentService;
use data::comment_repository::CommentRepository;
use data::post_repository::PostRepository;
use data::repositories::postgres::comment_repository::PostgresCommentRepository;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::jwt::JwtService;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;
    run_migrations(&pool).await?;

    let posts: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));
    let comments: Arc<dyn CommentRepository> = Arc::new(PostgresCommentRepository::new(pool));

    let jwt = Arc::new(JwtService::new(
        &settings.jwt_secret,
        settings.jwt_ttl_seconds,
    ));
    let state = AppState::new(
        Arc::new(BlogService::new(posts.clone(), comments.clone())),
        Arc::new(CommentService::new(posts, comments)),
        jwt,
    );

    server::run_http(&settings, state).await
}
