use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use validator::Validate;

use super::{form_errors, redirect_found, single_error};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::flash;
use crate::presentation::middleware::auth::{CurrentUser, MaybeUser};
use crate::presentation::views;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct PostFormDto {
    #[validate(length(min = 1, max = 255, message = "must be 1..255 chars"))]
    pub(crate) title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub(crate) content: String,
}

pub(crate) async fn home(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    jar: CookieJar,
) -> AppResult<Response> {
    let posts = state.blog_service.list_posts().await?;
    let (jar, message) = flash::take(jar);
    Ok((
        jar,
        views::home_page(message.as_deref(), identity.as_ref(), &posts),
    )
        .into_response())
}

pub(crate) async fn new_post_form() -> Response {
    views::post_form_page("New Post", "/post/new", "", "", &[]).into_response()
}

pub(crate) async fn create_post(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    jar: CookieJar,
    Form(dto): Form<PostFormDto>,
) -> AppResult<Response> {
    if let Err(errors) = dto.validate() {
        return Ok(views::post_form_page(
            "New Post",
            "/post/new",
            &dto.title,
            &dto.content,
            &form_errors(&errors),
        )
        .into_response());
    }

    let req = CreatePostRequest {
        title: dto.title.clone(),
        content: dto.content.clone(),
    };
    match state.blog_service.create_post(identity.user_id, req).await {
        Ok(_) => {
            let jar = flash::set(jar, "The post has been created");
            Ok((jar, redirect_found("/")).into_response())
        }
        Err(DomainError::Validation { field, message }) => Ok(views::post_form_page(
            "New Post",
            "/post/new",
            &dto.title,
            &dto.content,
            &single_error(field, message),
        )
        .into_response()),
        Err(err) => Err(err.into()),
    }
}

pub(crate) async fn show_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let view = state.blog_service.read_post(id).await?;
    let (jar, message) = flash::take(jar);
    Ok((
        jar,
        views::post_page(message.as_deref(), &view.post, &view.comments),
    )
        .into_response())
}

pub(crate) async fn edit_post_form(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let post = state.blog_service.post_for_edit(&identity, id).await?;
    Ok(views::post_form_page(
        "Update Post",
        &format!("/post/{id}/update"),
        &post.title,
        &post.content,
        &[],
    )
    .into_response())
}

pub(crate) async fn update_post(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    jar: CookieJar,
    Path(id): Path<i64>,
    Form(dto): Form<PostFormDto>,
) -> AppResult<Response> {
    let action = format!("/post/{id}/update");

    if let Err(errors) = dto.validate() {
        return Ok(views::post_form_page(
            "Update Post",
            &action,
            &dto.title,
            &dto.content,
            &form_errors(&errors),
        )
        .into_response());
    }

    let req = UpdatePostRequest {
        title: dto.title.clone(),
        content: dto.content.clone(),
    };
    match state.blog_service.update_post(&identity, id, req).await {
        Ok(post) => {
            let jar = flash::set(jar, "The post has been updated.");
            Ok((jar, redirect_found(&format!("/post/{}", post.id))).into_response())
        }
        Err(DomainError::Validation { field, message }) => Ok(views::post_form_page(
            "Update Post",
            &action,
            &dto.title,
            &dto.content,
            &single_error(field, message),
        )
        .into_response()),
        Err(err) => Err(err.into()),
    }
}

pub(crate) async fn delete_post(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    state.blog_service.delete_post(&identity, id).await?;
    let jar = flash::set(jar, "The post has been deleted.");
    Ok((jar, redirect_found("/")).into_response())
}
