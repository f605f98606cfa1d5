use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use validator::Validate;

use super::{form_errors, redirect_found, single_error};
use crate::domain::comment::CommentContentRequest;
use crate::domain::error::DomainError;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::flash;
use crate::presentation::middleware::auth::{CurrentUser, MaybeUser};
use crate::presentation::views;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CommentFormDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub(crate) content: String,
}

pub(crate) async fn new_comment_form(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
    Path(post_id): Path<i64>,
) -> AppResult<Response> {
    // Resolve the post first so a dead link 404s instead of rendering a form
    // that cannot be submitted.
    state.blog_service.read_post(post_id).await?;
    Ok(views::comment_form_page(
        "New Comment",
        &format!("/post/{post_id}/comments/new"),
        "",
        &[],
    )
    .into_response())
}

pub(crate) async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
    jar: CookieJar,
    Path(post_id): Path<i64>,
    Form(dto): Form<CommentFormDto>,
) -> AppResult<Response> {
    let action = format!("/post/{post_id}/comments/new");

    if let Err(errors) = dto.validate() {
        return Ok(views::comment_form_page(
            "New Comment",
            &action,
            &dto.content,
            &form_errors(&errors),
        )
        .into_response());
    }

    let req = CommentContentRequest {
        content: dto.content.clone(),
    };
    match state.comment_service.create_comment(post_id, req).await {
        Ok(comment) => {
            let jar = flash::set(jar, "The comment has been created");
            Ok((jar, redirect_found(&format!("/post/{}", comment.post_id))).into_response())
        }
        Err(DomainError::Validation { field, message }) => Ok(views::comment_form_page(
            "New Comment",
            &action,
            &dto.content,
            &single_error(field, message),
        )
        .into_response()),
        Err(err) => Err(err.into()),
    }
}

pub(crate) async fn delete_comment(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    jar: CookieJar,
    Path(comment_id): Path<i64>,
) -> AppResult<Response> {
    let post_id = state
        .comment_service
        .delete_comment(&identity, comment_id)
        .await?;
    let jar = flash::set(jar, "The comment has been deleted.");
    Ok((jar, redirect_found(&format!("/post/{post_id}"))).into_response())
}

pub(crate) async fn edit_comment_form(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    Path((post_id, comment_id)): Path<(i64, i64)>,
) -> AppResult<Response> {
    let comment = state
        .comment_service
        .comment_for_edit(identity.as_ref(), post_id, comment_id)
        .await?;
    Ok(views::comment_form_page(
        "Update Comment",
        &format!("/post/{post_id}/comments/{comment_id}"),
        &comment.content,
        &[],
    )
    .into_response())
}

pub(crate) async fn update_comment(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    jar: CookieJar,
    Path((post_id, comment_id)): Path<(i64, i64)>,
    Form(dto): Form<CommentFormDto>,
) -> AppResult<Response> {
    let action = format!("/post/{post_id}/comments/{comment_id}");

    if let Err(errors) = dto.validate() {
        return Ok(views::comment_form_page(
            "Update Comment",
            &action,
            &dto.content,
            &form_errors(&errors),
        )
        .into_response());
    }

    let req = CommentContentRequest {
        content: dto.content.clone(),
    };
    match state
        .comment_service
        .update_comment(identity.as_ref(), post_id, comment_id, req)
        .await
    {
        Ok(_) => {
            let jar = flash::set(jar, "The comment has been updated.");
            Ok((jar, redirect_found(&format!("/post/{post_id}"))).into_response())
        }
        Err(DomainError::Validation { field, message }) => Ok(views::comment_form_page(
            "Update Comment",
            &action,
            &dto.content,
            &single_error(field, message),
        )
        .into_response()),
        Err(err) => Err(err.into()),
    }
}
