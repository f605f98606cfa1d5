use std::sync::Arc;

use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::data::post_repository::PostRepository;
use crate::domain::authz;
use crate::domain::comment::{Comment, CommentContentRequest};
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::user::Identity;

pub(crate) struct CommentService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub(crate) fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    /// Creates a comment on an existing post. The stored author is the
    /// *post's* author, not the submitting user; do not change this without
    /// stakeholder sign-off, the delete/update checks depend on it.
    pub(crate) async fn create_comment(
        &self,
        post_id: i64,
        req: CommentContentRequest,
    ) -> Result<Comment, DomainError> {
        let post = self.require_post(post_id).await?;
        let req = req.validate()?;

        let new_comment = NewComment {
            post_id: post.id,
            author_id: post.author_id,
            content: req.content,
        };
        self.comments.create_comment(new_comment).await
    }

    /// Deletes a comment when the caller is its stored author or an admin.
    /// Returns the parent post id for the redirect.
    pub(crate) async fn delete_comment(
        &self,
        identity: &Identity,
        comment_id: i64,
    ) -> Result<i64, DomainError> {
        let comment = self.require_comment(comment_id).await?;
        if !authz::allowed(Some(identity), comment.author_id) {
            return Err(DomainError::Forbidden);
        }

        let deleted = self.comments.delete_comment(comment_id).await?;
        if !deleted {
            return Err(DomainError::NotFound(format!("comment id: {comment_id}")));
        }
        Ok(comment.post_id)
    }

    /// Loads a comment for the edit form. Authorization is checked against
    /// the *post's* author, and the route carrying this operation has no
    /// authentication gate, so the identity is optional here; an anonymous
    /// caller is denied by the predicate.
    pub(crate) async fn comment_for_edit(
        &self,
        identity: Option<&Identity>,
        post_id: i64,
        comment_id: i64,
    ) -> Result<Comment, DomainError> {
        let post = self.require_post(post_id).await?;
        let comment = self.require_comment(comment_id).await?;
        if !authz::allowed(identity, post.author_id) {
            return Err(DomainError::Forbidden);
        }
        Ok(comment)
    }

    /// Overwrites a comment's content. Resolves both the post and the
    /// comment (404 if either is missing) without checking that the comment
    /// actually belongs to the given post.
    pub(crate) async fn update_comment(
        &self,
        identity: Option<&Identity>,
        post_id: i64,
        comment_id: i64,
        req: CommentContentRequest,
    ) -> Result<Comment, DomainError> {
        let post = self.require_post(post_id).await?;
        self.require_comment(comment_id).await?;
        if !authz::allowed(identity, post.author_id) {
            return Err(DomainError::Forbidden);
        }

        let req = req.validate()?;
        self.comments
            .update_comment(comment_id, req.content)
            .await?
            .ok_or(DomainError::NotFound(format!("comment id: {comment_id}")))
    }

    async fn require_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .get_post(id)
            .await?
            .ok_or(DomainError::NotFound(format!("post id: {id}")))
    }

    async fn require_comment(&self, id: i64) -> Result<Comment, DomainError> {
        self.comments
            .get_comment(id)
            .await?
            .ok_or(DomainError::NotFound(format!("comment id: {id}")))
    }
}
