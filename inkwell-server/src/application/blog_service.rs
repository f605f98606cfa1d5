use std::sync::Arc;

use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::authz;
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};
use crate::domain::user::Identity;

/// A post together with its comments in insertion order, as the read view
/// renders it.
#[derive(Debug, Clone)]
pub(crate) struct PostView {
    pub(crate) post: Post,
    pub(crate) comments: Vec<Comment>,
}

pub(crate) struct BlogService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl BlogService {
    pub(crate) fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    pub(crate) async fn create_post(
        &self,
        author_id: i64,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;

        let new_post = NewPost {
            title: req.title,
            content: req.content,
            author_id,
        };
        self.posts.create_post(new_post).await
    }

    pub(crate) async fn read_post(&self, id: i64) -> Result<PostView, DomainError> {
        let post = self.require_post(id).await?;
        let comments = self.comments.comments_for_post(id).await?;
        Ok(PostView { post, comments })
    }

    /// Loads a post for the edit form, applying the same ownership check as
    /// the mutation itself so the form never renders for a caller who could
    /// not submit it.
    pub(crate) async fn post_for_edit(
        &self,
        identity: &Identity,
        id: i64,
    ) -> Result<Post, DomainError> {
        let post = self.require_post(id).await?;
        if !authz::allowed(Some(identity), post.author_id) {
            return Err(DomainError::Forbidden);
        }
        Ok(post)
    }

    pub(crate) async fn update_post(
        &self,
        identity: &Identity,
        post_id: i64,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let post = self.require_post(post_id).await?;
        if !authz::allowed(Some(identity), post.author_id) {
            return Err(DomainError::Forbidden);
        }

        let req = req.validate()?;
        let patch = PostPatch {
            title: req.title,
            content: req.content,
        };
        // author_id is never reassigned here.
        self.posts
            .update_post(post_id, patch)
            .await?
            .ok_or(DomainError::NotFound(format!("post id: {post_id}")))
    }

    pub(crate) async fn delete_post(
        &self,
        identity: &Identity,
        post_id: i64,
    ) -> Result<(), DomainError> {
        let post = self.require_post(post_id).await?;
        if !authz::allowed(Some(identity), post.author_id) {
            return Err(DomainError::Forbidden);
        }

        let deleted = self.posts.delete_post_with_comments(post_id).await?;
        if !deleted {
            return Err(DomainError::NotFound(format!("post id: {post_id}")));
        }
        Ok(())
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.posts.list_posts().await
    }

    async fn require_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .get_post(id)
            .await?
            .ok_or(DomainError::NotFound(format!("post id: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::BlogService;
    use crate::data::comment_repository::{CommentRepository, NewComment};
    use crate::domain::error::DomainError;
    use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
    use crate::domain::user::Role;
    use crate::testing::{identity, InMemoryBlog};

    fn service(blog: &Arc<InMemoryBlog>) -> BlogService {
        BlogService::new(blog.clone(), blog.clone())
    }

    #[tokio::test]
    async fn create_then_read_round_trip_preserves_fields() {
        let blog = Arc::new(InMemoryBlog::new());
        let service = service(&blog);

        let created = service
            .create_post(
                10,
                CreatePostRequest {
                    title: "Hello".to_string(),
                    content: "World".to_string(),
                },
            )
            .await
            .expect("create must succeed");

        let view = service.read_post(created.id).await.expect("read must succeed");
        assert_eq!(view.post.title, "Hello");
        assert_eq!(view.post.content, "World");
        assert_eq!(view.post.author_id, 10);
        assert!(view.comments.is_empty());
    }

    #[tokio::test]
    async fn unknown_post_id_is_not_found_for_read_update_and_delete() {
        let blog = Arc::new(InMemoryBlog::new());
        let service = service(&blog);
        let admin = identity(1, "root", vec![Role::Admin]);

        let err = service.read_post(42).await.expect_err("read must fail");
        assert!(matches!(err, DomainError::NotFound(_)));

        let req = UpdatePostRequest {
            title: "t".to_string(),
            content: "c".to_string(),
        };
        let err = service
            .update_post(&admin, 42, req)
            .await
            .expect_err("update must fail");
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = service
            .delete_post(&admin, 42)
            .await
            .expect_err("delete must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn non_owner_without_admin_cannot_update_or_delete() {
        let blog = Arc::new(InMemoryBlog::new());
        let service = service(&blog);

        let post = service
            .create_post(
                10,
                CreatePostRequest {
                    title: "Hello".to_string(),
                    content: "World".to_string(),
                },
            )
            .await
            .expect("create must succeed");

        let stranger = identity(11, "bob", vec![Role::Writer]);
        let req = UpdatePostRequest {
            title: "Hacked".to_string(),
            content: "Hacked".to_string(),
        };

        let err = service
            .update_post(&stranger, post.id, req)
            .await
            .expect_err("update must be forbidden");
        assert!(matches!(err, DomainError::Forbidden));

        let err = service
            .delete_post(&stranger, post.id)
            .await
            .expect_err("delete must be forbidden");
        assert!(matches!(err, DomainError::Forbidden));
    }

    #[tokio::test]
    async fn admin_overrides_ownership() {
        let blog = Arc::new(InMemoryBlog::new());
        let service = service(&blog);

        let post = service
            .create_post(
                10,
                CreatePostRequest {
                    title: "Hello".to_string(),
                    content: "World".to_string(),
                },
            )
            .await
            .expect("create must succeed");

        let admin = identity(1, "root", vec![Role::Admin]);
        let updated = service
            .update_post(
                &admin,
                post.id,
                UpdatePostRequest {
                    title: "Edited".to_string(),
                    content: "World".to_string(),
                },
            )
            .await
            .expect("admin update must succeed");
        assert_eq!(updated.title, "Edited");
        assert_eq!(updated.author_id, 10, "author must not be reassigned");

        service
            .delete_post(&admin, post.id)
            .await
            .expect("admin delete must succeed");
    }

    #[tokio::test]
    async fn blank_title_does_not_persist_a_post() {
        let blog = Arc::new(InMemoryBlog::new());
        let service = service(&blog);

        let err = service
            .create_post(
                10,
                CreatePostRequest {
                    title: "   ".to_string(),
                    content: "World".to_string(),
                },
            )
            .await
            .expect_err("blank title must be rejected");
        assert!(matches!(err, DomainError::Validation { field: "title", .. }));
        assert_eq!(blog.post_count(), 0);
    }

    #[tokio::test]
    async fn deleting_a_post_removes_its_comments() {
        let blog = Arc::new(InMemoryBlog::new());
        let service = service(&blog);
        let owner = identity(10, "alice", vec![Role::Writer]);

        let post = service
            .create_post(
                10,
                CreatePostRequest {
                    title: "Hello".to_string(),
                    content: "World".to_string(),
                },
            )
            .await
            .expect("create must succeed");

        for text in ["first", "second"] {
            blog.create_comment(NewComment {
                post_id: post.id,
                author_id: 10,
                content: text.to_string(),
            })
            .await
            .expect("comment must be created");
        }
        assert_eq!(blog.comment_count(), 2);

        service
            .delete_post(&owner, post.id)
            .await
            .expect("delete must succeed");

        assert_eq!(blog.post_count(), 0);
        assert_eq!(blog.comment_count(), 0, "no orphan comments may remain");
    }

    #[tokio::test]
    async fn list_posts_returns_newest_first() {
        let blog = Arc::new(InMemoryBlog::new());
        let service = service(&blog);

        for title in ["first", "second"] {
            service
                .create_post(
                    10,
                    CreatePostRequest {
                        title: title.to_string(),
                        content: "body".to_string(),
                    },
                )
                .await
                .expect("create must succeed");
        }

        let posts = service.list_posts().await.expect("list must succeed");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "second");
        assert_eq!(posts[1].title, "first");
    }
}
