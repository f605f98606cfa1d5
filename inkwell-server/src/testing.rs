use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::user::{Identity, Role};

/// In-memory stand-in for both repositories, shared by service and router
/// tests. Mirrors the Postgres implementations' observable behavior,
/// including the transactional post-plus-comments delete.
#[derive(Default)]
pub(crate) struct InMemoryBlog {
    inner: Mutex<BlogState>,
}

#[derive(Default)]
struct BlogState {
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    next_post_id: i64,
    next_comment_id: i64,
}

impl InMemoryBlog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn post_count(&self) -> usize {
        self.inner.lock().expect("blog state poisoned").posts.len()
    }

    pub(crate) fn comment_count(&self) -> usize {
        self.inner
            .lock()
            .expect("blog state poisoned")
            .comments
            .len()
    }
}

#[async_trait]
impl PostRepository for InMemoryBlog {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut state = self.inner.lock().expect("blog state poisoned");
        state.next_post_id += 1;
        let now = Utc::now();
        let post = Post {
            id: state.next_post_id,
            title: input.title,
            content: input.content,
            author_id: input.author_id,
            created_at: now,
            updated_at: now,
        };
        state.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let state = self.inner.lock().expect("blog state poisoned");
        Ok(state.posts.get(&id).cloned())
    }

    async fn update_post(
        &self,
        post_id: i64,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        let mut state = self.inner.lock().expect("blog state poisoned");
        let Some(post) = state.posts.get_mut(&post_id) else {
            return Ok(None);
        };
        post.title = patch.title;
        post.content = patch.content;
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn delete_post_with_comments(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.inner.lock().expect("blog state poisoned");
        if state.posts.remove(&id).is_none() {
            return Ok(false);
        }
        state.comments.retain(|_, comment| comment.post_id != id);
        Ok(true)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let state = self.inner.lock().expect("blog state poisoned");
        let mut posts: Vec<Post> = state.posts.values().cloned().collect();
        posts.reverse();
        Ok(posts)
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlog {
    async fn create_comment(&self, input: NewComment) -> Result<Comment, DomainError> {
        let mut state = self.inner.lock().expect("blog state poisoned");
        if !state.posts.contains_key(&input.post_id) {
            return Err(DomainError::NotFound("post".to_string()));
        }
        state.next_comment_id += 1;
        let comment = Comment {
            id: state.next_comment_id,
            post_id: input.post_id,
            author_id: input.author_id,
            content: input.content,
            created_at: Utc::now(),
        };
        state.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        let state = self.inner.lock().expect("blog state poisoned");
        Ok(state.comments.get(&id).cloned())
    }

    async fn update_comment(
        &self,
        id: i64,
        content: String,
    ) -> Result<Option<Comment>, DomainError> {
        let mut state = self.inner.lock().expect("blog state poisoned");
        let Some(comment) = state.comments.get_mut(&id) else {
            return Ok(None);
        };
        comment.content = content;
        Ok(Some(comment.clone()))
    }

    async fn delete_comment(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.inner.lock().expect("blog state poisoned");
        Ok(state.comments.remove(&id).is_some())
    }

    async fn comments_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        let state = self.inner.lock().expect("blog state poisoned");
        Ok(state
            .comments
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }
}

pub(crate) fn identity(user_id: i64, username: &str, roles: Vec<Role>) -> Identity {
    Identity {
        user_id,
        username: username.to_string(),
        roles,
    }
}
