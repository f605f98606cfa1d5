pub(crate) mod comment_repository;
pub(crate) mod post_repository;

use crate::domain::error::DomainError;

// 23503 is foreign_key_violation: the referenced row is gone.
pub(super) fn map_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23503")
    {
        let resource = match db_err.constraint() {
            Some("posts_author_id_fkey") | Some("comments_author_id_fkey") => "author",
            Some("comments_post_id_fkey") => "post",
            _ => "referenced row",
        };
        return DomainError::NotFound(resource.to_string());
    }
    DomainError::Unexpected(err.to_string())
}
