pub(crate) mod blog_service;
pub(crate) mod comment_service;
