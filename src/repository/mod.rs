use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::post::{NewPost, Post, PostListQuery};
use crate::domain::types::PostId;
use crate::repository::errors::RepositoryResult;

pub mod comment;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod post;

/// Diesel-backed store shared by all request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait PostReader {
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
    /// Number of posts matching `query`, ignoring pagination.
    fn count_posts(&self, query: &PostListQuery) -> RepositoryResult<u64>;
    /// Posts matching `query` in ascending id order.
    fn list_posts(
        &self,
        query: &PostListQuery,
        offset: u64,
        limit: u64,
    ) -> RepositoryResult<Vec<Post>>;
}

pub trait PostWriter {
    fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post>;
}

pub trait CommentReader {
    fn count_comments(&self, post_id: PostId) -> RepositoryResult<u64>;
    /// Comments on a post in ascending id order.
    fn list_comments(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u64,
    ) -> RepositoryResult<Vec<Comment>>;
}

pub trait CommentWriter {
    fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment>;
}
