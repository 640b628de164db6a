//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::post::{NewPost, Post, PostListQuery};
use crate::domain::types::PostId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CommentReader, CommentWriter, PostReader, PostWriter};

mock! {
    pub Repository {}

    impl PostReader for Repository {
        fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
        fn count_posts(&self, query: &PostListQuery) -> RepositoryResult<u64>;
        fn list_posts(
            &self,
            query: &PostListQuery,
            offset: u64,
            limit: u64,
        ) -> RepositoryResult<Vec<Post>>;
    }

    impl PostWriter for Repository {
        fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post>;
    }

    impl CommentReader for Repository {
        fn count_comments(&self, post_id: PostId) -> RepositoryResult<u64>;
        fn list_comments(
            &self,
            post_id: PostId,
            offset: u64,
            limit: u64,
        ) -> RepositoryResult<Vec<Comment>>;
    }

    impl CommentWriter for Repository {
        fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment>;
    }
}
