use diesel::prelude::*;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::types::PostId;
use crate::models::comment::{Comment as DbComment, NewComment as DbNewComment};
use crate::repository::errors::{RepositoryResult, to_sql_bound};
use crate::repository::{CommentReader, CommentWriter, DieselRepository};
use crate::schema::comments;

impl CommentReader for DieselRepository {
    fn count_comments(&self, post_id: PostId) -> RepositoryResult<u64> {
        let mut conn = self.conn()?;
        let total: i64 = comments::table
            .filter(comments::post_id.eq(post_id.get()))
            .count()
            .get_result(&mut conn)?;

        Ok(total.max(0) as u64)
    }

    fn list_comments(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u64,
    ) -> RepositoryResult<Vec<Comment>> {
        let mut conn = self.conn()?;

        let rows = comments::table
            .filter(comments::post_id.eq(post_id.get()))
            .order(comments::id.asc())
            .offset(to_sql_bound(offset)?)
            .limit(to_sql_bound(limit)?)
            .load::<DbComment>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

impl CommentWriter for DieselRepository {
    fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment> {
        let mut conn = self.conn()?;
        let insertable = DbNewComment::from(new_comment);

        let created = diesel::insert_into(comments::table)
            .values(&insertable)
            .get_result::<DbComment>(&mut conn)?;

        Ok(created.try_into()?)
    }
}
