use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::post::{NewPost, Post, PostListQuery};
use crate::domain::types::PostId;
use crate::models::post::{NewPost as DbNewPost, Post as DbPost};
use crate::repository::errors::{RepositoryResult, to_sql_bound};
use crate::repository::{DieselRepository, PostReader, PostWriter};
use crate::schema::posts;

/// Escapes LIKE wildcards so `term` matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Applies the author and title filters; used for both count and fetch.
fn filtered(query: &PostListQuery) -> posts::BoxedQuery<'_, Sqlite> {
    let mut items = posts::table.into_boxed();

    if let Some(author) = &query.author {
        items = items.filter(posts::author.eq(author.as_str()));
    }
    if let Some(term) = &query.search {
        items = items.filter(
            posts::title
                .like(format!("%{}%", escape_like(term)))
                .escape('\\'),
        );
    }

    items
}

impl PostReader for DieselRepository {
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        let mut conn = self.conn()?;
        let post = posts::table
            .find(id.get())
            .first::<DbPost>(&mut conn)
            .optional()?;

        Ok(post.map(Post::try_from).transpose()?)
    }

    fn count_posts(&self, query: &PostListQuery) -> RepositoryResult<u64> {
        let mut conn = self.conn()?;
        let total: i64 = filtered(query).count().get_result(&mut conn)?;

        Ok(total.max(0) as u64)
    }

    fn list_posts(
        &self,
        query: &PostListQuery,
        offset: u64,
        limit: u64,
    ) -> RepositoryResult<Vec<Post>> {
        let mut conn = self.conn()?;

        let rows = filtered(query)
            .order(posts::id.asc())
            .offset(to_sql_bound(offset)?)
            .limit(to_sql_bound(limit)?)
            .load::<DbPost>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post> {
        let mut conn = self.conn()?;
        let insertable = DbNewPost::from(new_post);

        let created = diesel::insert_into(posts::table)
            .values(&insertable)
            .get_result::<DbPost>(&mut conn)?;

        Ok(created.try_into()?)
    }
}
