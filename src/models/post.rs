//! Diesel models for the `posts` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{NewPost as DomainNewPost, Post as DomainPost};
use crate::domain::types::{AuthorName, PostBody, PostId, PostTitle, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::posts)]
/// Diesel model for [`crate::domain::post::Post`].
pub struct Post {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::posts)]
/// Insertable form of [`Post`].
pub struct NewPost<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub author: &'a str,
}

impl TryFrom<Post> for DomainPost {
    type Error = TypeConstraintError;

    fn try_from(post: Post) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(post.id)?,
            title: PostTitle::new(post.title)?,
            body: PostBody::new(post.body)?,
            author: AuthorName::new(post.author)?,
            created_at: post.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewPost> for NewPost<'a> {
    fn from(post: &'a DomainNewPost) -> Self {
        Self {
            title: post.title.as_str(),
            body: post.body.as_str(),
            author: post.author.as_str(),
        }
    }
}
