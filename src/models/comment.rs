//! Diesel models for the `comments` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::comment::{Comment as DomainComment, NewComment as DomainNewComment};
use crate::domain::types::{AuthorName, CommentBody, CommentId, PostId, TypeConstraintError};
use crate::models::post::Post;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Post, foreign_key = post_id))]
#[diesel(table_name = crate::schema::comments)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment<'a> {
    pub post_id: i32,
    pub author: &'a str,
    pub body: &'a str,
}

impl TryFrom<Comment> for DomainComment {
    type Error = TypeConstraintError;

    fn try_from(comment: Comment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(comment.id)?,
            post_id: PostId::new(comment.post_id)?,
            author: AuthorName::new(comment.author)?,
            body: CommentBody::new(comment.body)?,
            created_at: comment.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewComment> for NewComment<'a> {
    fn from(comment: &'a DomainNewComment) -> Self {
        Self {
            post_id: comment.post_id.get(),
            author: comment.author.as_str(),
            body: comment.body.as_str(),
        }
    }
}
