use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{AuthorName, CommentBody, CommentId, PostId};

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author: AuthorName,
    pub body: CommentBody,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: PostId,
    pub author: AuthorName,
    pub body: CommentBody,
}
