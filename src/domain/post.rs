use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{AuthorName, PostBody, PostId, PostTitle};

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub body: PostBody,
    pub author: AuthorName,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPost {
    pub title: PostTitle,
    pub body: PostBody,
    pub author: AuthorName,
}

/// Filter shared by the count and fetch halves of a post listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostListQuery {
    pub author: Option<String>,
    pub search: Option<String>,
}

impl PostListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}
