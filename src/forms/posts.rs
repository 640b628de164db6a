//! Payload for publishing a post.

use serde::Deserialize;
use validator::Validate;

use crate::domain::post::NewPost;
use crate::domain::types::{AuthorName, PostBody, PostTitle};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct NewPostForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 20000))]
    pub body: String,
    #[validate(length(min = 1, max = 100))]
    pub author: String,
}

impl TryFrom<NewPostForm> for NewPost {
    type Error = FormError;

    fn try_from(form: NewPostForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            title: PostTitle::new(form.title).map_err(FormError::field("title"))?,
            body: PostBody::new(form.body).map_err(FormError::field("body"))?,
            author: AuthorName::new(form.author).map_err(FormError::field("author"))?,
        })
    }
}
