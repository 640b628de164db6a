//! Payload for commenting on a post.

use serde::Deserialize;
use validator::Validate;

use crate::domain::comment::NewComment;
use crate::domain::types::{AuthorName, CommentBody, PostId};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct NewCommentForm {
    #[validate(length(min = 1, max = 100))]
    pub author: String,
    #[validate(length(min = 1, max = 2000))]
    pub body: String,
}

impl NewCommentForm {
    pub fn into_new_comment(self, post_id: PostId) -> Result<NewComment, FormError> {
        self.validate()?;

        Ok(NewComment {
            post_id,
            author: AuthorName::new(self.author).map_err(FormError::field("author"))?,
            body: CommentBody::new(self.body).map_err(FormError::field("body"))?,
        })
    }
}
