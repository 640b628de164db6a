//! Domain entities exposed by the blog service layer.

pub mod comment;
pub mod post;
pub mod types;
