//! Database models shared across the blog repository.

pub mod comment;
#[cfg(feature = "server")]
pub mod config;
pub mod post;
