//! Use cases shared by the HTTP layer and tests, independent of actix.

pub mod comments;
pub mod errors;
pub mod posts;

pub use errors::{ServiceError, ServiceResult};
