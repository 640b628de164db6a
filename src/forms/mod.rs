//! Request payloads accepted by the blog routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod comments;
pub mod posts;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        source: TypeConstraintError,
    },
}

impl FormError {
    pub(crate) fn field(field: &'static str) -> impl FnOnce(TypeConstraintError) -> Self {
        move |source| FormError::InvalidField { field, source }
    }
}
