//! Composition pipeline error types.

use thiserror::Error;

use crate::template::TemplateError;
use crate::validate::ValidationError;

pub type EditResult<T> = Result<T, EditError>;

/// Failure modes of the composition pipeline.
#[derive(Debug, Error)]
pub enum EditError {
    /// The request failed validation. Recoverable: the caller should correct
    /// the request and resubmit.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing template could not be read or parsed. Unexpected for any
    /// single request, since the template is a deployment artifact.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The populated edit could not be serialized.
    #[error("Failed to serialize edit: {0}")]
    Serialize(#[from] serde_json::Error),
}
