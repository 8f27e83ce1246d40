//! Picture-in-picture composition core.
//!
//! This crate turns a [`CompositionRequest`] into a render-ready edit
//! document: it validates the request, derives overlay geometry against the
//! reference canvas, and splices the results into the edit template loaded
//! by a [`TemplateStore`].
//!
//! [`CompositionRequest`]: pipstack_models::CompositionRequest

pub mod compose;
pub mod error;
pub mod geometry;
pub mod template;
pub mod validate;

pub use compose::{create_composition, populate, Composition, Derived};
pub use error::{EditError, EditResult};
pub use geometry::{padding_to_offsets, scale_to_output_size};
pub use template::{TemplateError, TemplateStore};
pub use validate::{validate, ValidationError};
