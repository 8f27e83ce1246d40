//! Shared data models for the Pipstack composition service.
//!
//! This crate provides Serde-serializable types for:
//! - Composition requests and overlay corner positions
//! - Edit documents (timeline, tracks, clips) as consumed by the renderer
//! - Reference canvas constants used by geometry derivation

pub mod canvas;
pub mod edit;
pub mod position;
pub mod request;

// Re-export common types
pub use canvas::{MAIN_TRACK_INDEX, PIP_TRACK_INDEX, REFERENCE_HEIGHT, REFERENCE_WIDTH};
pub use edit::{Asset, Clip, Edit, Offset, Timeline, Track};
pub use position::{Position, PositionParseError};
pub use request::{
    CompositionRequest, DEFAULT_DURATION_SECS, DEFAULT_PADDING_PX, DEFAULT_SCALE,
};
