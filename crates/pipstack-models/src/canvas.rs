//! Reference canvas constants.
//!
//! All scale and offset math runs against a fixed SD canvas, regardless of
//! the resolution the renderer ultimately outputs.

/// Width of the reference canvas in pixels.
pub const REFERENCE_WIDTH: f64 = 1024.0;

/// Height of the reference canvas in pixels.
pub const REFERENCE_HEIGHT: f64 = 576.0;

/// Timeline track holding the picture-in-picture overlay clip.
pub const PIP_TRACK_INDEX: usize = 0;

/// Timeline track holding the main video clip.
pub const MAIN_TRACK_INDEX: usize = 1;
