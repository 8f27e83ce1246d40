//! Composition request model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Clip length in seconds when the request does not supply one.
pub const DEFAULT_DURATION_SECS: f64 = 15.0;

/// Edge padding in pixels when the request does not supply one.
pub const DEFAULT_PADDING_PX: f64 = 20.0;

/// Overlay scale multiplier when the request does not supply one.
pub const DEFAULT_SCALE: f64 = 0.25;

/// An incoming picture-in-picture composition request.
///
/// `video`, `pip` and `position` are required; the numeric fields are
/// optional and fall back to service defaults after validation. Unknown
/// extra fields are ignored on deserialization. `position` is kept as a raw
/// string here so enum membership is checked by the validator, which owns
/// the error message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRequest {
    /// URL of the main (background) video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    /// URL of the overlay video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pip: Option<String>,

    /// Corner the overlay is anchored to (`topLeft`, `topRight`,
    /// `bottomLeft`, `bottomRight`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Length of both clips in seconds, 0.1 to 120.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Distance of the overlay from the canvas edge in pixels, 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,

    /// Overlay scale multiplier, 0 to 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,

    /// Pixel width of the overlay source, 0 to 1920.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pip_width: Option<f64>,

    /// Pixel height of the overlay source, 0 to 1080.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pip_height: Option<f64>,
}
