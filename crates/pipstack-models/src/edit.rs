//! Edit document model (timeline, tracks, clips).
//!
//! Mirrors the renderer's edit JSON. Only the fields this service reads or
//! writes are typed; everything else in the deployment template rides along
//! in the flattened `extra` maps so a load/populate/serialize round trip
//! leaves it untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::position::Position;

/// A complete edit document handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Edit {
    pub timeline: Timeline,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Edit {
    /// Serialize the edit to the JSON text sent to the renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The multi-track timeline of an edit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Timeline {
    pub tracks: Vec<Track>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single timeline track. Track order is z-order: track 0 renders on top.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Track {
    pub clips: Vec<Clip>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A clip on a track.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Clip {
    pub asset: Asset,
    /// Clip length in seconds.
    pub length: f64,
    /// Anchor corner; only present on the overlay clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Normalized displacement from the anchor; only present on the overlay clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
    /// Scale multiplier; only present on the overlay clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The media asset a clip plays.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Asset {
    pub src: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Normalized offset of a clip from its anchor position.
///
/// Negative x moves toward the right edge, negative y toward the bottom
/// edge, per the renderer's coordinate convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
