//! Composition pipeline: resolve the request, derive geometry, populate the
//! template.

use tracing::error;

use pipstack_models::{
    CompositionRequest, Edit, Offset, Position, DEFAULT_DURATION_SECS, DEFAULT_PADDING_PX,
    DEFAULT_SCALE, MAIN_TRACK_INDEX, PIP_TRACK_INDEX, REFERENCE_HEIGHT, REFERENCE_WIDTH,
};

use crate::error::EditError;
use crate::geometry::{padding_to_offsets, scale_to_output_size};
use crate::template::TemplateStore;
use crate::validate::{validate, ValidationError};

/// A validated composition request with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub video: String,
    pub pip: String,
    pub position: Position,
    pub duration: f64,
    pub padding: f64,
    pub scale: f64,
    pub pip_width: f64,
    pub pip_height: f64,
}

impl Composition {
    /// Validate `req`, then apply defaults.
    ///
    /// The two passes are distinct: validation only checks what is present,
    /// and defaulting never rejects. `duration` falls back when absent;
    /// `padding`, `scale`, `pipWidth` and `pipHeight` fall back when absent
    /// or zero (an explicit zero reads as "not provided" in the renderer
    /// contract).
    pub fn resolve(req: &CompositionRequest) -> Result<Self, ValidationError> {
        validate(req)?;

        let video = req.video.clone().ok_or_else(|| unreachable_required("video"))?;
        let pip = req.pip.clone().ok_or_else(|| unreachable_required("pip"))?;
        let position = req
            .position
            .as_deref()
            .and_then(|s| s.parse::<Position>().ok())
            .ok_or_else(|| unreachable_required("position"))?;

        Ok(Self {
            video,
            pip,
            position,
            duration: req.duration.unwrap_or(DEFAULT_DURATION_SECS),
            padding: value_or_default(req.padding, DEFAULT_PADDING_PX),
            scale: value_or_default(req.scale, DEFAULT_SCALE),
            pip_width: value_or_default(req.pip_width, REFERENCE_WIDTH),
            pip_height: value_or_default(req.pip_height, REFERENCE_HEIGHT),
        })
    }
}

/// Zero-or-absent falls back to the default.
fn value_or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

// `resolve` only runs these after `validate` has passed; they exist so the
// Option unwrapping stays panic-free.
fn unreachable_required(field: &'static str) -> ValidationError {
    ValidationError {
        field,
        message: format!("\"{field}\" is required"),
    }
}

/// Geometry derived from a resolved composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub offset: Offset,
    pub scale: f64,
}

impl Derived {
    pub fn of(composition: &Composition) -> Self {
        Self {
            offset: padding_to_offsets(composition.padding, composition.position),
            scale: scale_to_output_size(
                composition.pip_width,
                composition.pip_height,
                composition.scale,
            ),
        }
    }
}

/// Splice a composition into a loaded template.
///
/// Writes the pip clip's src, length, position, offset and scale, and the
/// main clip's src and length; every other field of the template is left as
/// loaded. `edit` must come from [`TemplateStore::load`], which has verified
/// both tracks exist with at least one clip.
pub fn populate(edit: &mut Edit, composition: &Composition, derived: &Derived) {
    let pip_clip = &mut edit.timeline.tracks[PIP_TRACK_INDEX].clips[0];
    pip_clip.asset.src = composition.pip.clone();
    pip_clip.length = composition.duration;
    pip_clip.position = Some(composition.position);
    pip_clip.offset = Some(derived.offset);
    pip_clip.scale = Some(derived.scale);

    let main_clip = &mut edit.timeline.tracks[MAIN_TRACK_INDEX].clips[0];
    main_clip.asset.src = composition.video.clone();
    main_clip.length = composition.duration;
}

/// Build a render-ready edit document for a composition request.
///
/// Runs validation before any template I/O, then derives geometry, loads
/// the template, populates it and serializes the result. Either the fully
/// populated document or an error comes back, never a partial edit.
pub async fn create_composition(
    store: &TemplateStore,
    req: &CompositionRequest,
) -> Result<String, EditError> {
    let composition = Composition::resolve(req)?;
    let derived = Derived::of(&composition);

    let mut edit = store.load().await.map_err(|e| {
        error!(error = %e, "Template unavailable");
        e
    })?;

    populate(&mut edit, &composition, &derived);

    Ok(edit.to_json()?)
}
