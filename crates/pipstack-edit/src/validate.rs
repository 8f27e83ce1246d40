//! Request validation.
//!
//! Checks are pure and synchronous, run in field declaration order, and stop
//! at the first violation. Absent optional numerics are not violations; the
//! defaulting pass in [`crate::compose`] handles them.

use std::str::FromStr;

use thiserror::Error;
use url::Url;

use pipstack_models::{CompositionRequest, Position};

const URL_MIN_LEN: usize = 2;
const URL_MAX_LEN: usize = 300;
const DURATION_RANGE: (f64, f64) = (0.1, 120.0);
const PADDING_RANGE: (f64, f64) = (0.0, 100.0);
const SCALE_RANGE: (f64, f64) = (0.0, 2.0);
const PIP_WIDTH_RANGE: (f64, f64) = (0.0, 1920.0);
const PIP_HEIGHT_RANGE: (f64, f64) = (0.0, 1080.0);

/// A rejected request field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the first offending field, as spelled on the wire.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn required(field: &'static str) -> Self {
        Self::new(field, format!("\"{field}\" is required"))
    }
}

/// Check presence, type and range of every request field.
///
/// Returns the first violation encountered; later fields are not inspected.
pub fn validate(req: &CompositionRequest) -> Result<(), ValidationError> {
    check_url("video", req.video.as_deref())?;
    check_url("pip", req.pip.as_deref())?;
    check_position(req.position.as_deref())?;
    check_range("duration", req.duration, DURATION_RANGE)?;
    check_range("padding", req.padding, PADDING_RANGE)?;
    check_range("scale", req.scale, SCALE_RANGE)?;
    check_range("pipWidth", req.pip_width, PIP_WIDTH_RANGE)?;
    check_range("pipHeight", req.pip_height, PIP_HEIGHT_RANGE)?;
    Ok(())
}

fn check_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    let value = value.ok_or_else(|| ValidationError::required(field))?;

    if Url::parse(value).is_err() {
        return Err(ValidationError::new(
            field,
            format!("\"{field}\" must be a valid uri"),
        ));
    }
    if value.len() < URL_MIN_LEN {
        return Err(ValidationError::new(
            field,
            format!("\"{field}\" length must be at least {URL_MIN_LEN} characters long"),
        ));
    }
    if value.len() > URL_MAX_LEN {
        return Err(ValidationError::new(
            field,
            format!("\"{field}\" length must be less than or equal to {URL_MAX_LEN} characters long"),
        ));
    }
    Ok(())
}

fn check_position(value: Option<&str>) -> Result<(), ValidationError> {
    let value = value.ok_or_else(|| ValidationError::required("position"))?;

    Position::from_str(value).map_err(|_| {
        let allowed = Position::ALL
            .iter()
            .map(Position::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        ValidationError::new("position", format!("\"position\" must be one of [{allowed}]"))
    })?;
    Ok(())
}

fn check_range(
    field: &'static str,
    value: Option<f64>,
    (min, max): (f64, f64),
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };

    if value < min {
        return Err(ValidationError::new(
            field,
            format!("\"{field}\" must be greater than or equal to {min}"),
        ));
    }
    if value > max {
        return Err(ValidationError::new(
            field,
            format!("\"{field}\" must be less than or equal to {max}"),
        ));
    }
    Ok(())
}
