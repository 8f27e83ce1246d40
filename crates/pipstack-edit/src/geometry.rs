//! Overlay geometry against the reference canvas.
//!
//! Scale and offset are computed in the fixed 1024x576 reference space; the
//! renderer maps them onto whatever output resolution it produces.

use pipstack_models::{Offset, Position, REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// Uniform scale that fits the overlay within the reference canvas.
///
/// Each axis yields a candidate factor, `(1024 / width) * scale` and
/// `(576 / height) * scale`; the smaller one wins so the more constraining
/// axis governs. Both candidates are rounded to 2 decimals before the
/// comparison.
pub fn scale_to_output_size(pip_width: f64, pip_height: f64, scale: f64) -> f64 {
    let width_factor = round2((REFERENCE_WIDTH / pip_width) * scale);
    let height_factor = round2((REFERENCE_HEIGHT / pip_height) * scale);

    width_factor.min(height_factor)
}

/// Normalized offset that pushes the overlay `padding` pixels in from the
/// corner named by `position`.
///
/// The ratios are the fraction of the canvas the padding consumes on each
/// axis; the sign selects the corner (negative x = right edge, negative
/// y = top edge). Each component is rounded to 3 decimals.
pub fn padding_to_offsets(padding: f64, position: Position) -> Offset {
    let x_ratio = 1.0 - (REFERENCE_WIDTH - padding) / REFERENCE_WIDTH;
    let y_ratio = 1.0 - (REFERENCE_HEIGHT - padding) / REFERENCE_HEIGHT;

    let (x, y) = match position {
        Position::TopRight => (-x_ratio, -y_ratio),
        Position::TopLeft => (x_ratio, -y_ratio),
        Position::BottomRight => (-x_ratio, y_ratio),
        Position::BottomLeft => (x_ratio, y_ratio),
    };

    Offset::new(round3(x), round3(y))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
