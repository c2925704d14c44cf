//! Screen-space geometry helpers.

use crate::config::Dimensions;
use crate::scale::PlotFrame;

// ============================================================================
// Dimension Limits
// ============================================================================

/// Computes the screen intervals of a box drawn from `start` to `end`.
///
/// Each axis the tool may edit is ordered low-to-high and clipped to the frame;
/// an axis the tool may not edit spans the frame's full range instead.
///
/// # Returns
/// `(x_interval, y_interval)` in screen coordinates.
pub fn dim_limits(
    start: (f64, f64),
    end: (f64, f64),
    frame: &PlotFrame,
    dims: Dimensions,
) -> ((f64, f64), (f64, f64)) {
    let h_range = frame.h_range();
    let v_range = frame.v_range();

    let sx = if dims.edits_width() {
        clip(ordered(start.0, end.0), h_range)
    } else {
        h_range
    };
    let sy = if dims.edits_height() {
        clip(ordered(start.1, end.1), v_range)
    } else {
        v_range
    };
    (sx, sy)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    (a.min(b), a.max(b))
}

fn clip((lo, hi): (f64, f64), (start, end): (f64, f64)) -> (f64, f64) {
    (lo.max(start), hi.min(end))
}
