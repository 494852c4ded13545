//! Normalized pixel-difference metric and the equality predicate built on it.

use crate::compare::tolerance;
use crate::error::{CompareError, CompareResult};
use crate::raster::RasterImage;

/// Normalized distance between two same-sized images.
///
/// Walks both realized RGB buffers in lock-step, pairing pixels positionally
/// in row-major order, and sums the absolute per-channel deltas. The raw sum
/// is scaled by the maximum single-channel delta (255) and by the component
/// count (`width * height * 3`), so 0.0 means pixel-identical and a uniform
/// shift of +n in every channel scores `n / 255` regardless of image size.
///
/// Images with different dimensions are rejected with `SizeMismatch`; the
/// metric never resizes or re-aligns its inputs.
pub fn difference(a: &RasterImage, b: &RasterImage) -> CompareResult<f64> {
    let lhs = a.rgb()?;
    let rhs = b.rgb()?;
    if lhs.dimensions() != rhs.dimensions() {
        return Err(CompareError::SizeMismatch {
            left: lhs.dimensions(),
            right: rhs.dimensions(),
        });
    }

    let raw: u64 = lhs
        .as_raw()
        .iter()
        .zip(rhs.as_raw())
        .map(|(l, r)| l.abs_diff(*r) as u64)
        .sum();

    let components = lhs.width() as f64 * lhs.height() as f64 * 3.0;
    if components == 0.0 {
        // Zero-pixel images have nothing to differ over.
        return Ok(0.0);
    }
    Ok(raw as f64 / 255.0 / components)
}

/// Whether `a` and `b` are the same image within the default tolerance.
pub fn same_as(a: &RasterImage, b: &RasterImage) -> CompareResult<bool> {
    same_as_within(a, b, tolerance::PERFECT)
}

/// Whether the difference between `a` and `b` stays at or below `threshold`.
///
/// A difference exactly equal to `threshold` counts as the same.
pub fn same_as_within(a: &RasterImage, b: &RasterImage, threshold: f64) -> CompareResult<bool> {
    Ok(difference(a, b)? <= threshold)
}
