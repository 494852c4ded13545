//! Sub-image localization via normalized cross-correlation.

use image::DynamicImage;
use imageproc::template_matching::{MatchTemplateMethod, find_extremes, match_template};

use crate::compare::tolerance;
use crate::error::{CompareError, CompareResult};
use crate::raster::RasterImage;

/// Best placement of a needle image inside a haystack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Column of the match's upper-left corner in the haystack.
    pub x: u32,
    /// Row of the match's upper-left corner in the haystack.
    pub y: u32,
    /// Correlation score at that placement; 1.0 is a perfect match.
    pub score: f32,
}

/// Locate `needle` inside `haystack` with the default confidence threshold.
pub fn part_of(needle: &RasterImage, haystack: &RasterImage) -> CompareResult<Option<Match>> {
    part_of_within(needle, haystack, tolerance::PERFECT)
}

/// Locate the best placement of `needle` inside `haystack`.
///
/// Scores every valid upper-left placement with normalized cross-correlation
/// and keeps the global maximum. Correlation is a similarity, so higher means
/// closer — the opposite sense of [`difference`](crate::difference) — and the
/// score is held to the same `threshold` scale. Returns `None` when the best
/// score falls below `threshold`; `None` means absence, not a low-confidence
/// location. Only the single best placement is ever reported.
///
/// A needle larger than the haystack in either dimension is a `SizeMismatch`.
pub fn part_of_within(
    needle: &RasterImage,
    haystack: &RasterImage,
    threshold: f64,
) -> CompareResult<Option<Match>> {
    let needle_rgb = needle.rgb()?;
    let haystack_rgb = haystack.rgb()?;

    if needle_rgb.width() > haystack_rgb.width() || needle_rgb.height() > haystack_rgb.height() {
        return Err(CompareError::SizeMismatch {
            left: needle_rgb.dimensions(),
            right: haystack_rgb.dimensions(),
        });
    }

    // The correlation kernel is single-channel.
    let needle_gray = DynamicImage::ImageRgb8(needle_rgb.clone()).to_luma8();
    let haystack_gray = DynamicImage::ImageRgb8(haystack_rgb.clone()).to_luma8();

    log::debug!(
        "correlating {}x{} needle over {}x{} haystack",
        needle_gray.width(),
        needle_gray.height(),
        haystack_gray.width(),
        haystack_gray.height(),
    );

    let surface = match_template(
        &haystack_gray,
        &needle_gray,
        MatchTemplateMethod::CrossCorrelationNormalized,
    );

    let extremes = find_extremes(&surface);
    let (x, y) = extremes.max_value_location;
    let score = extremes.max_value;
    log::debug!("best correlation {score:.4} at ({x},{y})");

    if (score as f64) < threshold {
        return Ok(None);
    }
    Ok(Some(Match { x, y, score }))
}
