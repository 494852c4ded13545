//! Tests for the comparison and localization functionality.

use crate::compare::{difference, part_of, part_of_within, same_as, same_as_within, tolerance};
use crate::error::CompareError;
use crate::raster::RasterImage;
use crate::rect::Rect;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic textured fixture; rich enough that no two placements of a
/// sub-region correlate as well as the region itself.
fn textured(width: u32, height: u32, seed: u32) -> RasterImage {
    let mut state = seed;
    let pixels = (0..width * height * 3)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect();
    RasterImage::from_raw(width, height, pixels).unwrap()
}

fn uniform(width: u32, height: u32, value: u8) -> RasterImage {
    RasterImage::from_raw(width, height, vec![value; (width * height * 3) as usize]).unwrap()
}

#[test]
fn difference_of_image_with_itself_is_zero() {
    let img = textured(32, 24, 7);
    assert_eq!(difference(&img, &img).unwrap(), 0.0);
}

#[test]
fn difference_is_symmetric() {
    let a = textured(16, 16, 1);
    let b = textured(16, 16, 2);
    assert_eq!(difference(&a, &b).unwrap(), difference(&b, &a).unwrap());
}

#[test]
fn uniform_channel_shift_scores_shift_over_255() {
    // +10 in every channel of every pixel averages out to 10/255,
    // independent of image size.
    for (w, h) in [(4, 4), (31, 17)] {
        let a = uniform(w, h, 100);
        let b = uniform(w, h, 110);
        let d = difference(&a, &b).unwrap();
        assert!((d - 10.0 / 255.0).abs() < 1e-12, "got {d}");
    }
}

#[test]
fn difference_grows_with_channel_delta() {
    let base = uniform(8, 8, 100);
    let near = uniform(8, 8, 105);
    let far = uniform(8, 8, 120);
    assert!(difference(&base, &near).unwrap() < difference(&base, &far).unwrap());
}

#[test]
fn difference_rejects_mismatched_dimensions() {
    let a = textured(4, 4, 3);
    let b = textured(5, 4, 3);
    assert!(matches!(
        difference(&a, &b),
        Err(CompareError::SizeMismatch {
            left: (4, 4),
            right: (5, 4),
        })
    ));
}

#[test]
fn same_as_accepts_identical_and_rejects_distant_images() {
    let a = uniform(8, 8, 100);
    assert!(same_as(&a, &a).unwrap());

    // A full-range flip is far beyond every named threshold.
    let b = uniform(8, 8, 255);
    let inverted = uniform(8, 8, 0);
    assert!(!same_as(&b, &inverted).unwrap());
}

#[test]
fn same_as_within_treats_threshold_as_inclusive() {
    let a = uniform(8, 8, 100);
    let b = uniform(8, 8, 110);
    let d = difference(&a, &b).unwrap();

    assert!(same_as_within(&a, &b, d).unwrap());
    assert!(!same_as_within(&a, &b, d - 1e-9).unwrap());
}

#[test]
fn named_thresholds_order_assertion_strictness() {
    let a = uniform(8, 8, 100);
    let b = uniform(8, 8, 120);
    // 20/255 ~ 0.078: inside PERFECT, outside GOOD.
    assert!(same_as_within(&a, &b, tolerance::PERFECT).unwrap());
    assert!(!same_as_within(&a, &b, tolerance::GOOD).unwrap());
}

#[test]
fn part_of_recovers_crop_origin() {
    init_logs();
    let haystack = textured(64, 48, 11);
    let needle = haystack.crop(Rect::new(26, 23, 16, 12)).unwrap();

    let found = part_of(&needle, &haystack).unwrap().expect("needle not found");
    assert_eq!((found.x, found.y), (26, 23));
    assert!(found.score > 0.99, "exact sub-region scored {}", found.score);
}

#[test]
fn part_of_whole_image_matches_at_origin() {
    let img = textured(20, 20, 5);
    let found = part_of(&img, &img).unwrap().expect("image not part of itself");
    assert_eq!((found.x, found.y), (0, 0));
}

#[test]
fn part_of_unrelated_needle_is_absent() {
    init_logs();
    let haystack = textured(32, 32, 13);
    // An all-black needle correlates with nothing.
    let needle = uniform(8, 8, 0);
    assert_eq!(part_of(&needle, &haystack).unwrap(), None);
}

#[test]
fn part_of_within_respects_strict_threshold() {
    let haystack = textured(32, 32, 17);
    let needle = textured(8, 8, 99);
    // Unrelated texture never reaches a near-perfect correlation.
    assert_eq!(part_of_within(&needle, &haystack, 0.999).unwrap(), None);
}

#[test]
fn part_of_rejects_needle_larger_than_haystack() {
    let haystack = textured(10, 10, 1);
    let needle = textured(11, 10, 1);
    assert!(matches!(
        part_of(&needle, &haystack),
        Err(CompareError::SizeMismatch { .. })
    ));
}

#[test]
fn save_then_reload_round_trips() {
    let img = textured(24, 18, 21);
    let path = std::env::temp_dir().join(format!(
        "screen-compare-roundtrip-{}.png",
        std::process::id()
    ));
    img.save(&path).unwrap();

    let reloaded = RasterImage::from_path(&path);
    assert!(same_as(&img, &reloaded).unwrap());
    assert_eq!(difference(&img, &reloaded).unwrap(), 0.0);

    let _ = std::fs::remove_file(&path);
}
