//! Image comparison for automated visual checks.
//!
//! Quantifies how different two captured bitmaps are, decides whether they
//! count as the same within a tolerance, and locates one image as a
//! sub-region of another. Built to back visual-regression style test
//! assertions over screenshots.
//!
//! ```
//! use screen_compare::{RasterImage, Rect, difference, part_of, same_as};
//!
//! // Two identical buffers are the same image.
//! let a = RasterImage::from_raw(4, 4, vec![100; 48])?;
//! let b = RasterImage::from_raw(4, 4, vec![100; 48])?;
//! assert_eq!(difference(&a, &b)?, 0.0);
//! assert!(same_as(&a, &b)?);
//!
//! // A crop of an image is found back at its source position.
//! let needle = a.crop(Rect::new(1, 1, 2, 2))?;
//! assert!(part_of(&needle, &a)?.is_some());
//! # Ok::<(), screen_compare::CompareError>(())
//! ```
//!
//! File-backed images decode lazily: constructing a [`RasterImage`] from a
//! path is free, and the decode plus RGB normalization happen on the first
//! pixel-dependent call.

pub mod compare;
pub mod error;
pub mod raster;
pub mod rect;

pub use compare::tolerance;
pub use compare::{Match, difference, part_of, part_of_within, same_as, same_as_within};
pub use error::{CompareError, CompareResult};
pub use raster::RasterImage;
pub use rect::Rect;
