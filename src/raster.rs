//! Lazily-realized RGB raster images.

use std::cell::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::error::{CompareError, CompareResult};
use crate::rect::Rect;

/// A raster image realized to 3-channel RGB on first use.
///
/// A path-sourced image does not touch the filesystem at construction; the
/// decode and RGB normalization run once, on the first pixel-dependent call,
/// and the realized buffer is cached for the lifetime of the value. Sources
/// in other color modes (grayscale, indexed, RGBA) are normalized to RGB, so
/// every realized buffer is 3 bytes per pixel.
///
/// The realization cache is a `OnceCell`, which makes the type `!Sync`:
/// sharing one instance across threads is a compile error rather than a race
/// on first access.
#[derive(Clone)]
pub struct RasterImage {
    path: Option<PathBuf>,
    realized: OnceCell<RgbImage>,
}

impl RasterImage {
    /// Build an image from exactly one source.
    ///
    /// A captured screen is referenced either by the file it was saved to or
    /// by an already-decoded buffer; supplying both or neither is a
    /// configuration error, reported here rather than on first use.
    pub fn new(path: Option<PathBuf>, image: Option<DynamicImage>) -> CompareResult<Self> {
        match (path, image) {
            (Some(path), None) => Ok(Self::from_path(path)),
            (None, Some(image)) => Ok(Self::from_image(image)),
            _ => Err(CompareError::Construction),
        }
    }

    /// Image backed by a file, decoded on first use.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            realized: OnceCell::new(),
        }
    }

    /// Image from an already-decoded buffer, normalized to RGB immediately.
    pub fn from_image(image: DynamicImage) -> Self {
        Self::from_buffer(image.to_rgb8())
    }

    /// Decode an image from in-memory encoded bytes (PNG, JPEG, ...).
    pub fn from_memory(bytes: &[u8]) -> CompareResult<Self> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|source| CompareError::DecodeBuffer { source })?;
        Ok(Self::from_image(decoded))
    }

    /// Wrap a raw row-major RGB buffer, 3 bytes per pixel.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> CompareResult<Self> {
        let buffer = RgbImage::from_raw(width, height, pixels)
            .ok_or(CompareError::InvalidBuffer { width, height })?;
        Ok(Self::from_buffer(buffer))
    }

    fn from_buffer(buffer: RgbImage) -> Self {
        let realized = OnceCell::new();
        let _ = realized.set(buffer);
        Self {
            path: None,
            realized,
        }
    }

    /// The realized RGB buffer, decoding from the source path on first call.
    pub(crate) fn rgb(&self) -> CompareResult<&RgbImage> {
        if let Some(img) = self.realized.get() {
            return Ok(img);
        }
        // One source is guaranteed at construction and in-memory sources are
        // realized up front, so an empty cell always has a path behind it.
        let path = self.path.as_deref().ok_or(CompareError::Construction)?;
        log::debug!("decoding {}", path.display());
        let decoded = image::open(path).map_err(|source| CompareError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.realized.get_or_init(|| decoded.to_rgb8()))
    }

    pub fn width(&self) -> CompareResult<u32> {
        Ok(self.rgb()?.width())
    }

    pub fn height(&self) -> CompareResult<u32> {
        Ok(self.rgb()?.height())
    }

    pub fn dimensions(&self) -> CompareResult<(u32, u32)> {
        Ok(self.rgb()?.dimensions())
    }

    /// Channel values at `(x, y)`; `x` counts from the left edge, `y` from
    /// the top.
    pub fn pixel(&self, x: u32, y: u32) -> CompareResult<(u8, u8, u8)> {
        let img = self.rgb()?;
        let p = img
            .get_pixel_checked(x, y)
            .ok_or(CompareError::OutOfRange {
                x,
                y,
                width: img.width(),
                height: img.height(),
            })?;
        Ok((p.0[0], p.0[1], p.0[2]))
    }

    /// A new image holding only the selected rectangle, re-anchored so its
    /// own (0,0) is the rectangle's upper-left corner.
    ///
    /// The result owns an independent buffer; it does not alias this image.
    pub fn crop(&self, rect: Rect) -> CompareResult<RasterImage> {
        let img = self.rgb()?;
        if !rect.fits_within(img.width(), img.height()) {
            return Err(CompareError::CropOutOfBounds {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                width: img.width(),
                height: img.height(),
            });
        }
        let view = image::imageops::crop_imm(img, rect.x, rect.y, rect.w, rect.h);
        Ok(Self::from_buffer(view.to_image()))
    }

    /// Raw row-major RGB dump, 3 bytes per pixel, length `width * height * 3`.
    pub fn to_bytes(&self) -> CompareResult<Vec<u8>> {
        Ok(self.rgb()?.as_raw().clone())
    }

    /// Write the image to `path` as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> CompareResult<()> {
        self.save_with_format(path, ImageFormat::Png)
    }

    /// Write the image to `path` in the given encoded format.
    ///
    /// The parent directory must already exist; a failure mid-write can
    /// leave a partial file behind.
    pub fn save_with_format(
        &self,
        path: impl AsRef<Path>,
        format: ImageFormat,
    ) -> CompareResult<()> {
        let path = path.as_ref();
        self.rgb()?
            .save_with_format(path, format)
            .map_err(|source| CompareError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.realized.get(), &self.path) {
            (Some(img), _) => write!(f, "RasterImage({}x{})", img.width(), img.height()),
            (None, Some(path)) => write!(f, "RasterImage(unrealized {:?})", path),
            (None, None) => write!(f, "RasterImage(no source)"),
        }
    }
}
