use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for image-comparison operations.
pub type CompareResult<T> = Result<T, CompareError>;

/// The error type for all image-comparison operations.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("An image needs exactly one source: a file path or a decoded image")]
    Construction,

    #[error("Failed to decode image at {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to decode in-memory image data: {source}")]
    DecodeBuffer { source: image::ImageError },

    #[error("Raw buffer length does not match a {width}x{height} RGB image")]
    InvalidBuffer { width: u32, height: u32 },

    #[error("Pixel ({x},{y}) is outside image bounds ({width}x{height})")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Crop rectangle [{x},{y},{w},{h}] exceeds image bounds ({width}x{height})")]
    CropOutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        width: u32,
        height: u32,
    },

    #[error("Failed to encode image to {path:?}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image dimensions do not match: {left:?} vs {right:?}")]
    SizeMismatch { left: (u32, u32), right: (u32, u32) },
}
