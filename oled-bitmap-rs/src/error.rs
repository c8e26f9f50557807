//! Error types for bitmap validation and packing.

use core::fmt;

/// Errors that can occur while building or packing a monochrome bitmap.
///
/// Rendering never produces a `BitmapError`: the renderer is generic over
/// the sink's own error type and forwards it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    /// Width or height is zero.
    ZeroDimension,
    /// Buffer length does not match `width * height / 8` bytes.
    LengthMismatch {
        /// Byte count implied by the dimensions.
        expected: usize,
        /// Byte count actually supplied.
        actual: usize,
    },
    /// `width * height` is not a whole number of bytes.
    PartialByte,
    /// Width is not a multiple of 8, so rows cannot be packed into whole bytes.
    WidthNotByteAligned,
    /// Pixel count is not a whole number of rows.
    RaggedRows,
    /// Packed output does not fit in the destination buffer.
    CapacityExceeded,
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BitmapError::ZeroDimension => write!(f, "Bitmap width and height must be non-zero"),
            BitmapError::LengthMismatch { expected, actual } => write!(
                f,
                "Bitmap buffer is {} bytes, dimensions require {}",
                actual, expected
            ),
            BitmapError::PartialByte => write!(f, "Bitmap pixel count must be a multiple of 8"),
            BitmapError::WidthNotByteAligned => write!(f, "Bitmap width must be a multiple of 8"),
            BitmapError::RaggedRows => write!(f, "Pixel count is not a whole number of rows"),
            BitmapError::CapacityExceeded => write!(f, "Packed bitmap exceeds buffer capacity"),
        }
    }
}
