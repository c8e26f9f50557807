//! Packing boolean pixel rows into the renderer's byte layout.
//!
//! The output is what the bitmap generator emits for each image: row-major,
//! 8 pixels per byte, least significant bit leftmost. Rows must be a whole
//! number of bytes wide, so a row never shares a byte with the next one.

use heapless::Vec;

use crate::error::BitmapError;

/// Number of bytes holding a `width`×`height` image, or `None` if the pixel
/// count is not a whole number of bytes.
///
/// Rows are not padded, so this is the length [`MonoImage::new`](crate::MonoImage::new)
/// expects.
pub const fn packed_len(width: u32, height: u32) -> Option<usize> {
    let pixels = width as u64 * height as u64;
    if pixels % 8 != 0 {
        return None;
    }
    Some((pixels / 8) as usize)
}

/// Pack row-major `pixels` of the given `width` into at most `N` bytes.
///
/// # Errors
///
/// * [`BitmapError::ZeroDimension`] if `width` is zero.
/// * [`BitmapError::WidthNotByteAligned`] if `width` is not a multiple of 8.
/// * [`BitmapError::RaggedRows`] if `pixels.len()` is not a multiple of `width`.
/// * [`BitmapError::CapacityExceeded`] if the result needs more than `N` bytes.
///
/// # Example
///
/// ```
/// use oled_bitmap_rs::pack_rows;
///
/// let mut row = [false; 8];
/// row[0] = true;
/// row[7] = true;
/// let bytes = pack_rows::<1>(&row, 8).unwrap();
/// assert_eq!(bytes.as_slice(), &[0x81]);
/// ```
pub fn pack_rows<const N: usize>(pixels: &[bool], width: u32) -> Result<Vec<u8, N>, BitmapError> {
    if width == 0 {
        return Err(BitmapError::ZeroDimension);
    }
    if width % 8 != 0 {
        return Err(BitmapError::WidthNotByteAligned);
    }
    if pixels.len() % width as usize != 0 {
        return Err(BitmapError::RaggedRows);
    }

    let mut packed = Vec::new();
    for chunk in pixels.chunks(8) {
        let byte = chunk
            .iter()
            .enumerate()
            .fold(0u8, |acc, (bit, &on)| acc | (u8::from(on) << bit));
        packed
            .push(byte)
            .map_err(|_| BitmapError::CapacityExceeded)?;
    }

    Ok(packed)
}
