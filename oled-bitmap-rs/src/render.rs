//! Unpacking packed monochrome bitmaps into per-pixel sink calls.
//!
//! Bitmaps are row-major with 8 horizontal pixels per byte, least
//! significant bit first. The cursor wraps to the next row every `width`
//! pixels, so the byte stream needs no row padding beyond what the
//! dimensions imply.

use embedded_graphics::prelude::Point;

use crate::config::RenderConfig;
use crate::sink::SetPixel;

/// Returns `true` if a `width`×`height` rectangle holds exactly `len` bytes
/// of packed pixels.
pub fn covers_exactly(width: u32, height: u32, len: usize) -> bool {
    width as u64 * height as u64 == len as u64 * 8
}

/// Draw a packed bitmap with its top-left corner at `origin`.
///
/// Every bit of `data` becomes one [`SetPixel::set_pixel`] call, in
/// row-major order. `height` is **not** used to bound the loop: a buffer
/// longer than `width * height / 8` bytes keeps writing rows below the
/// rectangle. Use [`render_pixels_bounded`] or a validated
/// [`MonoImage`](crate::MonoImage) when the input is not trusted.
///
/// A zero `width` draws nothing.
///
/// # Errors
///
/// The first error returned by the sink stops the loop and is returned
/// unchanged.
///
/// # Example
///
/// ```
/// # use embedded_graphics::{mock_display::MockDisplay, pixelcolor::BinaryColor, prelude::*};
/// use oled_bitmap_rs::render_pixels;
///
/// let mut display = MockDisplay::<BinaryColor>::new();
/// render_pixels(&mut display, Point::new(4, 2), 8, 1, &[0b0000_0101]).unwrap();
/// assert_eq!(display.get_pixel(Point::new(4, 2)), Some(BinaryColor::On));
/// assert_eq!(display.get_pixel(Point::new(5, 2)), Some(BinaryColor::Off));
/// assert_eq!(display.get_pixel(Point::new(6, 2)), Some(BinaryColor::On));
/// ```
pub fn render_pixels<S>(
    sink: &mut S,
    origin: Point,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<(), S::Error>
where
    S: SetPixel + ?Sized,
{
    if !covers_exactly(width, height, data.len()) {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "render_pixels: {}x{} rectangle does not match {} bytes",
            width,
            height,
            data.len()
        );
    }

    unpack(sink, origin, width, None, data)
}

/// Draw a packed bitmap, stopping once the cursor reaches row `height`.
///
/// Identical to [`render_pixels`] for inputs whose length matches the
/// dimensions. Surplus bytes are ignored; a short buffer leaves the rest of
/// the rectangle untouched.
///
/// # Errors
///
/// The first error returned by the sink stops the loop and is returned
/// unchanged.
pub fn render_pixels_bounded<S>(
    sink: &mut S,
    origin: Point,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<(), S::Error>
where
    S: SetPixel + ?Sized,
{
    unpack(sink, origin, width, Some(height), data)
}

/// Draw a packed bitmap using the row bound selected in `config`.
///
/// Logs a warning (feature `defmt`) if the rectangle does not fit on the
/// configured display; the pixels are still forwarded to the sink.
pub fn render_with_config<S>(
    sink: &mut S,
    origin: Point,
    width: u32,
    height: u32,
    data: &[u8],
    config: &RenderConfig,
) -> Result<(), S::Error>
where
    S: SetPixel + ?Sized,
{
    if !config.fits(origin, width, height) {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "render_with_config: {}x{} at ({}, {}) exceeds {}x{} display",
            width,
            height,
            origin.x,
            origin.y,
            config.display_width,
            config.display_height
        );
    }

    if config.is_bounded() {
        render_pixels_bounded(sink, origin, width, height, data)
    } else {
        render_pixels(sink, origin, width, height, data)
    }
}

/// The shared unpacking loop. `rows` of `None` means no row bound.
fn unpack<S>(
    sink: &mut S,
    origin: Point,
    width: u32,
    rows: Option<u32>,
    data: &[u8],
) -> Result<(), S::Error>
where
    S: SetPixel + ?Sized,
{
    if width == 0 {
        return Ok(());
    }

    let (mut x, mut y) = (0u32, 0u32);
    for &byte in data {
        for bit in 0..8 {
            if rows.is_some_and(|rows| y >= rows) {
                return Ok(());
            }

            // A coordinate past i32 is off every display; skip it but keep
            // the cursor moving.
            if let (Some(px), Some(py)) = (offset(origin.x, x), offset(origin.y, y)) {
                let on = byte & (1 << bit) != 0;
                sink.set_pixel(px, py, on)?;
            }

            x += 1;
            if x == width {
                x = 0;
                y += 1;
            }
        }
    }

    Ok(())
}

/// `base + delta`, or `None` if the sum does not fit in an `i32`.
fn offset(base: i32, delta: u32) -> Option<i32> {
    i32::try_from(delta).ok().and_then(|d| base.checked_add(d))
}

// ── Tests ────────────────────────────────────────────────────────────────
