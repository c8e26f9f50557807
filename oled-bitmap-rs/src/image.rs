//! Validated views of compile-time bitmap constants.
//!
//! A [`MonoImage`] pairs a packed byte buffer with dimensions that are
//! checked once, at construction. Rendering a validated image can never
//! run past its bottom-right corner.

use embedded_graphics::{
    image::ImageDrawable,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
};

use crate::error::BitmapError;
use crate::render::render_pixels;
use crate::sink::SetPixel;

/// A packed monochrome bitmap with known dimensions.
///
/// Bytes are row-major, 8 horizontal pixels each, least significant bit
/// leftmost. The buffer holds exactly `width * height / 8` bytes.
///
/// Implements [`ImageDrawable`], so it can be placed with
/// [`embedded_graphics::image::Image`]:
///
/// ```
/// # use embedded_graphics::{image::Image, mock_display::MockDisplay, pixelcolor::BinaryColor, prelude::*};
/// use oled_bitmap_rs::{mono_image, MonoImage};
///
/// const ARROW: MonoImage<'static> = mono_image!(8, 2, [0x0F, 0xF0]);
///
/// let mut display = MockDisplay::<BinaryColor>::new();
/// Image::new(&ARROW, Point::new(3, 3)).draw(&mut display).unwrap();
/// assert_eq!(display.get_pixel(Point::new(3, 3)), Some(BinaryColor::On));
/// assert_eq!(display.get_pixel(Point::new(3, 4)), Some(BinaryColor::Off));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonoImage<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> MonoImage<'a> {
    /// Wrap `data` as a `width`×`height` image.
    ///
    /// Usable in `const` items; see [`mono_image!`](crate::mono_image).
    ///
    /// # Errors
    ///
    /// * [`BitmapError::ZeroDimension`] if either dimension is zero.
    /// * [`BitmapError::PartialByte`] if `width * height` is not a multiple of 8.
    /// * [`BitmapError::LengthMismatch`] if `data` is not `width * height / 8` bytes.
    pub const fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::ZeroDimension);
        }

        let pixels = width as u64 * height as u64;
        if pixels % 8 != 0 {
            return Err(BitmapError::PartialByte);
        }

        let expected = pixels / 8;
        if data.len() as u64 != expected {
            return Err(BitmapError::LengthMismatch {
                expected: expected as usize,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Packed pixel bytes.
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// State of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.data
            .get(index / 8)
            .map(|byte| byte & (1 << (index % 8)) != 0)
    }

    /// Draw the image with its top-left corner at `origin`, one sink call
    /// per pixel.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the sink.
    pub fn render<S>(&self, sink: &mut S, origin: Point) -> Result<(), S::Error>
    where
        S: SetPixel + ?Sized,
    {
        render_pixels(sink, origin, self.width, self.height, self.data)
    }

    fn colors(&self) -> impl Iterator<Item = BinaryColor> + 'a {
        self.data
            .iter()
            .flat_map(|&byte| (0..8).map(move |bit| BinaryColor::from(byte & (1 << bit) != 0)))
    }
}

impl OriginDimensions for MonoImage<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl ImageDrawable for MonoImage<'_> {
    type Color = BinaryColor;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.fill_contiguous(&self.bounding_box(), self.colors())
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let visible = area.intersection(&self.bounding_box());
        if visible.is_zero_sized() {
            return Ok(());
        }

        let dest = Rectangle::new(visible.top_left - area.top_left, visible.size);
        let colors = visible.points().map(|p| {
            BinaryColor::from(self.pixel(p.x as u32, p.y as u32).unwrap_or(false))
        });
        target.fill_contiguous(&dest, colors)
    }
}

/// Build a [`MonoImage<'static>`](MonoImage) from literal bytes.
///
/// Evaluated in a `const` item, a dimension mismatch fails the build.
///
/// ```
/// use oled_bitmap_rs::{mono_image, MonoImage};
///
/// const DOT: MonoImage<'static> = mono_image!(8, 1, [0x18]);
/// assert_eq!(DOT.pixel(3, 0), Some(true));
/// ```
///
/// ```compile_fail
/// use oled_bitmap_rs::{mono_image, MonoImage};
///
/// const BAD: MonoImage<'static> = mono_image!(8, 2, [0x18]);
/// ```
#[macro_export]
macro_rules! mono_image {
    ($width:expr, $height:expr, [$($byte:expr),* $(,)?]) => {
        match $crate::MonoImage::new(&[$($byte),*], $width, $height) {
            ::core::result::Result::Ok(image) => image,
            ::core::result::Result::Err(_) => {
                ::core::panic!("bitmap dimensions do not match buffer length")
            }
        }
    };
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{image::Image, mock_display::MockDisplay};

    // 16×2: row 0 = 0xA5 0x0F, row 1 = 0x00 0xFF.
    const SAMPLE: MonoImage<'static> = mono_image!(16, 2, [0xA5, 0x0F, 0x00, 0xFF]);

    #[test]
    fn new_accepts_matching_length() {
        let img = MonoImage::new(&[0u8; 4], 16, 2).unwrap();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 2);
        assert_eq!(img.data().len(), 4);
        assert_eq!(img.size(), Size::new(16, 2));
    }

    #[test]
    fn new_accepts_non_byte_aligned_width() {
        // 4×2 = 8 pixels = 1 byte.
        assert!(MonoImage::new(&[0u8], 4, 2).is_ok());
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(MonoImage::new(&[], 0, 8), Err(BitmapError::ZeroDimension));
        assert_eq!(MonoImage::new(&[], 8, 0), Err(BitmapError::ZeroDimension));
    }

    #[test]
    fn new_rejects_partial_byte() {
        assert_eq!(MonoImage::new(&[0u8], 3, 3), Err(BitmapError::PartialByte));
    }

    #[test]
    fn new_rejects_length_mismatch() {
        assert_eq!(
            MonoImage::new(&[0u8; 3], 16, 2),
            Err(BitmapError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            MonoImage::new(&[0u8; 5], 16, 2),
            Err(BitmapError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn pixel_reads_lsb_first() {
        // 0xA5 = 1010_0101 → x = 0, 2, 5, 7 on.
        let row0: [bool; 8] = core::array::from_fn(|x| SAMPLE.pixel(x as u32, 0).unwrap());
        assert_eq!(row0, [true, false, true, false, false, true, false, true]);
        assert_eq!(SAMPLE.pixel(8, 0), Some(true));
        assert_eq!(SAMPLE.pixel(12, 0), Some(false));
        assert_eq!(SAMPLE.pixel(0, 1), Some(false));
        assert_eq!(SAMPLE.pixel(15, 1), Some(true));
    }

    #[test]
    fn pixel_outside_image_is_none() {
        assert_eq!(SAMPLE.pixel(16, 0), None);
        assert_eq!(SAMPLE.pixel(0, 2), None);
    }

    #[test]
    fn render_matches_pixel_lookup() {
        let mut display = MockDisplay::<BinaryColor>::new();
        SAMPLE.render(&mut display, Point::new(2, 5)).unwrap();

        for y in 0..2 {
            for x in 0..16 {
                let expected = BinaryColor::from(SAMPLE.pixel(x, y).unwrap());
                let p = Point::new(2 + x as i32, 5 + y as i32);
                assert_eq!(display.get_pixel(p), Some(expected));
            }
        }
        assert_eq!(display.get_pixel(Point::new(2, 7)), None);
    }

    #[test]
    fn image_drawable_matches_render() {
        let mut via_render = MockDisplay::<BinaryColor>::new();
        SAMPLE.render(&mut via_render, Point::new(1, 1)).unwrap();

        let mut via_image = MockDisplay::<BinaryColor>::new();
        Image::new(&SAMPLE, Point::new(1, 1))
            .draw(&mut via_image)
            .unwrap();

        via_image.assert_eq(&via_render);
    }

    #[test]
    fn sub_image_draws_requested_area() {
        use embedded_graphics::image::ImageDrawableExt;

        let sub = SAMPLE.sub_image(&Rectangle::new(Point::new(8, 0), Size::new(8, 2)));
        let mut display = MockDisplay::<BinaryColor>::new();
        Image::new(&sub, Point::zero()).draw(&mut display).unwrap();

        // Right half: row 0 = 0x0F, row 1 = 0xFF.
        for x in 0..8 {
            let top = if x < 4 { BinaryColor::On } else { BinaryColor::Off };
            assert_eq!(display.get_pixel(Point::new(x, 0)), Some(top));
            assert_eq!(display.get_pixel(Point::new(x, 1)), Some(BinaryColor::On));
        }
        assert_eq!(display.get_pixel(Point::new(8, 0)), None);
    }

    #[test]
    fn sub_image_is_clipped_to_image() {
        use embedded_graphics::image::ImageDrawableExt;

        let sub = SAMPLE.sub_image(&Rectangle::new(Point::new(12, 1), Size::new(8, 4)));
        let mut display = MockDisplay::<BinaryColor>::new();
        Image::new(&sub, Point::zero()).draw(&mut display).unwrap();

        for x in 0..4 {
            assert_eq!(display.get_pixel(Point::new(x, 0)), Some(BinaryColor::On));
        }
        assert_eq!(display.get_pixel(Point::new(4, 0)), None);
        assert_eq!(display.get_pixel(Point::new(0, 1)), None);
    }
}
