//! The display-driver seam consumed by the renderer.
//!
//! [`SetPixel`] is the only capability the renderer needs from a display:
//! "set pixel at (x, y) to on/off". Any `embedded-graphics` binary draw
//! target (for example an `ssd1306` display in buffered graphics mode)
//! implements it through the blanket impl below.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, Pixel};

/// A display that can set a single monochrome pixel.
///
/// Coordinates are screen coordinates with the origin at the top-left.
/// Bounds checking and clipping belong to the implementor; the renderer
/// forwards every coordinate it computes, including negative ones.
pub trait SetPixel {
    /// Error reported by the underlying display.
    type Error;

    /// Set the pixel at `(x, y)` to `on`.
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) -> Result<(), Self::Error>;
}

impl<D> SetPixel for D
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    /// One `draw_iter` call carrying exactly one [`Pixel`].
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) -> Result<(), Self::Error> {
        self.draw_iter(core::iter::once(Pixel(
            Point::new(x, y),
            BinaryColor::from(on),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn draw_target_sets_on_and_off_pixels() {
        let mut display = MockDisplay::<BinaryColor>::new();
        <MockDisplay<BinaryColor> as SetPixel>::set_pixel(&mut display, 2, 1, true).unwrap();
        <MockDisplay<BinaryColor> as SetPixel>::set_pixel(&mut display, 3, 1, false).unwrap();

        assert_eq!(display.get_pixel(Point::new(2, 1)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(3, 1)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn draw_target_clipping_is_left_to_the_target() {
        let mut display = MockDisplay::<BinaryColor>::new();
        display.set_allow_out_of_bounds_drawing(true);

        assert!(<MockDisplay<BinaryColor> as SetPixel>::set_pixel(&mut display, -1, 0, true).is_ok());
        assert!(<MockDisplay<BinaryColor> as SetPixel>::set_pixel(&mut display, 0, -5, true).is_ok());
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }
}
