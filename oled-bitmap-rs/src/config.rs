//! Render policy and display geometry.

use embedded_graphics::prelude::Point;

/// What the renderer does when the buffer holds more rows than `height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeightBound {
    /// Keep unpacking past `height` (overdraws below the rectangle).
    #[default]
    Unbounded,
    /// Stop as soon as the cursor reaches row `height`.
    Clip,
}

/// Configuration for bitmap rendering.
///
/// All geometry lives here; there are no module-level display constants.
/// [`RenderConfig::default()`] describes the 128×32 SSD1306 panel found on
/// most split keyboards, with the unbounded unpacking loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Display width in pixels. Default: 128.
    pub display_width: u32,
    /// Display height in pixels. Default: 32.
    pub display_height: u32,
    /// Row bound applied by [`render_with_config`](crate::render::render_with_config).
    /// Default: [`HeightBound::Unbounded`].
    pub height_bound: HeightBound,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            display_width: 128,
            display_height: 32,
            height_bound: HeightBound::Unbounded,
        }
    }
}

impl RenderConfig {
    /// Returns `true` if rendering stops at the rectangle's last row.
    pub fn is_bounded(&self) -> bool {
        self.height_bound == HeightBound::Clip
    }

    /// Returns `true` if the `width`×`height` rectangle at `origin` lies
    /// entirely on the display.
    pub fn fits(&self, origin: Point, width: u32, height: u32) -> bool {
        if origin.x < 0 || origin.y < 0 {
            return false;
        }
        origin.x as u64 + width as u64 <= self.display_width as u64
            && origin.y as u64 + height as u64 <= self.display_height as u64
    }
}
