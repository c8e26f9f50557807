//! Packed monochrome bitmap rendering for keyboard OLED displays.
//!
//! Keyboard firmware embeds logos and icons as byte constants produced by
//! an image converter: row-major, 8 horizontal pixels per byte, least
//! significant bit leftmost. This crate unpacks those constants into
//! per-pixel calls on any display that implements [`SetPixel`], which
//! includes every `embedded-graphics` [`DrawTarget`] with
//! [`BinaryColor`] pixels (such as an `ssd1306` display in buffered
//! graphics mode).
//!
//! # Quick Start
//!
//! ```ignore
//! use embedded_graphics::prelude::Point;
//! use oled_bitmap_rs::{mono_image, render_pixels, MonoImage};
//!
//! // Emitted by the image converter.
//! const LOGO: MonoImage<'static> = mono_image!(16, 2, [0xFF, 0x81, 0xFF, 0x81]);
//!
//! // `display` is any DrawTarget<Color = BinaryColor>.
//! LOGO.render(&mut display, Point::new(56, 12))?;
//!
//! // Or straight from raw bytes, without validation:
//! render_pixels(&mut display, Point::zero(), 16, 2, LOGO.data())?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`] and `defmt::Format`
//!   on the public types.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
//! [`BinaryColor`]: embedded_graphics::pixelcolor::BinaryColor

#![no_std]

pub mod config;
pub mod error;
pub mod image;
pub mod pack;
pub mod render;
pub mod sink;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::{HeightBound, RenderConfig};
pub use error::BitmapError;
pub use image::MonoImage;
pub use pack::{pack_rows, packed_len};
pub use render::{covers_exactly, render_pixels, render_pixels_bounded, render_with_config};
pub use sink::SetPixel;
