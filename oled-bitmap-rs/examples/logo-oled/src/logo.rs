//! Generated by the image converter from `keyboard.bmp` (32×16). Do not edit.

use oled_bitmap_rs::{mono_image, MonoImage};

pub const LOGO_WIDTH: u32 = 32;
pub const LOGO_HEIGHT: u32 = 16;

pub const LOGO: MonoImage<'static> = mono_image!(LOGO_WIDTH, LOGO_HEIGHT, [
    0xff, 0xff, 0xff, 0xff, 0x01, 0x00, 0x00, 0x80,
    0xbd, 0xf7, 0xde, 0x83, 0xa5, 0x94, 0x52, 0x82,
    0xbd, 0xf7, 0xde, 0x83, 0x01, 0x00, 0x00, 0x80,
    0x79, 0xef, 0xbd, 0x87, 0x49, 0x29, 0xa5, 0x84,
    0x79, 0xef, 0xbd, 0x87, 0x01, 0x00, 0x00, 0x80,
    0xbd, 0xf7, 0xde, 0x83, 0xa5, 0x94, 0x52, 0x82,
    0xbd, 0xf7, 0xde, 0x83, 0x01, 0x00, 0x00, 0x80,
    0x01, 0x00, 0x00, 0x80, 0xff, 0xff, 0xff, 0xff,
]);
