//! Logo example
//!
//! Standalone hardware demonstration that renders an embedded keyboard logo
//! on a 128×32 SSD1306 with [`oled_bitmap_rs`]. The logo scrolls across
//! the panel so that partially off-screen origins are exercised; clipping
//! is left to the `ssd1306` frame buffer.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |

#![no_std]
#![no_main]

mod logo;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use embedded_graphics::prelude::Point;
use ssd1306::{prelude::*, I2CDisplayInterface, Ssd1306Async};

use oled_bitmap_rs::{render_with_config, RenderConfig};

use crate::logo::{LOGO, LOGO_HEIGHT, LOGO_WIDTH};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Logo example starting");

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    let interface = I2CDisplayInterface::new_custom_address(i2c, 0x3C);
    let mut display = Ssd1306Async::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    display.init().await.expect("OLED init failed");
    info!("OLED initialised");

    let config = RenderConfig::default();
    let y = ((config.display_height - LOGO_HEIGHT) / 2) as i32;
    let mut x = -(LOGO_WIDTH as i32);

    loop {
        display.clear_buffer();

        if let Err(_e) = render_with_config(
            &mut display,
            Point::new(x, y),
            LOGO.width(),
            LOGO.height(),
            LOGO.data(),
            &config,
        ) {
            error!("Render failed");
        }

        if let Err(_e) = display.flush().await {
            error!("Flush failed");
        }

        // Scroll one pixel per frame, re-entering from the left edge.
        x += 1;
        if x > config.display_width as i32 {
            x = -(LOGO_WIDTH as i32);
        }

        Timer::after(Duration::from_millis(33)).await; // ~30 Hz
    }
}
