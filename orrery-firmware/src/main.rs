//! Orrery watchface firmware
//!
//! Firmware binary for RP2040 boards driving a 128x64 SH1106 OLED: a
//! stylized solar system positioned from the on-chip RTC and repainted
//! once per second. The earth circles the sun every 12 hours, the moon
//! circles the earth every hour and the asteroid circles the moon every
//! minute.

#![no_std]
#![no_main]

mod sh1106;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use embedded_graphics::pixelcolor::BinaryColor;
use {defmt_rtt as _, panic_probe as _};

use orrery_core::{ColorDepth, DisplayProfile, DisplayShape, TimeOfDay};
use orrery_render::{Palette, Watchface};

use crate::sh1106::Sh1106;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Repaint request from the tick task.
///
/// A `Signal` coalesces requests: however many ticks land while a frame
/// is in flight, at most one further repaint follows.
static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Wall-clock value loaded into the RTC at power-on.
const BOOT_TIME: DateTime = DateTime {
    year: 2026,
    month: 1,
    day: 1,
    day_of_week: DayOfWeek::Thursday,
    hour: 0,
    minute: 0,
    second: 0,
};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Orrery watchface starting...");

    let p = embassy_rp::init(Default::default());

    // This board: rectangular mono OLED. The profile is resolved once
    // here and passed down; nothing below queries the hardware.
    let profile = DisplayProfile {
        shape: DisplayShape::Rectangular,
        depth: ColorDepth::Monochrome,
    };
    info!("Display profile: {:?}", profile);

    // Setup I2C for OLED (GP14=SDA, GP15=SCL)
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c::Config::default());

    let mut display = Sh1106::new(i2c);
    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
        display.clear_buffer();
        display.flush().await.ok();
    }

    let mut rtc = Rtc::new(p.RTC);
    rtc.set_datetime(BOOT_TIME).unwrap();
    info!("RTC started");

    spawner.spawn(tick_task()).unwrap();

    let watchface: Watchface<BinaryColor> =
        Watchface::new(profile.shape, Palette::monochrome());

    // Paint the boot frame without waiting out the first tick.
    REDRAW.signal(());

    // Render loop. It exclusively owns the framebuffer and the RTC for
    // the life of the program, so no repaint can outlive its surface.
    loop {
        REDRAW.wait().await;

        let now = match rtc.now() {
            Ok(dt) => dt,
            Err(_) => {
                warn!("RTC read failed, skipping frame");
                continue;
            }
        };
        let time = TimeOfDay::new(now.hour, now.minute, now.second);

        // Framebuffer drawing is infallible; only the bus flush can fail.
        watchface.draw(&mut display, &time).ok();
        if display.flush().await.is_err() {
            warn!("Display flush failed");
        }
    }
}

/// One repaint request per second boundary.
#[embassy_executor::task]
async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_secs(1));
    loop {
        ticker.next().await;
        REDRAW.signal(());
    }
}
