//! Body paints per display color capability

use embedded_graphics::pixelcolor::{BinaryColor, PixelColor, Rgb565};

/// How one body is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPaint<C> {
    /// Solid disc.
    Filled(C),
    /// 1-px ring, interior left to the background.
    Outlined(C),
}

/// Background tone plus one paint per body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C: PixelColor> {
    pub background: C,
    pub sun: BodyPaint<C>,
    pub earth: BodyPaint<C>,
    pub moon: BodyPaint<C>,
    pub asteroid: BodyPaint<C>,
}

impl Palette<BinaryColor> {
    /// Monochrome palette: black space, white bodies.
    ///
    /// Earth and asteroid are outlined so they stay visible when they
    /// pass over the filled sun and moon.
    pub const fn monochrome() -> Self {
        Self {
            background: BinaryColor::Off,
            sun: BodyPaint::Filled(BinaryColor::On),
            earth: BodyPaint::Outlined(BinaryColor::On),
            moon: BodyPaint::Filled(BinaryColor::On),
            asteroid: BodyPaint::Outlined(BinaryColor::On),
        }
    }
}

impl Palette<Rgb565> {
    /// Color palette: dark blue space, every body a solid distinct hue.
    pub const fn color() -> Self {
        Self {
            // Oxford blue (#000055)
            background: Rgb565::new(0, 0, 10),
            // Yellow (#FFFF00)
            sun: BodyPaint::Filled(Rgb565::new(31, 63, 0)),
            // Midnight green (#005555)
            earth: BodyPaint::Filled(Rgb565::new(0, 21, 10)),
            // Blue moon (#0055FF)
            moon: BodyPaint::Filled(Rgb565::new(0, 21, 31)),
            // Pastel yellow (#FFFFAA)
            asteroid: BodyPaint::Filled(Rgb565::new(31, 63, 21)),
        }
    }
}
