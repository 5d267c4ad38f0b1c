//! Frame painting
//!
//! Two passes per frame, in z-order: background fill, then the four
//! bodies back to front. The scene is recomputed from the timestamp on
//! every call; nothing is retained between frames.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};

use orrery_core::{solar_system, Body, BodyKind, DisplayShape, OrbitGeometry, TimeOfDay};

use crate::palette::{BodyPaint, Palette};

/// Solar-system watchface bound to one display profile.
pub struct Watchface<C: PixelColor> {
    geometry: OrbitGeometry,
    palette: Palette<C>,
}

impl<C: PixelColor> Watchface<C> {
    pub fn new(shape: DisplayShape, palette: Palette<C>) -> Self {
        Self::with_geometry(shape.geometry(), palette)
    }

    /// Build with an explicit constants table instead of a stock shape,
    /// for displays that need recalibrated distances or eccentricity.
    pub fn with_geometry(geometry: OrbitGeometry, palette: Palette<C>) -> Self {
        Self { geometry, palette }
    }

    /// Paint one frame for the given wall-clock time.
    pub fn draw<D>(&self, target: &mut D, time: &TimeOfDay) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        self.draw_background(target)?;
        self.draw_bodies(target, time)
    }

    /// Fill the whole drawable region with the background tone.
    pub fn draw_background<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        target
            .bounding_box()
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(target)
    }

    /// Compute the scene centered on the drawable region and paint each
    /// body, back to front.
    pub fn draw_bodies<D>(&self, target: &mut D, time: &TimeOfDay) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let center = target.bounding_box().center();
        let scene = solar_system(
            time,
            orrery_core::Point::new(center.x, center.y),
            &self.geometry,
        );
        for body in &scene {
            self.draw_body(target, body)?;
        }
        Ok(())
    }

    fn draw_body<D>(&self, target: &mut D, body: &Body) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let paint = match body.kind {
            BodyKind::Sun => self.palette.sun,
            BodyKind::Earth => self.palette.earth,
            BodyKind::Moon => self.palette.moon,
            BodyKind::Asteroid => self.palette.asteroid,
        };
        let style = match paint {
            BodyPaint::Filled(color) => PrimitiveStyle::with_fill(color),
            BodyPaint::Outlined(color) => PrimitiveStyle::with_stroke(color, 1),
        };
        // Odd diameter keeps the computed center on an exact pixel.
        Circle::with_center(
            Point::new(body.center.x, body.center.y),
            2 * body.radius + 1,
        )
        .into_styled(style)
        .draw(target)
    }
}
