//! Watchface rendering for Orrery
//!
//! Draws the orbital scene computed by `orrery-core` onto any
//! `embedded-graphics` draw target:
//!
//! - `Palette` picks a background tone and a fill-or-outline paint per
//!   body, matched to the display's color capability
//! - `Watchface` paints one frame: background fill, then the four body
//!   circles back to front
//!
//! Rendering is stateless; drawing the same timestamp into the same
//! region twice is pixel-identical.

#![no_std]

pub mod palette;
pub mod watchface;

pub use palette::{BodyPaint, Palette};
pub use watchface::Watchface;
