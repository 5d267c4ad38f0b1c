//! Board-agnostic core logic for the Orrery watchface
//!
//! This crate contains everything that does not depend on a concrete
//! display or MCU:
//!
//! - Fixed-point sine/cosine lookup
//! - Display profile constant tables (orbital distances, body radii)
//! - Time-of-day to orbital angle derivation
//! - Per-frame scene computation (body positions)
//!
//! Every frame is a pure function of the wall-clock time and the display
//! profile; nothing here carries state between frames.

#![no_std]
#![deny(unsafe_code)]

pub mod orbit;
pub mod profile;
pub mod trig;

pub use orbit::{solar_system, Body, BodyKind, Point, TimeOfDay};
pub use profile::{ColorDepth, DisplayProfile, DisplayShape, OrbitGeometry};
pub use trig::{cos_lookup, sin_lookup, TRIG_MAX_ANGLE, TRIG_MAX_RATIO};
