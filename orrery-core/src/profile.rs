//! Display profile constant tables
//!
//! The watchface targets a fixed display known at startup. The profile
//! is a plain configuration struct resolved once in `main` and passed
//! down; the renderer never queries hardware capabilities at runtime.

/// Physical outline of the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayShape {
    /// Non-square drawable area (e.g. 128x64 OLED).
    Rectangular,
    /// Square drawable area behind a round lens.
    Round,
}

/// Color capability of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorDepth {
    Monochrome,
    Color,
}

/// Display capabilities, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayProfile {
    pub shape: DisplayShape,
    pub depth: ColorDepth,
}

/// Orbital distances and body radii for one display shape, in pixels.
///
/// Eccentricity is stored per-mille and applies to the vertical offset
/// component only. It is a calibration constant that flattens the earth
/// orbit on non-square drawables, not a derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OrbitGeometry {
    pub earth_dist: i32,
    pub moon_dist: i32,
    pub asteroid_dist: i32,
    pub sun_radius: u32,
    pub earth_radius: u32,
    pub moon_radius: u32,
    pub asteroid_radius: u32,
    pub eccentricity_milli: i32,
}

impl DisplayShape {
    /// Constants table for this shape.
    pub const fn geometry(self) -> OrbitGeometry {
        match self {
            DisplayShape::Rectangular => OrbitGeometry {
                earth_dist: 39,
                moon_dist: 21,
                asteroid_dist: 10,
                sun_radius: 10,
                earth_radius: 6,
                moon_radius: 4,
                asteroid_radius: 1,
                eccentricity_milli: 1250,
            },
            DisplayShape::Round => OrbitGeometry {
                earth_dist: 46,
                moon_dist: 24,
                asteroid_dist: 11,
                sun_radius: 11,
                earth_radius: 7,
                moon_radius: 4,
                asteroid_radius: 1,
                eccentricity_milli: 1000,
            },
        }
    }
}
