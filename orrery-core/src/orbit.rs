//! Orbital scene computation
//!
//! Turns a wall-clock time into body positions: the sun sits at the
//! drawable center, the earth orbits the sun on the hour, the moon
//! orbits the earth on the minute and the asteroid orbits the moon on
//! the second. Each child center is its parent center plus an offset of
//! fixed magnitude at the body's current angle.

use crate::profile::OrbitGeometry;
use crate::trig::{cos_lookup, sin_lookup, TRIG_MAX_ANGLE, TRIG_MAX_RATIO};

/// Twelfths of the 12-hour dial: (hour % 12) * 6 + minute / 10.
const EARTH_PERIOD_UNITS: i32 = 12 * 6;

/// A point in device pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Wall-clock time of day (24-hour fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// The four bodies, in back-to-front paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BodyKind {
    Sun,
    Earth,
    Moon,
    Asteroid,
}

/// One body, positioned for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Body {
    pub kind: BodyKind,
    pub center: Point,
    pub radius: u32,
}

/// Asteroid angle: one turn per 60 seconds.
pub fn asteroid_angle(second: u8) -> i32 {
    TRIG_MAX_ANGLE * (second % 60) as i32 / 60
}

/// Moon angle: one turn per 60 minutes.
pub fn moon_angle(minute: u8) -> i32 {
    TRIG_MAX_ANGLE * (minute % 60) as i32 / 60
}

/// Earth angle: one turn per 12 hours.
///
/// Driven by a composite hour unit in twelfths of the dial so the earth
/// advances every ten minutes instead of jumping once per hour.
pub fn earth_angle(hour: u8, minute: u8) -> i32 {
    let units = (hour % 12) as i32 * 6 + (minute % 60) as i32 / 10;
    TRIG_MAX_ANGLE * units / EARTH_PERIOD_UNITS
}

/// Planar offset of a body from its parent.
///
/// Angle zero points straight up (12 o'clock) and angles advance
/// clockwise, hence the negated cosine on y (screen y grows downward).
/// Eccentricity (per-mille) scales the vertical component only. 64-bit
/// intermediates keep the triple product exact.
pub fn orbit_offset(angle: i32, distance: i32, eccentricity_milli: i32) -> Point {
    let dx = sin_lookup(angle) as i64 * distance as i64 / TRIG_MAX_RATIO as i64;
    let dy = -(cos_lookup(angle) as i64 * distance as i64 * eccentricity_milli as i64)
        / 1000
        / TRIG_MAX_RATIO as i64;
    Point::new(dx as i32, dy as i32)
}

/// Compute the scene for one frame.
///
/// Pure function: identical time, center and geometry always produce
/// the identical scene. Returned in back-to-front paint order.
pub fn solar_system(time: &TimeOfDay, center: Point, geometry: &OrbitGeometry) -> [Body; 4] {
    let sun = center;

    let earth_off = orbit_offset(
        earth_angle(time.hour, time.minute),
        geometry.earth_dist,
        geometry.eccentricity_milli,
    );
    let earth = Point::new(sun.x + earth_off.x, sun.y + earth_off.y);

    let moon_off = orbit_offset(moon_angle(time.minute), geometry.moon_dist, 1000);
    let moon = Point::new(earth.x + moon_off.x, earth.y + moon_off.y);

    let asteroid_off = orbit_offset(asteroid_angle(time.second), geometry.asteroid_dist, 1000);
    let asteroid = Point::new(moon.x + asteroid_off.x, moon.y + asteroid_off.y);

    [
        Body {
            kind: BodyKind::Sun,
            center: sun,
            radius: geometry.sun_radius,
        },
        Body {
            kind: BodyKind::Earth,
            center: earth,
            radius: geometry.earth_radius,
        },
        Body {
            kind: BodyKind::Moon,
            center: moon,
            radius: geometry.moon_radius,
        },
        Body {
            kind: BodyKind::Asteroid,
            center: asteroid,
            radius: geometry.asteroid_radius,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DisplayShape;

    const CENTER: Point = Point::new(72, 84);

    fn rect() -> OrbitGeometry {
        DisplayShape::Rectangular.geometry()
    }

    #[test]
    fn test_sun_fixed_at_center() {
        for (h, m, s) in [(0, 0, 0), (6, 30, 15), (11, 59, 59), (23, 0, 1)] {
            let scene = solar_system(&TimeOfDay::new(h, m, s), CENTER, &rect());
            assert_eq!(scene[0].kind, BodyKind::Sun);
            assert_eq!(scene[0].center, CENTER);
        }
    }

    #[test]
    fn test_hour_unit_boundaries() {
        // Midnight: composite unit 0, earth straight up.
        assert_eq!(earth_angle(0, 0), 0);
        // 06:00: 36 of 72 twelfths, exactly half a turn.
        assert_eq!(earth_angle(6, 0), TRIG_MAX_ANGLE / 2);
        // The unit only advances every full ten minutes.
        assert_eq!(earth_angle(3, 9), earth_angle(3, 0));
        assert_ne!(earth_angle(3, 10), earth_angle(3, 0));
    }

    #[test]
    fn test_angle_periodicity() {
        assert_eq!(asteroid_angle(5), asteroid_angle(65));
        assert_eq!(moon_angle(5), moon_angle(65));
        assert_eq!(earth_angle(3, 20), earth_angle(15, 20));
    }

    #[test]
    fn test_earth_due_east_at_three() {
        // 18/72 of a turn = exact quarter turn: +x, no y offset for the
        // eccentricity to scale.
        let scene = solar_system(&TimeOfDay::new(3, 0, 0), CENTER, &rect());
        let earth = scene[1];
        assert_eq!(earth.kind, BodyKind::Earth);
        assert_eq!(earth.center, Point::new(CENTER.x + 39, CENTER.y));
    }

    #[test]
    fn test_asteroid_due_south_at_half_minute() {
        // Second 30 is half a turn: straight down from the moon by the
        // asteroid orbital distance.
        let scene = solar_system(&TimeOfDay::new(9, 41, 30), CENTER, &rect());
        let moon = scene[2];
        let asteroid = scene[3];
        assert_eq!(asteroid.center.x, moon.center.x);
        assert_eq!(asteroid.center.y, moon.center.y + 10);
    }

    #[test]
    fn test_moon_keeps_orbital_distance() {
        let g = rect();
        for m in 0..60 {
            let scene = solar_system(&TimeOfDay::new(7, m, 0), CENTER, &g);
            let dx = (scene[2].center.x - scene[1].center.x) as i64;
            let dy = (scene[2].center.y - scene[1].center.y) as i64;
            let r2 = dx * dx + dy * dy;
            // Components truncate toward zero, so the radius can come up
            // short by as much as sqrt(2) but never long.
            let d = g.moon_dist as i64;
            assert!(r2 >= (d - 2) * (d - 2) && r2 <= (d + 1) * (d + 1));
        }
    }

    #[test]
    fn test_scene_is_pure() {
        let t = TimeOfDay::new(10, 8, 4);
        assert_eq!(
            solar_system(&t, CENTER, &rect()),
            solar_system(&t, CENTER, &rect())
        );
    }
}
