//! Host-side property tests for the orbital geometry.
//!
//! Quantified over all valid times: the positional invariants the
//! watchface relies on, plus the fixed-point trig tolerance against
//! exact floating-point trigonometry.

use orrery_core::orbit::{asteroid_angle, earth_angle, moon_angle, orbit_offset};
use orrery_core::{
    cos_lookup, sin_lookup, solar_system, DisplayShape, Point, TimeOfDay, TRIG_MAX_ANGLE,
    TRIG_MAX_RATIO,
};
use proptest::prelude::*;

const CENTER: Point = Point::new(100, 100);

const SHAPES: [DisplayShape; 2] = [DisplayShape::Rectangular, DisplayShape::Round];

fn to_radians(angle: i32) -> f64 {
    angle as f64 / TRIG_MAX_ANGLE as f64 * std::f64::consts::TAU
}

proptest! {
    #[test]
    fn sin_lookup_tracks_exact_sine(angle in -2 * TRIG_MAX_ANGLE..2 * TRIG_MAX_ANGLE) {
        let exact = to_radians(angle).sin() * TRIG_MAX_RATIO as f64;
        prop_assert!((sin_lookup(angle) as f64 - exact).abs() <= 8.0);
    }

    #[test]
    fn cos_lookup_tracks_exact_cosine(angle in -2 * TRIG_MAX_ANGLE..2 * TRIG_MAX_ANGLE) {
        let exact = to_radians(angle).cos() * TRIG_MAX_RATIO as f64;
        prop_assert!((cos_lookup(angle) as f64 - exact).abs() <= 8.0);
    }

    #[test]
    fn sun_never_leaves_center(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
        for shape in SHAPES {
            let scene = solar_system(&TimeOfDay::new(h, m, s), CENTER, &shape.geometry());
            prop_assert_eq!(scene[0].center, CENTER);
        }
    }

    #[test]
    fn children_keep_orbital_distance(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
        for shape in SHAPES {
            let geometry = shape.geometry();
            let scene = solar_system(&TimeOfDay::new(h, m, s), CENTER, &geometry);

            // Earth: undo the vertical eccentricity scale before
            // measuring the distance from the sun.
            let dx = (scene[1].center.x - scene[0].center.x) as f64;
            let dy = (scene[1].center.y - scene[0].center.y) as f64 * 1000.0
                / geometry.eccentricity_milli as f64;
            prop_assert!((dx.hypot(dy) - geometry.earth_dist as f64).abs() <= 2.0);

            // Moon and asteroid orbit on circles.
            for (child, parent, dist) in [
                (2, 1, geometry.moon_dist),
                (3, 2, geometry.asteroid_dist),
            ] {
                let dx = (scene[child].center.x - scene[parent].center.x) as f64;
                let dy = (scene[child].center.y - scene[parent].center.y) as f64;
                prop_assert!((dx.hypot(dy) - dist as f64).abs() <= 2.0);
            }
        }
    }

    #[test]
    fn angles_wrap_their_period(h in 0u8..12, m in 0u8..60, s in 0u8..60) {
        prop_assert_eq!(asteroid_angle(s), asteroid_angle(s + 60));
        prop_assert_eq!(moon_angle(m), moon_angle(m + 60));
        prop_assert_eq!(earth_angle(h, m), earth_angle(h + 12, m));
    }

    #[test]
    fn offsets_never_exceed_distance(angle in 0..TRIG_MAX_ANGLE, dist in 1i32..64) {
        let p = orbit_offset(angle, dist, 1000);
        prop_assert!(p.x.abs() <= dist);
        prop_assert!(p.y.abs() <= dist);
    }

    #[test]
    fn scene_has_no_hidden_state(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
        let t = TimeOfDay::new(h, m, s);
        for shape in SHAPES {
            let geometry = shape.geometry();
            prop_assert_eq!(
                solar_system(&t, CENTER, &geometry),
                solar_system(&t, CENTER, &geometry)
            );
        }
    }
}
