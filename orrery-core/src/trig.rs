//! Fixed-point trigonometry
//!
//! Integer sine/cosine over a 16-bit angle space: a full turn is
//! `TRIG_MAX_ANGLE` (0x10000) and outputs are scaled so that ±1.0 is
//! ±`TRIG_MAX_RATIO` (0xFFFF). This avoids hardware floating-point
//! requirements on Cortex-M0 and matches the angle conventions the
//! orbital geometry constants were tuned against.
//!
//! Lookup is a 64-interval quarter-wave table with linear interpolation.
//! Worst-case error is under 7 output LSBs, which keeps body positions
//! well inside one pixel at the largest orbital distance.

/// One full turn in angle units.
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Output scale: `sin_lookup` returns ±`TRIG_MAX_RATIO` at ±1.0.
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

/// One quarter turn in angle units.
const QUARTER_TURN: u32 = (TRIG_MAX_ANGLE / 4) as u32;

/// Interpolation intervals per quarter turn.
const QUARTER_STEPS: usize = 64;

/// sin(x) scaled to 0xFFFF for x in [0, quarter turn], one entry per
/// 1/256 turn.
const SIN_QUARTER: [u16; QUARTER_STEPS + 1] = [
    0, 1608, 3216, 4821, 6424, 8022, 9616, 11204,
    12785, 14359, 15924, 17479, 19024, 20557, 22078, 23586,
    25079, 26557, 28020, 29465, 30893, 32302, 33692, 35061,
    36409, 37736, 39039, 40319, 41575, 42806, 44011, 45189,
    46340, 47464, 48558, 49624, 50659, 51664, 52638, 53580,
    54490, 55367, 56211, 57021, 57797, 58537, 59243, 59913,
    60546, 61144, 61704, 62227, 62713, 63161, 63571, 63943,
    64276, 64570, 64826, 65042, 65219, 65357, 65456, 65515,
    65535,
];

/// Interpolated sine over the first quadrant.
///
/// `pos` is in [0, QUARTER_TURN]; the table endpoint handles the exact
/// quarter-turn input.
fn quarter_sin(pos: u32) -> i32 {
    let idx = (pos >> 8) as usize;
    if idx >= QUARTER_STEPS {
        return TRIG_MAX_RATIO;
    }
    let lo = SIN_QUARTER[idx] as i32;
    let hi = SIN_QUARTER[idx + 1] as i32;
    let frac = (pos & 0xFF) as i32;
    lo + (((hi - lo) * frac) >> 8)
}

/// Fixed-point sine.
///
/// `angle` wraps modulo a full turn; negative angles are valid.
pub fn sin_lookup(angle: i32) -> i32 {
    let a = angle.rem_euclid(TRIG_MAX_ANGLE) as u32;
    let quadrant = a / QUARTER_TURN;
    let mut pos = a % QUARTER_TURN;
    // Quadrants 1 and 3 run the quarter wave backwards.
    if quadrant & 1 == 1 {
        pos = QUARTER_TURN - pos;
    }
    let value = quarter_sin(pos);
    if quadrant >= 2 {
        -value
    } else {
        value
    }
}

/// Fixed-point cosine: sine shifted a quarter turn.
pub fn cos_lookup(angle: i32) -> i32 {
    sin_lookup(angle.wrapping_add(TRIG_MAX_ANGLE / 4))
}
