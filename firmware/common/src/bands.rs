//! Four-band color code derivation.
//!
//! A nominal value is re-normalized here independently of the resolver --
//! the encoder takes a raw ohms value, not a pre-split mantissa/exponent
//! pair, so the two components never share in-flight intermediates.

use crate::e24::normalize;

/// Digit-to-color table, index = decimal digit 0-9.
pub const DIGIT_COLORS: [&str; 10] = [
    "black", "brown", "red", "orange", "yellow", "green", "blue", "violet", "gray", "white",
];

/// Tolerance band for the E24 (5 %) series.
pub const TOLERANCE_COLOR: &str = "gold";

/// Nudge added before truncating the second digit. The divide-down loop can
/// leave a mantissa one ULP low (4.7 stored as 4.6999998), which would
/// otherwise truncate 47 down to 46 and shift the digit.
const DIGIT_EPSILON: f32 = 1e-3;

/// The ordered color triple for a nominal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCode {
    pub digit1: &'static str,
    pub digit2: &'static str,
    pub multiplier: &'static str,
}

/// Map a decade exponent to its multiplier band color.
///
/// Sub-unity multipliers use the tolerance-style metals: `-1` is gold
/// (x0.1) and `-2` is silver (x0.01). Decades outside the table fall back
/// to black rather than aborting the render.
#[must_use]
pub fn multiplier_color(exponent: i32) -> &'static str {
    match exponent {
        -2 => "silver",
        -1 => "gold",
        0..=9 => DIGIT_COLORS[exponent as usize],
        _ => "black",
    }
}

/// Derive the band colors for a nominal resistance.
///
/// The multiplier is looked up at `exponent - 1`: the deployed instrument
/// indexes the multiplier one band-position down from the normalization
/// decade, and the physical color rendered depends on it, so the
/// convention is kept exactly (470 R -> exponent 2 -> brown multiplier).
///
/// Both digits go through a defensive `% 10` so a boundary mantissa like
/// 9.999999 wraps to black instead of indexing out of the table.
#[must_use]
pub fn encode(nominal: f32) -> BandCode {
    let (mantissa, exponent) = normalize(nominal);

    let digit1 = (mantissa as u32) % 10;
    let digit2 = ((mantissa * 10.0 + DIGIT_EPSILON) as u32) % 10;

    BandCode {
        digit1: DIGIT_COLORS[digit1 as usize],
        digit2: DIGIT_COLORS[digit2 as usize],
        multiplier: multiplier_color(exponent - 1),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
