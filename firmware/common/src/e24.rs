//! Nearest-standard-value resolution on the E24 resistor scale.
//!
//! Manufacturers only make resistors in a logarithmically spaced set of 24
//! mantissas per decade; a raw divider estimate like 470.23 R has to be
//! snapped to the value a part could actually have (470 R) before the color
//! code means anything.

/// The 24 standard mantissas of the E24 (5 %) series, ascending.
pub const E24_VALUES: [f32; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// Raised for inputs with no place on the E24 scale (zero, negative, NaN).
///
/// Policy is "no value", not a fault: the caller renders a blank reading
/// and keeps sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMeasurement;

/// A resolved standard value, kept in mantissa/exponent form.
///
/// Invariant: `mantissa` is always one of [`E24_VALUES`] exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nominal {
    pub mantissa: f32,
    pub exponent: i32,
}

impl Nominal {
    /// Reconstruct the nominal resistance in ohms.
    #[must_use]
    pub fn ohms(&self) -> f32 { self.mantissa * pow10(self.exponent) }
}

/// Exact `10^exponent` by repeated multiplication.
///
/// An approximate `powf` would make `Nominal::ohms` drift off the decade
/// and break the resolve/encode fixed points.
#[must_use]
pub fn pow10(exponent: i32) -> f32 {
    let mut value = 1.0_f32;
    if exponent >= 0 {
        for _ in 0..exponent {
            value *= 10.0;
        }
    } else {
        for _ in 0..-exponent {
            value /= 10.0;
        }
    }
    value
}

/// Decompose a positive value into `(mantissa, exponent)` by dividing down
/// until the mantissa drops below 10.
///
/// Values below 1 are left untouched with exponent 0; the divider never
/// produces them for measurable resistors and the nearest-entry scan still
/// handles them gracefully.
#[must_use]
pub fn normalize(value: f32) -> (f32, i32) {
    let mut mantissa = value;
    let mut exponent = 0;
    while mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    (mantissa, exponent)
}

/// Resolve a raw resistance to the closest E24 standard value, preserving
/// the decade.
///
/// Ties are broken toward the first (lowest) table entry: diffs are compared
/// with strict `<`, so an exact midpoint keeps the earlier match. The table
/// has 24 entries; a linear scan is plenty.
///
/// # Errors
///
/// [`InvalidMeasurement`] for non-positive input. Zero means "no measurable
/// resistance", never a valid 0 R nominal.
pub fn nearest_e24(ohms: f32) -> Result<Nominal, InvalidMeasurement> {
    // Negated comparison so NaN lands in the invalid arm as well
    if !(ohms > 0.0) {
        return Err(InvalidMeasurement);
    }

    let (mantissa, exponent) = normalize(ohms);

    let mut closest = E24_VALUES[0];
    let mut min_diff = abs_diff(mantissa, closest);
    for &entry in &E24_VALUES {
        let diff = abs_diff(mantissa, entry);
        if diff < min_diff {
            min_diff = diff;
            closest = entry;
        }
    }

    Ok(Nominal {
        mantissa: closest,
        exponent,
    })
}

#[inline]
fn abs_diff(a: f32, b: f32) -> f32 {
    if a >= b { a - b } else { b - a }
}

// =============================================================================
// Unit Tests
// =============================================================================
