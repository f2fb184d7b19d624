//! Per-cycle outcome classification.
//!
//! The decision half of the main loop, kept here so the estimator ->
//! resolver -> encoder routing is testable on the host. Every cycle builds
//! a fresh [`Reading`]; nothing carries over, so a short-circuiting path
//! (open circuit, invalid estimate) can never render stale band colors
//! from the previous cycle.

use crate::bands::{BandCode, encode};
use crate::e24::{Nominal, nearest_e24};
use crate::measure::estimate;

/// What one measurement cycle produced, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// A resolved standard value with its band colors.
    Value { nominal: Nominal, bands: BandCode },
    /// Estimate was non-positive; rendered blank, not as 0 R.
    NoValue,
    /// Divider saturated; resolver and encoder were skipped entirely.
    OpenCircuit,
}

impl Reading {
    /// Route an averaged ADC reading through the pipeline.
    ///
    /// The encoder re-normalizes the reconstructed nominal on its own;
    /// the resolver's mantissa/exponent split is not threaded through.
    #[must_use]
    pub fn from_average(avg_counts: f32, reference_ohms: f32, adc_max: f32) -> Self {
        let Ok(ohms) = estimate(avg_counts, reference_ohms, adc_max) else {
            return Self::OpenCircuit;
        };

        match nearest_e24(ohms) {
            Ok(nominal) => Self::Value {
                nominal,
                bands: encode(nominal.ohms()),
            },
            Err(_) => Self::NoValue,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::open_circuit_threshold;

    #[test]
    fn test_end_to_end_470_ohm() {
        // ref=470, max=4095, averaged reading 2048.0
        // -> ~470.23 R -> E24 4.7 x 10^2 -> yellow / violet / brown.
        let reading = Reading::from_average(2048.0, 470.0, 4095.0);
        let Reading::Value { nominal, bands } = reading else {
            panic!("expected a value, got {reading:?}");
        };
        assert_eq!(nominal.mantissa, 4.7);
        assert_eq!(nominal.exponent, 2);
        assert_eq!(bands.digit1, "yellow");
        assert_eq!(bands.digit2, "violet");
        assert_eq!(bands.multiplier, "brown");
    }

    #[test]
    fn test_end_to_end_open_circuit() {
        // At or beyond the threshold the cycle routes straight to the
        // open-circuit variant; no nominal or bands exist at all.
        let threshold = open_circuit_threshold(470.0, 4095.0);
        assert_eq!(Reading::from_average(threshold, 470.0, 4095.0), Reading::OpenCircuit);
        assert_eq!(Reading::from_average(4095.0, 470.0, 4095.0), Reading::OpenCircuit);
    }

    #[test]
    fn test_zero_reading_is_no_value() {
        // avg 0 -> estimate 0 R -> resolver rejects non-positive input.
        assert_eq!(Reading::from_average(0.0, 470.0, 4095.0), Reading::NoValue);
    }

    #[test]
    fn test_bands_match_reconstructed_nominal() {
        // The encoder must see the snapped nominal, not the raw estimate:
        // a reading resolving to 1.0k renders brown/black/red regardless
        // of how far off the raw estimate was inside the decade.
        let avg = 4095.0 * 1000.0 / (1000.0 + 470.0) + 11.0; // a bit over 1k
        let reading = Reading::from_average(avg, 470.0, 4095.0);
        let Reading::Value { nominal, bands } = reading else {
            panic!("expected a value");
        };
        assert_eq!(nominal.mantissa, 1.0);
        assert_eq!(nominal.exponent, 3);
        assert_eq!(bands.digit1, "brown");
        assert_eq!(bands.digit2, "black");
        assert_eq!(bands.multiplier, "red");
    }
}
