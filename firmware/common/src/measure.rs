//! Resistance estimation from the voltage-divider ADC reading.
//!
//! The unknown resistor and the known reference form a divider; the ADC
//! reads the midpoint. As the unknown grows the reading approaches full
//! scale and the divider equation loses all resolution, so anything that
//! looks bigger than [`crate::config::OPEN_CIRCUIT_RATIO`] times the
//! reference is reported as an open circuit instead of a number.

use crate::config::OPEN_CIRCUIT_RATIO;

/// The averaged reading sits at or beyond the open-circuit threshold.
///
/// Recovered locally by the loop controller with a dedicated display
/// variant; never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenCircuit;

/// The averaged ADC reading a divider of `OPEN_CIRCUIT_RATIO` times the
/// reference resistor would produce.
#[must_use]
pub fn open_circuit_threshold(reference_ohms: f32, adc_max: f32) -> f32 {
    reference_ohms * OPEN_CIRCUIT_RATIO / (reference_ohms + reference_ohms * OPEN_CIRCUIT_RATIO)
        * adc_max
}

/// Estimate the unknown resistance from an averaged ADC reading.
///
/// `R_x = reference * avg / (adc_max - avg)`. The threshold check runs
/// first, which also guards the `adc_max - avg == 0` division at full
/// scale.
///
/// # Errors
///
/// [`OpenCircuit`] when `avg_reading` meets or exceeds
/// [`open_circuit_threshold`].
pub fn estimate(avg_reading: f32, reference_ohms: f32, adc_max: f32) -> Result<f32, OpenCircuit> {
    if avg_reading >= open_circuit_threshold(reference_ohms, adc_max) {
        return Err(OpenCircuit);
    }
    Ok(reference_ohms * avg_reading / (adc_max - avg_reading))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ADC_MAX_COUNTS, REFERENCE_OHMS};

    #[test]
    fn test_threshold_formula_reproduced() {
        // The documented threshold expression, reproduced bit-for-bit.
        let expected = 470.0f32 * 20.0 / (470.0 + 470.0 * 20.0) * 4095.0;
        assert_eq!(open_circuit_threshold(470.0, 4095.0), expected);
        // 20/21 of full scale, independent of the reference value
        assert!((expected - 4095.0 * 20.0 / 21.0).abs() < 1e-2);
    }

    #[test]
    fn test_worked_example_midpoint_reading() {
        // 470 * 2048 / (4095 - 2048) = 470.2296...
        let ohms = estimate(2048.0, 470.0, 4095.0).unwrap();
        assert!((ohms - 470.2296).abs() < 1e-2, "got {ohms}");
    }

    #[test]
    fn test_open_circuit_iff_threshold() {
        let threshold = open_circuit_threshold(470.0, 4095.0);
        assert_eq!(estimate(threshold, 470.0, 4095.0), Err(OpenCircuit));
        assert_eq!(estimate(threshold + 1.0, 470.0, 4095.0), Err(OpenCircuit));
        assert!(estimate(threshold - 1.0, 470.0, 4095.0).is_ok());
    }

    #[test]
    fn test_full_scale_never_divides_by_zero() {
        // avg == adc_max would zero the denominator; the threshold check
        // must short-circuit first.
        assert_eq!(estimate(4095.0, 470.0, 4095.0), Err(OpenCircuit));
    }

    #[test]
    fn test_zero_reading_is_zero_ohms() {
        assert_eq!(estimate(0.0, 470.0, 4095.0), Ok(0.0));
    }

    #[test]
    fn test_matching_resistor_reads_half_scale() {
        // R_x == reference puts the divider at half scale; the estimate
        // must return the reference back.
        let half = ADC_MAX_COUNTS / 2.0;
        let ohms = estimate(half, REFERENCE_OHMS, ADC_MAX_COUNTS).unwrap();
        assert!((ohms - REFERENCE_OHMS).abs() < 1e-3);
    }
}
