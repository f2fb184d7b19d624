//! ADC sample aggregation.
//!
//! The only component that talks to the analog side, behind the
//! [`SampleSource`] seam: the firmware plugs in the RP2040 ADC, the
//! simulator and tests plug in closures.

use embedded_hal::delay::DelayNs;

/// One blocking ADC read, bounded by the converter's full scale.
/// Reads always succeed in this design; there is no error channel.
pub trait SampleSource {
    fn read_sample(&mut self) -> u16;
}

impl<F> SampleSource for F
where
    F: FnMut() -> u16,
{
    fn read_sample(&mut self) -> u16 { self() }
}

/// Average `count` raw samples into one reading.
///
/// Pure arithmetic mean, no outlier rejection. Pauses `gap_ms` between
/// samples as a noise-averaging window. The per-sample fractions stay
/// exact: the sum of full-scale 12-bit samples fits in f32 for any count
/// up to [`crate::config::SAMPLE_COUNT`] scale (validated in config).
pub fn average_samples<S, D>(source: &mut S, delay: &mut D, count: u32, gap_ms: u32) -> f32
where
    S: SampleSource + ?Sized,
    D: DelayNs,
{
    if count == 0 {
        return 0.0;
    }

    let mut sum = 0.0_f32;
    for _ in 0..count {
        sum += f32::from(source.read_sample());
        delay.delay_ms(gap_ms);
    }
    sum / count as f32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[test]
    fn test_constant_samples_average_exactly() {
        // The mean of n identical samples is that sample, with no rounding.
        for constant in [0u16, 1, 470, 2048, 4095] {
            let mut source = || constant;
            let avg = average_samples(&mut source, &mut NoopDelay::new(), 500, 1);
            assert_eq!(avg, f32::from(constant), "mean of constant {constant} drifted");
        }
    }

    #[test]
    fn test_takes_exactly_count_samples() {
        let mut taken = 0u32;
        let mut source = || {
            taken += 1;
            100u16
        };
        average_samples(&mut source, &mut NoopDelay::new(), 500, 1);
        assert_eq!(taken, 500);
    }

    #[test]
    fn test_alternating_samples() {
        let mut toggle = false;
        let mut source = || {
            toggle = !toggle;
            if toggle { 1000u16 } else { 3000u16 }
        };
        let avg = average_samples(&mut source, &mut NoopDelay::new(), 500, 1);
        assert_eq!(avg, 2000.0);
    }

    #[test]
    fn test_zero_count_yields_zero() {
        let mut source = || 4095u16;
        let avg = average_samples(&mut source, &mut NoopDelay::new(), 0, 1);
        assert_eq!(avg, 0.0);
    }
}
