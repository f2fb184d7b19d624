//! Instrument configuration constants.
//!
//! All values are compile-time constants with validation assertions, so a
//! miswired configuration (zero sample count, layout that overflows the
//! panel) fails the build instead of misbehaving in the field.

// =============================================================================
// ADC / Voltage Divider
// =============================================================================

/// Full-scale reading of the RP2040's 12-bit converter.
pub const ADC_MAX_COUNTS: f32 = 4095.0;

/// Known divider resistor between the ADC node and ground, in ohms.
/// A 470 R 1% part; the unknown resistor sits between 3.3 V and the node.
pub const REFERENCE_OHMS: f32 = 470.0;

/// Apparent resistances at or above this multiple of the reference are
/// reported as an open circuit instead of a number.
pub const OPEN_CIRCUIT_RATIO: f32 = 20.0;

const _: () = assert!(ADC_MAX_COUNTS > 0.0);
const _: () = assert!(REFERENCE_OHMS > 0.0);
const _: () = assert!(OPEN_CIRCUIT_RATIO > 1.0);

// =============================================================================
// Sampling
// =============================================================================

/// Samples averaged into one reading. The mean of this many full-scale
/// 12-bit samples still fits exactly in an f32 (500 * 4095 < 2^24).
pub const SAMPLE_COUNT: u32 = 500;

/// Settling gap between consecutive samples, in milliseconds.
/// Noise averaging, not a correctness requirement.
pub const SAMPLE_GAP_MS: u32 = 1;

/// Pause between measurement cycles, in milliseconds.
pub const CYCLE_DELAY_MS: u64 = 700;

const _: () = assert!(SAMPLE_COUNT > 0);
const _: () = assert!((SAMPLE_COUNT as f32) * ADC_MAX_COUNTS < 16_777_216.0);

// =============================================================================
// Screen Layout (SSD1306, 128x64)
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Height of the title header, closed off by a horizontal rule.
pub const HEADER_HEIGHT: i32 = 15;

/// Left margin for all text rows.
pub const TEXT_X: i32 = 5;

/// Column where row values (color names, ohms) start.
pub const VALUE_X: i32 = 55;

/// First text row below the header rule.
pub const FIRST_ROW_Y: i32 = 17;

/// Vertical pitch between text rows.
pub const ROW_PITCH: i32 = 9;

const _: () = assert!(HEADER_HEIGHT < SCREEN_HEIGHT as i32);
const _: () = assert!(FIRST_ROW_Y > HEADER_HEIGHT);
// Five rows (reading + three bands + tolerance) must fit above the border.
const _: () = assert!(FIRST_ROW_Y + 5 * ROW_PITCH <= SCREEN_HEIGHT as i32);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Intentional re-checks of the const validation
mod tests {
    use super::*;

    #[test]
    fn test_divider_constants_sane() {
        assert!(ADC_MAX_COUNTS > 0.0);
        assert!(REFERENCE_OHMS > 0.0);
        assert!(OPEN_CIRCUIT_RATIO > 1.0, "ratio of 1 would flag every reading as open");
    }

    #[test]
    fn test_sample_sum_fits_f32_exactly() {
        // Every integer up to 2^24 is exactly representable in f32, so the
        // running sum of SAMPLE_COUNT full-scale samples never rounds.
        assert!((SAMPLE_COUNT as f32) * ADC_MAX_COUNTS < 16_777_216.0);
    }

    #[test]
    fn test_layout_fits_panel() {
        assert!(FIRST_ROW_Y + 5 * ROW_PITCH <= SCREEN_HEIGHT as i32);
        assert!(VALUE_X > TEXT_X);
        assert!((VALUE_X as u32) < SCREEN_WIDTH);
    }
}
