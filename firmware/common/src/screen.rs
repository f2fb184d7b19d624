//! Chart composition for the 128x64 monochrome panel.
//!
//! Immediate-mode drawing into any `DrawTarget<Color = BinaryColor>`; the
//! SSD1306 buffered-graphics mode and the desktop simulator both qualify.
//! Callers clear before and flush after; this module only draws.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use profont::PROFONT_7_POINT;

use crate::bands::TOLERANCE_COLOR;
use crate::config::{FIRST_ROW_Y, HEADER_HEIGHT, ROW_PITCH, TEXT_X, VALUE_X};
use crate::reading::Reading;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(&PROFONT_7_POINT, BinaryColor::On)
}

/// Format a nominal resistance the way the panel shows it.
pub fn format_ohms(ohms: f32) -> String<16> {
    let mut text: String<16> = String::new();
    let _ = write!(text, "{ohms:.0} ohm");
    text
}

/// Render one cycle's outcome onto a cleared framebuffer.
pub fn draw_screen<D>(display: &mut D, reading: &Reading)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_frame(display);

    match reading {
        Reading::Value { nominal, bands } => {
            draw_row(display, 0, "Rx", format_ohms(nominal.ohms()).as_str());
            draw_row(display, 1, "band 1", bands.digit1);
            draw_row(display, 2, "band 2", bands.digit2);
            draw_row(display, 3, "mult", bands.multiplier);
            draw_row(display, 4, "toler", TOLERANCE_COLOR);
        }
        Reading::NoValue => {
            // Nothing measurable; leave the band rows blank.
            draw_row(display, 0, "Rx", "----");
        }
        Reading::OpenCircuit => {
            draw_row(display, 1, "open circuit", "");
            draw_row(display, 3, "insert resistor", "");
        }
    }
}

/// Static chart: border, header rule, title and the resistor glyph.
fn draw_frame<D>(display: &mut D)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    Rectangle::new(Point::new(1, 1), Size::new(126, 62))
        .into_styled(stroke)
        .draw(display)
        .ok();

    Line::new(Point::new(1, HEADER_HEIGHT), Point::new(126, HEADER_HEIGHT))
        .into_styled(stroke)
        .draw(display)
        .ok();

    Text::with_baseline("E24 OHMMETER", Point::new(TEXT_X, 4), text_style(), Baseline::Top)
        .draw(display)
        .ok();

    draw_resistor_glyph(display);
}

/// Tiny four-band resistor: leads, body outline, three band ticks and a
/// separated tolerance tick.
fn draw_resistor_glyph<D>(display: &mut D)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    Line::new(Point::new(78, 8), Point::new(86, 8))
        .into_styled(stroke)
        .draw(display)
        .ok();
    Line::new(Point::new(112, 8), Point::new(120, 8))
        .into_styled(stroke)
        .draw(display)
        .ok();

    Rectangle::new(Point::new(86, 4), Size::new(26, 9))
        .into_styled(stroke)
        .draw(display)
        .ok();

    for x in [90, 94, 98, 106] {
        Line::new(Point::new(x, 6), Point::new(x, 10))
            .into_styled(stroke)
            .draw(display)
            .ok();
    }
}

/// One label/value text row below the header.
fn draw_row<D>(display: &mut D, row: i32, label: &str, value: &str)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let y = FIRST_ROW_Y + row * ROW_PITCH;

    Text::with_baseline(label, Point::new(TEXT_X, y), text_style(), Baseline::Top)
        .draw(display)
        .ok();

    if !value.is_empty() {
        Text::with_baseline(value, Point::new(VALUE_X, y), text_style(), Baseline::Top)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ohms_rounds_to_integer() {
        assert_eq!(format_ohms(470.0).as_str(), "470 ohm");
        assert_eq!(format_ohms(470.23).as_str(), "470 ohm");
        assert_eq!(format_ohms(4700.0).as_str(), "4700 ohm");
    }

    #[test]
    fn test_format_ohms_fits_buffer_at_top_decade() {
        // Megohm-range nominals must not overflow the heapless buffer
        // (truncation would drop the unit suffix silently).
        let text = format_ohms(9_100_000.0);
        assert_eq!(text.as_str(), "9100000 ohm");
        assert!(text.len() <= 16);
    }
}
