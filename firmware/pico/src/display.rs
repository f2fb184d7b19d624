//! SSD1306 panel bring-up.

use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// Initialize the 128x64 OLED in buffered graphics mode.
///
/// Generic over the bus so the concrete embassy I2C type stays out of the
/// signature. The panel answers on the default 0x3C address.
pub fn init_display<I>(
    i2c: I,
) -> Ssd1306<I2CInterface<I>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>
where
    I: I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    if display.init().is_err() {
        defmt::warn!("SSD1306 init failed, continuing without a panel");
    }

    display
}
