//! E24 Ohmmeter Firmware for the Raspberry Pi Pico (RP2040)
//!
//! Measures an unknown resistor through a voltage divider on GPIO 28,
//! snaps the estimate to the E24 series and shows the four-band color
//! code on an SSD1306 OLED over I2C1.
//!
//! # Maintenance mode
//!
//! The button on GPIO 6 reboots straight into the BOOTSEL bootloader for
//! reflashing; it is a one-shot task woken by the GPIO edge, not polled
//! inside the measurement loop.

#![no_std]
#![no_main]

mod display;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c;
use embassy_time::{Delay, Timer};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use ohmmeter_common::Reading;
use ohmmeter_common::config::{
    ADC_MAX_COUNTS,
    CYCLE_DELAY_MS,
    REFERENCE_OHMS,
    SAMPLE_COUNT,
    SAMPLE_GAP_MS,
};
use ohmmeter_common::sampling::{SampleSource, average_samples};
use ohmmeter_common::screen::draw_screen;
use {defmt_rtt as _, panic_probe as _};

use crate::display::init_display;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"e24-ohmmeter"),
    embassy_rp::binary_info::rp_program_description!(c"E24 resistor color-code meter on SSD1306"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// The divider midpoint on GPIO 28, wrapped as the pipeline's sample source.
struct DividerAdc<'d> {
    adc: Adc<'d, adc::Blocking>,
    channel: Channel<'d>,
}

impl SampleSource for DividerAdc<'_> {
    fn read_sample(&mut self) -> u16 {
        // The sample source has no error channel; a conversion fault reads
        // as 0 counts and washes out in the 500-sample average.
        self.adc.blocking_read(&mut self.channel).unwrap_or(0)
    }
}

/// Maintenance-mode trigger: one falling edge, then hand the device to the
/// boot ROM. Never returns to the measurement loop.
#[embassy_executor::task]
async fn bootsel_task(mut trigger: Input<'static>) {
    trigger.wait_for_falling_edge().await;
    info!("maintenance trigger, rebooting to BOOTSEL");
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("E24 ohmmeter starting...");

    let p = embassy_rp::init(Default::default());

    // Maintenance button (active-low with internal pull-up)
    let trigger = Input::new(p.PIN_6, Pull::Up);
    spawner.spawn(bootsel_task(trigger)).unwrap();

    // Heartbeat LED, toggled once per measurement cycle
    let mut led = Output::new(p.PIN_11, Level::Low);

    // I2C1 at 400 kHz for the SSD1306 (SDA=14, SCL=15)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = i2c::I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut panel = init_display(i2c);

    info!("Display initialized!");

    // Divider midpoint on GPIO 28 (ADC2)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let channel = Channel::new_pin(p.PIN_28, Pull::None);
    let mut divider = DividerAdc { adc, channel };

    info!("Starting measurement loop...");

    loop {
        // Everything below is cycle-local; a short-circuiting path can
        // never leak last cycle's colors into this render.
        let avg = average_samples(&mut divider, &mut Delay, SAMPLE_COUNT, SAMPLE_GAP_MS);
        let reading = Reading::from_average(avg, REFERENCE_OHMS, ADC_MAX_COUNTS);

        match &reading {
            Reading::Value { nominal, .. } => {
                info!("avg {=f32} counts -> nominal {=f32} ohm", avg, nominal.ohms());
            }
            Reading::NoValue => info!("avg {=f32} counts -> no measurable value", avg),
            Reading::OpenCircuit => info!("avg {=f32} counts -> open circuit", avg),
        }

        panel.clear(BinaryColor::Off).ok();
        draw_screen(&mut panel, &reading);
        panel.flush().ok();

        led.toggle();
        Timer::after_millis(CYCLE_DELAY_MS).await;
    }
}
