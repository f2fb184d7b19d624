//! Shared measurement and rendering logic for the E24 ohmmeter.
//!
//! This crate contains everything about the instrument that does not touch
//! hardware, shared between the Pico firmware and the desktop simulator:
//!
//! - [`config`]: ADC, divider, timing and screen layout constants
//! - [`e24`]: nearest-standard-value resolution on the E24 scale
//! - [`bands`]: four-band color code derivation
//! - [`measure`]: voltage-divider resistance estimate and open-circuit detection
//! - [`sampling`]: ADC sample aggregation behind the [`sampling::SampleSource`] seam
//! - [`reading`]: per-cycle outcome classification for the main loop
//! - [`screen`]: chart composition on any monochrome `DrawTarget`
//!
//! # Testing
//!
//! The crate is `no_std` on embedded targets but builds with `std` under
//! `cargo test`, so the whole pipeline runs on the host:
//!
//! ```bash
//! cargo test -p ohmmeter-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod bands;
pub mod config;
pub mod e24;
pub mod measure;
pub mod reading;
pub mod sampling;
pub mod screen;

// Re-export the per-cycle types the binaries loop over
pub use bands::BandCode;
pub use e24::Nominal;
pub use reading::Reading;
