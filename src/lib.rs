//! Driver for the Texas Instruments HDC1080 temperature and humidity sensor,
//! built on the [`embedded-hal`] I2C and delay traits.
//!
//! The driver lives in [`blocking`]; see [`blocking::Hdc1080`] to get started.
//!
//! # Optional features
//!
//! - `defmt`: derives `defmt::Format` for the public types and logs register
//!   traffic at trace level.
//! - `fixed`: fixed-point conversions in [`conversions::fixed_point`].
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod utils;

pub mod blocking;
pub mod conversions;
pub mod error;
pub mod types;

mod common;

pub use blocking::Hdc1080;
pub use error::Error;
pub use types::{
    AcquisitionMode, Config, ConfigOptions, Configuration, HumidityResolution, Measurement,
    TemperatureResolution,
};
