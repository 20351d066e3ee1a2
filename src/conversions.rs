//! Sensor readings to celsius, fahrenheit and percent relative humidity.
//!
//! These functions are used by the methods on [`Measurement`] and
//! [`Hdc1080`] but are provided here should you need to use them on raw
//! readings you have stored.
//!
//! The transfer functions are in section 8.6 of the [datasheet]. Note that
//! the divisor is 2^16, not `u16::MAX`, so a full-scale reading falls just
//! short of the top of the range. Values are not clamped.
//!
//! With the `fixed` feature, the [`fixed_point`] submodule provides the same
//! conversions on fixed- rather than floating-point numbers.
//!
//! [`Measurement`]: crate::types::Measurement
//! [`Hdc1080`]: crate::blocking::Hdc1080
//! [datasheet]: https://www.ti.com/lit/ds/symlink/hdc1080.pdf

const FULL_SCALE: f64 = 65_536.0;

/// Convert the raw humidity reading to percent relative humidity.
pub fn humidity_reading_to_percent_rh(reading: u16) -> f64 {
    let raw: f64 = reading.into();
    (raw / FULL_SCALE) * 100.0
}

/// Convert the raw temperature reading to celsius.
pub fn temperature_reading_to_celsius(reading: u16) -> f64 {
    let raw: f64 = reading.into();
    (raw / FULL_SCALE) * 165.0 - 40.0
}

/// Convert the raw temperature reading to fahrenheit.
pub fn temperature_reading_to_fahrenheit(reading: u16) -> f64 {
    // 165 * 9/5 = 297, and -40°C is -40°F.
    let raw: f64 = reading.into();
    (raw / FULL_SCALE) * 297.0 - 40.0
}

/// Fixed-point numeric conversions from sensor readings.
///
/// The functions in this module are the same as those in the parent
/// `conversions` module, except that they operate with fixed-point numbers
/// rather than floating-point numbers.
///
/// Dividing the reading by 2^16 is exactly reinterpreting its bits as the
/// fractional part of a `U16F16`, so no precision is lost there.
#[cfg(feature = "fixed")]
pub mod fixed_point {
    use fixed::types::{I16F16, U16F16};

    fn fraction(reading: u16) -> I16F16 {
        I16F16::from_num(U16F16::from_bits(u32::from(reading)))
    }

    /// Convert the raw humidity reading to percent relative humidity.
    pub fn humidity_reading_to_percent_rh(reading: u16) -> I16F16 {
        I16F16::from_num(100) * fraction(reading)
    }

    /// Convert the raw temperature reading to celsius.
    pub fn temperature_reading_to_celsius(reading: u16) -> I16F16 {
        I16F16::from_num(165) * fraction(reading) - I16F16::from_num(40)
    }

    /// Convert the raw temperature reading to fahrenheit.
    pub fn temperature_reading_to_fahrenheit(reading: u16) -> I16F16 {
        I16F16::from_num(297) * fraction(reading) - I16F16::from_num(40)
    }

}
