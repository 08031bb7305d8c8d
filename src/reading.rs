use crate::error::DhtError;
use crate::frame::RawFrame;

/// Reading returned by the DHT11 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    /// Relative humidity in whole percent.
    pub humidity: u8,
    /// Temperature in whole degrees Celsius.
    pub temperature_celsius: u16,
    /// Temperature in whole degrees Fahrenheit, truncated to one byte.
    pub temperature_fahrenheit: u8,
}

/// Converts whole degrees Celsius to Fahrenheit as `c * 1.8 + 32`, rounded
/// down.
///
/// The result is truncated to one byte, so anything above 124 °C wraps.
pub const fn celsius_to_fahrenheit(celsius: u16) -> u8 {
    (celsius as u32 * 18 / 10 + 32) as u8
}

/// Checks the frame's checksum and decodes it into a [`Reading`].
///
/// Only the integer bytes are used; the DHT11 always sends zero fractions.
pub(crate) fn validate_and_build<E>(frame: &RawFrame) -> Result<Reading, DhtError<E>> {
    let expected = frame
        .data()
        .iter()
        .fold(0u8, |sum, v| sum.wrapping_add(*v));
    let received = frame.checksum();
    if expected != received {
        return Err(DhtError::ChecksumMismatch { expected, received });
    }

    let [humidity, _, temperature, _] = frame.data();
    let temperature_celsius = u16::from(temperature);
    Ok(Reading {
        humidity,
        temperature_celsius,
        temperature_fahrenheit: celsius_to_fahrenheit(temperature_celsius),
    })
}
