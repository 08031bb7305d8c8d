//! GPIO capabilities the driver needs from the host.
//!
//! The DHT11 data line is switched between output (start signal) and input
//! (sensor response) during every acquisition. `embedded-hal` has no
//! direction switching, so the driver talks to a small [`Gpio`] trait instead.
//! [`OpenDrainPin`] implements it for any open-drain `embedded-hal` pin.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};

/// Direction of the data line.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The microcontroller drives the line.
    Output,
    /// The line is released to the sensor.
    Input,
}

/// GPIO access addressed by pin number.
pub trait Gpio: ErrorType {
    /// Returns `true` if `pin` can be used as a GPIO line.
    fn is_valid_gpio(&self, pin: u8) -> bool;

    /// Switches the direction of `pin`.
    fn set_direction(&mut self, pin: u8, direction: Direction) -> Result<(), Self::Error>;

    /// Drives `pin` to `level`.
    fn set_level(&mut self, pin: u8, level: PinState) -> Result<(), Self::Error>;

    /// Reads the current level of `pin`. Never cached.
    fn level(&mut self, pin: u8) -> Result<PinState, Self::Error>;
}

/// [`Gpio`] for a single open-drain pin with an external pull-up.
///
/// Driving the pin high releases the line, so switching to
/// [`Direction::Input`] drives it high and [`Direction::Output`] is a no-op.
pub struct OpenDrainPin<P> {
    pin: P,
    number: u8,
}

impl<P> OpenDrainPin<P>
where
    P: InputPin + OutputPin,
{
    /// Wraps `pin`, which is GPIO number `number` on the host.
    pub fn new(pin: P, number: u8) -> Self {
        OpenDrainPin { pin, number }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: ErrorType> ErrorType for OpenDrainPin<P> {
    type Error = P::Error;
}

impl<P> Gpio for OpenDrainPin<P>
where
    P: InputPin + OutputPin,
{
    fn is_valid_gpio(&self, pin: u8) -> bool {
        pin == self.number
    }

    fn set_direction(&mut self, _pin: u8, direction: Direction) -> Result<(), Self::Error> {
        match direction {
            Direction::Output => Ok(()),
            Direction::Input => self.pin.set_high(),
        }
    }

    fn set_level(&mut self, _pin: u8, level: PinState) -> Result<(), Self::Error> {
        self.pin.set_state(level)
    }

    fn level(&mut self, _pin: u8) -> Result<PinState, Self::Error> {
        Ok(PinState::from(self.pin.is_high()?))
    }
}
