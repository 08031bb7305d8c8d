use core::fmt;

/// Possible errors from the DHT11 driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The driver was not initialized with a usable pin.
    Init(InitError),
    /// Timed out waiting for a pin state change.
    Timeout(TimeoutKind),
    /// Checksum did not match the received data.
    ChecksumMismatch {
        /// Truncated sum of the four data bytes.
        expected: u8,
        /// Checksum byte sent by the sensor.
        received: u8,
    },
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> DhtError<E> {
    /// Returns `true` if any handshake or data wait ran out of ticks.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init error: {e}"),
            Self::Timeout(kind) => write!(f, "timeout: {kind}"),
            Self::ChecksumMismatch { expected, received } => write!(
                f,
                "checksum mismatch: expected {expected:#04x}, received {received:#04x}"
            ),
            Self::PinError(e) => write!(f, "pin error: {e:?}"),
        }
    }
}

/// Why a driver could not start an acquisition.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitError {
    /// The pin number is not a usable GPIO line.
    InvalidPin(u8),
    /// `read` was called before a successful `init`.
    NotInitialized,
    /// `init` was already called on this driver.
    AlreadyInitialized,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(pin) => write!(f, "GPIO {pin} is not a valid pin"),
            Self::NotInitialized => f.write_str("driver not initialized"),
            Self::AlreadyInitialized => f.write_str("driver already initialized"),
        }
    }
}

/// Which wait ran out of ticks.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeoutKind {
    /// The sensor never pulled the line low after the start signal.
    NoResponse,
    /// The acknowledgement low phase lasted too long.
    AckLowTooLong,
    /// The acknowledgement high phase lasted too long.
    AckHighTooLong,
    /// The high pulse carrying a data bit lasted too long.
    DataBit {
        /// Bit slot, 0 to 39.
        slot: u8,
    },
}

impl fmt::Display for TimeoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResponse => f.write_str("no response from sensor"),
            Self::AckLowTooLong => f.write_str("sensor held the line low too long"),
            Self::AckHighTooLong => f.write_str("sensor held the line high too long"),
            Self::DataBit { slot } => write!(f, "could not read data bit {slot}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pin_error() {
        let err: DhtError<u8> = 7u8.into();
        assert_eq!(err, DhtError::PinError(7));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_display() {
        let err: DhtError<()> = DhtError::Timeout(TimeoutKind::DataBit { slot: 12 });
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "timeout: could not read data bit 12");

        let err: DhtError<()> = DhtError::ChecksumMismatch {
            expected: 0x44,
            received: 0x45,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: expected 0x44, received 0x45"
        );

        let err: DhtError<()> = DhtError::Init(InitError::InvalidPin(20));
        assert_eq!(err.to_string(), "init error: GPIO 20 is not a valid pin");
    }
}
