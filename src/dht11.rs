use embedded_hal::{delay::DelayNs, digital::PinState};

use crate::config::Config;
use crate::error::{DhtError, InitError, TimeoutKind};
use crate::frame::{FRAME_BITS, RawFrame, classify_bit};
use crate::gpio::{Direction, Gpio};
use crate::pulse::{self, PulseOutcome};
use crate::reading::{Reading, validate_and_build};

/// Driver for the DHT11 temperature and humidity sensor.
pub struct Dht11<G, D> {
    gpio: G,
    delay: D,
    config: Config,
    pin: Option<u8>,
}

impl<G, DELAY> Dht11<G, DELAY>
where
    G: Gpio,
    DELAY: DelayNs,
{
    /// Creates a new instance of the DHT11 driver with the default timing.
    ///
    /// # Arguments
    ///
    /// * `gpio` - GPIO access for the data line. Must support switching direction.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(gpio: G, delay: DELAY) -> Self {
        Self::with_config(gpio, delay, Config::new())
    }

    /// Creates a new instance of the DHT11 driver with custom timing.
    pub fn with_config(gpio: G, delay: DELAY, config: Config) -> Self {
        Dht11 {
            gpio,
            delay,
            config,
            pin: None,
        }
    }

    /// Selects the data pin. Must succeed once before [`Dht11::read`].
    ///
    /// Does not touch the line.
    ///
    /// # Errors
    ///
    /// * `InitError::InvalidPin` if `pin` is not a usable GPIO line.
    /// * `InitError::AlreadyInitialized` if a pin was already selected.
    pub fn init(&mut self, pin: u8) -> Result<(), DhtError<G::Error>> {
        if self.pin.is_some() {
            return Err(DhtError::Init(InitError::AlreadyInitialized));
        }
        if !self.gpio.is_valid_gpio(pin) {
            warn!("DHT: GPIO {} is not a valid pin", pin);
            return Err(DhtError::Init(InitError::InvalidPin(pin)));
        }
        self.pin = Some(pin);
        Ok(())
    }

    /// Reads a temperature and humidity measurement from the DHT11 sensor.
    ///
    /// This method performs the complete DHT11 communication sequence:
    /// sending a start signal, waiting for the sensor's response,
    /// reading 40 bits and validating the checksum. It busy-waits for the
    /// whole sequence and must not be interrupted, or the line may be left
    /// driven.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` if the driver is not initialized, or a communication
    ///   or checksum error occurs.
    pub fn read(&mut self) -> Result<Reading, DhtError<G::Error>> {
        let pin = self
            .pin
            .ok_or(DhtError::Init(InitError::NotInitialized))?;

        self.start(pin)?;
        let frame = self.read_frame(pin)?;
        trace!("DHT: raw frame {}", frame.0);

        let reading = validate_and_build(&frame).inspect_err(|e| {
            if let DhtError::ChecksumMismatch { expected, received } = e {
                warn!("DHT: checksum error, expected {} received {}", expected, received);
            }
        })?;
        debug!("DHT: {}", reading);
        Ok(reading)
    }

    /// Sends the start signal to the DHT11 and waits for its response.
    ///
    /// The line is pulled low for `start_low_us`, driven high for
    /// `start_high_us` and released. The sensor then lets the line idle
    /// high for 20-40us, pulls it low for 80us and high for another 80us.
    fn start(&mut self, pin: u8) -> Result<(), DhtError<G::Error>> {
        // MCU sends start request
        self.gpio.set_direction(pin, Direction::Output)?;
        self.gpio.set_level(pin, PinState::Low)?;
        self.delay.delay_us(self.config.start_low_us);
        self.gpio.set_level(pin, PinState::High)?;
        self.delay.delay_us(self.config.start_high_us);
        self.gpio.set_direction(pin, Direction::Input)?;

        // Waiting for DHT11 Response
        self.expect(pin, PinState::High, TimeoutKind::NoResponse)?;
        self.expect(pin, PinState::Low, TimeoutKind::AckLowTooLong)?; // 80us
        self.expect(pin, PinState::High, TimeoutKind::AckHighTooLong)?; // 80us
        Ok(())
    }

    /// Reads the 40 data bits.
    ///
    /// Each bit is a ~50us low lead-in followed by a high pulse whose width
    /// carries the value. A lead-in that times out is logged and tolerated;
    /// a data pulse that times out aborts the frame.
    fn read_frame(&mut self, pin: u8) -> Result<RawFrame, DhtError<G::Error>> {
        let mut frame = RawFrame::default();

        for slot in 0..FRAME_BITS {
            if self.expect_pulse(pin, PinState::Low)? == PulseOutcome::Timeout {
                warn!("DHT: lead-in of bit {} longer than expected", slot);
            }

            let high_ticks = match self.expect_pulse(pin, PinState::High)? {
                PulseOutcome::Observed(ticks) => ticks,
                PulseOutcome::Timeout => {
                    warn!("DHT: could not read bit {}", slot);
                    return Err(DhtError::Timeout(TimeoutKind::DataBit { slot }));
                }
            };

            if classify_bit(high_ticks, self.config.bit_threshold) {
                frame.set_bit(slot);
            }
        }

        Ok(frame)
    }

    /// Waits while the line is at `level`, failing with `kind` on timeout.
    fn expect(
        &mut self,
        pin: u8,
        level: PinState,
        kind: TimeoutKind,
    ) -> Result<u16, DhtError<G::Error>> {
        match self.expect_pulse(pin, level)? {
            PulseOutcome::Observed(ticks) => Ok(ticks),
            PulseOutcome::Timeout => {
                warn!("DHT: timeout, {}", kind);
                Err(DhtError::Timeout(kind))
            }
        }
    }

    /// Times how long the line stays at `level`.
    fn expect_pulse(&mut self, pin: u8, level: PinState) -> Result<PulseOutcome, G::Error> {
        let gpio = &mut self.gpio;
        pulse::expect_pulse(&mut self.delay, self.config.timeout_ticks, || {
            Ok(gpio.level(pin)? == level)
        })
    }

    /// Returns the selected data pin, if [`Dht11::init`] succeeded.
    pub fn pin(&self) -> Option<u8> {
        self.pin
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Releases the GPIO access and delay provider.
    pub fn release(self) -> (G, DELAY) {
        (self.gpio, self.delay)
    }
}
