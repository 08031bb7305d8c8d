/// How long the start signal holds the line low, in microseconds.
///
/// The sensor needs at least 18 ms to notice the request.
pub const DEFAULT_START_LOW_US: u32 = 22_000;

/// How long the line is driven high before it is released to the sensor.
pub const DEFAULT_START_HIGH_US: u32 = 43;

/// Maximum number of 1 µs polling ticks a single wait may take.
pub const DEFAULT_TIMEOUT_TICKS: u16 = 200;

/// High pulses longer than this many ticks are read as a `1` bit.
///
/// Tuned to the nominal 26-28 µs `0` and 70 µs `1` pulses.
pub const DEFAULT_BIT_THRESHOLD: u16 = 40;

/// Timing parameters of the driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Start signal low hold, in microseconds.
    pub start_low_us: u32,
    /// Start signal high hold before releasing the line, in microseconds.
    pub start_high_us: u32,
    /// Tick budget for every handshake and data wait.
    pub timeout_ticks: u16,
    /// Tick count above which a data pulse is a `1`.
    pub bit_threshold: u16,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            start_low_us: DEFAULT_START_LOW_US,
            start_high_us: DEFAULT_START_HIGH_US,
            timeout_ticks: DEFAULT_TIMEOUT_TICKS,
            bit_threshold: DEFAULT_BIT_THRESHOLD,
        }
    }

    /// Overrides the bit threshold, e.g. for a host whose polling tick is
    /// not 1 µs.
    pub const fn with_bit_threshold(mut self, ticks: u16) -> Self {
        self.bit_threshold = ticks;
        self
    }

    pub const fn with_timeout_ticks(mut self, ticks: u16) -> Self {
        self.timeout_ticks = ticks;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
