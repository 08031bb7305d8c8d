//! The 40-bit frame sent by the sensor.

/// Number of bit slots in one transmission.
pub const FRAME_BITS: u8 = 40;

/// Five received bytes: humidity, humidity fraction, temperature,
/// temperature fraction, checksum. The fractions are always 0 on a DHT11.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RawFrame(pub(crate) [u8; 5]);

impl RawFrame {
    /// Sets the bit for `slot`, most significant bit first within each byte.
    pub(crate) fn set_bit(&mut self, slot: u8) {
        let (byte, bit) = bit_position(slot);
        self.0[byte] |= 1 << bit;
    }

    pub(crate) fn data(&self) -> [u8; 4] {
        let [hum, hum_frac, temp, temp_frac, _] = self.0;
        [hum, hum_frac, temp, temp_frac]
    }

    pub(crate) fn checksum(&self) -> u8 {
        self.0[4]
    }
}

/// Maps a bit slot to its byte index and bit position.
pub(crate) const fn bit_position(slot: u8) -> (usize, u8) {
    ((slot / 8) as usize, 7 - slot % 8)
}

/// Classifies a data pulse: more than `threshold` ticks high is a `1`.
pub const fn classify_bit(high_ticks: u16, threshold: u16) -> bool {
    high_ticks > threshold
}
