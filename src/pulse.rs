use embedded_hal::delay::DelayNs;

/// Result of timing one level of the data line.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PulseOutcome {
    /// The level changed after this many polling ticks.
    Observed(u16),
    /// The level did not change within the tick budget.
    Timeout,
}

/// Busy-polls until `at_level` returns `false`, one tick per microsecond.
///
/// Returns [`PulseOutcome::Observed`] with the number of ticks spent at the
/// level, or [`PulseOutcome::Timeout`] once more than `limit` ticks have
/// elapsed. If the line is already off the level, returns `Observed(0)`
/// without delaying.
///
/// Polls at most `limit + 2` times and delays at most `limit + 1` times.
///
/// # Errors
///
/// Propagates any error returned by `at_level`.
pub fn expect_pulse<D, F, E>(delay: &mut D, limit: u16, mut at_level: F) -> Result<PulseOutcome, E>
where
    D: DelayNs,
    F: FnMut() -> Result<bool, E>,
{
    let mut elapsed: u16 = 0;
    while at_level()? {
        if elapsed > limit {
            return Ok(PulseOutcome::Timeout);
        }
        elapsed += 1;
        delay.delay_us(1);
    }
    Ok(PulseOutcome::Observed(elapsed))
}
