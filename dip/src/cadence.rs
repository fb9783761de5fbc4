use std::time::Duration;

/// Backlog beyond this is dropped, so a stalled window doesn't replay seconds of emulation.
const MAX_BACKLOG: Duration = Duration::from_millis(250);

/// # Cadence
/// Turns elapsed wall-clock time into a whole number of events at a fixed rate.
///
/// Time that doesn't add up to a full period is carried over to the next call, so the
/// long-run rate stays exact however irregularly `due` is called.
pub struct Cadence {
    period: Duration,
    owed: Duration,
}

impl Cadence {
    /// # Arguments
    /// * `hz` events per second; 0 is treated as 1 and rates above 1GHz as 1GHz
    pub fn new(hz: u32) -> Self {
        Cadence {
            period: (Duration::from_secs(1) / hz.max(1)).max(Duration::from_nanos(1)),
            owed: Duration::from_secs(0),
        }
    }

    /// The number of events that fall due after another `elapsed` of wall-clock time.
    pub fn due(&mut self, elapsed: Duration) -> u32 {
        self.owed = (self.owed + elapsed).min(MAX_BACKLOG);
        let due = (self.owed.as_nanos() / self.period.as_nanos()) as u32;
        self.owed -= self.period * due;
        due
    }
}
