/// What a timer tick did that the outside world may care about
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    None,
    /// The sound timer just reached 0; any beep should end.
    SoundStopped,
}

/// # Timers
/// Two 8-bit countdown timers, each decremented once per `tick` until it reaches 0.
///
/// The timers know nothing of wall-clock time; the driver ticks them at `TIMER_SPEED`.
/// While `sound` is non-zero the driver is expected to be beeping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers::default()
    }

    pub fn tick(&mut self) -> TimerEvent {
        self.delay = self.delay.saturating_sub(1);

        if self.sound > 0 {
            self.sound -= 1;
            if self.sound == 0 {
                return TimerEvent::SoundStopped;
            }
        }
        TimerEvent::None
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}
