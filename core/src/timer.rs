use std::time::Duration;

/// Where a timer is in its countdown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    CountingDown { remaining: u8 },
}

/// Time between two events at `hz`, `1000 / hz` milliseconds
pub fn period(hz: u32) -> Duration {
    Duration::from_secs(1) / hz.max(1)
}

/// # Timer
/// A countdown register decremented once per tick.
///
/// The timer does not schedule itself: whoever drives the machine calls
/// `tick` once per `period(timer_hz)` (see `Clock`). A countdown started by
/// `set_value` reports reaching zero exactly once, after which the timer idles
/// until the next `set_value`.
pub struct Timer {
    state: TimerState,
}

impl Timer {
    pub fn new() -> Self {
        Timer {
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn value(&self) -> u8 {
        match self.state {
            TimerState::Idle => 0,
            TimerState::CountingDown { remaining } => remaining,
        }
    }

    /// Restarts the countdown from `value`; 0 stops it without notification.
    pub fn set_value(&mut self, value: u8) {
        self.state = match value {
            0 => TimerState::Idle,
            remaining => TimerState::CountingDown { remaining },
        };
    }

    /// Advances one period. Returns `true` only on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        match self.state {
            TimerState::Idle => false,
            TimerState::CountingDown { remaining: 1 } => {
                self.state = TimerState::Idle;
                true
            }
            TimerState::CountingDown { remaining } => {
                self.state = TimerState::CountingDown {
                    remaining: remaining - 1,
                };
                false
            }
        }
    }
}
