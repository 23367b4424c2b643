use std::time::Duration;

use crate::config::Config;
use crate::timer::period;

/// Longest stretch of wall time a single `advance` will catch up on
const MAX_CATCH_UP: Duration = Duration::from_millis(250);

/// How instruction cycles and timer ticks are scheduled against each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Cycles and ticks each run at their own fixed rate
    Independent { cycle_hz: u32, timer_hz: u32 },
    /// Cycles run at `cycle_hz` and a tick follows every `cycles_per_tick` cycles
    Locked { cycle_hz: u32, cycles_per_tick: u32 },
}

impl Pacing {
    /// Independent pacing at the rates of `config`
    pub fn from_config(config: &Config) -> Self {
        Pacing::Independent {
            cycle_hz: config.cycle_hz,
            timer_hz: config.timer_hz,
        }
    }

    pub fn cycle_hz(&self) -> u32 {
        match *self {
            Pacing::Independent { cycle_hz, .. } | Pacing::Locked { cycle_hz, .. } => cycle_hz,
        }
    }

    pub fn cycle_period(&self) -> Duration {
        period(self.cycle_hz())
    }
}

/// Work that has come due since the last `advance`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Due {
    pub cycles: u32,
    pub ticks: u32,
}

/// # Clock
/// Turns elapsed wall time into a number of cycles and timer ticks to run.
///
/// Time that doesn't add up to a whole cycle or tick is carried over to the
/// next `advance`, so the long run rate matches the configured one however
/// irregularly the driver calls in.
pub struct Clock {
    pacing: Pacing,
    cycle_debt: Duration,
    tick_debt: Duration,
    cycles_since_tick: u32,
}

impl Clock {
    pub fn new(pacing: Pacing) -> Self {
        Clock {
            pacing,
            cycle_debt: Duration::default(),
            tick_debt: Duration::default(),
            cycles_since_tick: 0,
        }
    }

    /// Forgets any carried over time, e.g. after a pause
    pub fn reset(&mut self) {
        self.cycle_debt = Duration::default();
        self.tick_debt = Duration::default();
        self.cycles_since_tick = 0;
    }

    /// Accounts for `elapsed` wall time and returns what is now due.
    /// At most `MAX_CATCH_UP` of `elapsed` is honoured.
    pub fn advance(&mut self, elapsed: Duration) -> Due {
        let elapsed = elapsed.min(MAX_CATCH_UP);
        self.cycle_debt += elapsed;
        let cycles = drain(&mut self.cycle_debt, self.pacing.cycle_period());

        let ticks = match self.pacing {
            Pacing::Independent { timer_hz, .. } => {
                self.tick_debt += elapsed;
                drain(&mut self.tick_debt, period(timer_hz))
            }
            Pacing::Locked {
                cycles_per_tick, ..
            } => {
                let cycles_per_tick = cycles_per_tick.max(1);
                self.cycles_since_tick += cycles;
                let ticks = self.cycles_since_tick / cycles_per_tick;
                self.cycles_since_tick %= cycles_per_tick;
                ticks
            }
        };

        Due { cycles, ticks }
    }
}

/// Removes as many whole periods from `debt` as it holds and returns how many.
fn drain(debt: &mut Duration, period: Duration) -> u32 {
    let count = (debt.as_nanos() / period.as_nanos().max(1)) as u32;
    *debt -= period * count;
    count
}
