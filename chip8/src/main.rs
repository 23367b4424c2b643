use std::path::PathBuf;

use clap::Parser;

use chip8_core::constants::{CYCLE_HZ, TIMER_HZ};
use chip8_core::{Config, Pacing};

mod keymap;
mod run;

/// Runs a Chip-8 rom in a window.
///
/// The keypad is mapped onto 1234/QWER/ASDF/ZXCV. Escape quits, P pauses,
/// F5 restarts and holding Space fast-forwards. Set `RUST_LOG` for logging.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the rom to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = CYCLE_HZ)]
    cycle_hz: u32,

    /// Delay and sound timer ticks per second
    #[arg(long, default_value_t = TIMER_HZ)]
    timer_hz: u32,

    /// Size of each Chip-8 pixel on screen
    #[arg(long, default_value_t = 10)]
    scale: usize,

    /// Tick the timers after every N instructions instead of at --timer-hz
    #[arg(long)]
    cycles_per_tick: Option<u32>,

    /// Seed for the random number instruction
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        cycle_hz: args.cycle_hz,
        timer_hz: args.timer_hz,
        seed: args.seed,
        ..Config::default()
    };
    let pacing = match args.cycles_per_tick {
        Some(cycles_per_tick) => Pacing::Locked {
            cycle_hz: config.cycle_hz,
            cycles_per_tick,
        },
        None => Pacing::from_config(&config),
    };

    run::run(run::Options {
        rom: args.rom,
        config,
        pacing,
        scale: args.scale,
    })
}
