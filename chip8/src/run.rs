use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, Clock, Config, Keymap, Pacing};
use display::Display;

use crate::keymap;

/// How many times faster than the configured rate the machine runs while Space is held
const FAST_FORWARD: u32 = 8;

/// How long the loop rests between polls
const IDLE: Duration = Duration::from_millis(1);

/// Everything needed to start (and restart) a session
pub struct Options {
    pub rom: PathBuf,
    pub config: Config,
    pub pacing: Pacing,
    pub scale: usize,
}

/// A fresh machine with the rom loaded
fn load(options: &Options) -> anyhow::Result<Chip8> {
    let mut chip8 = Chip8::with_config(options.config.clone())?;
    let file = File::open(&options.rom)
        .with_context(|| format!("unable to open {}", options.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom_from(&mut reader)
        .with_context(|| format!("unable to load {}", options.rom.display()))?;
    log::info!("successfully loaded {}", options.rom.display());
    Ok(chip8)
}

/// Forwards a key transition to the machine; keys outside the keymap are ignored.
fn press(
    chip8: &mut Chip8,
    keymap: &Keymap<Keycode>,
    key: Keycode,
    pressed: bool,
) -> anyhow::Result<()> {
    match keymap.translate(&key) {
        Ok(key) => chip8.set_key_press(key, pressed)?,
        Err(e) => log::debug!("{}", e),
    }
    Ok(())
}

/// Runs `options.rom` until the window is closed or the machine fails.
///
/// Controls:
/// - `Escape` quits
/// - `P` pauses and resumes
/// - `Space` fast-forwards while held
/// - `F5` restarts the rom on a fresh machine
pub fn run(options: Options) -> anyhow::Result<()> {
    let mut chip8 = load(&options)?;
    let keymap = keymap::qwerty()?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(
        &sdl,
        options.config.display_width,
        options.config.display_height,
        options.scale,
    )?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let mut clock = Clock::new(options.pacing);
    let mut last_poll = Instant::now();

    let mut paused = false;
    // Whether or not the configured clock speed should be respected
    let mut fast_forward = false;
    let mut sounding = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown { repeat: true, .. } => continue,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match key {
                    Keycode::P => {
                        paused = !paused;
                        log::info!("{}", if paused { "paused" } else { "resumed" });
                    }
                    Keycode::F5 => {
                        chip8 = load(&options)?;
                        display.clear();
                        clock.reset();
                        log::info!("restarted");
                    }
                    Keycode::Space => fast_forward = true,
                    _ => press(&mut chip8, &keymap, key, true)?,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match key {
                    Keycode::Space => fast_forward = false,
                    _ => press(&mut chip8, &keymap, key, false)?,
                },
                _ => continue,
            };
        }

        let now = Instant::now();
        let elapsed = now - last_poll;
        last_poll = now;

        if paused {
            std::thread::sleep(IDLE);
            continue;
        }

        // Update state
        let elapsed = if fast_forward {
            elapsed * FAST_FORWARD
        } else {
            elapsed
        };
        let due = clock.advance(elapsed);

        let mut redraw = false;
        for _ in 0..due.cycles {
            chip8
                .run_cycle()
                .with_context(|| format!("machine halted at pc {:#06X}", chip8.pc()))?;
            redraw |= chip8.get_frame().is_some();
        }
        for _ in 0..due.ticks {
            chip8.tick_timers();
        }

        if chip8.sound_active() != sounding {
            sounding = chip8.sound_active();
            log::debug!("tone {}", if sounding { "on" } else { "off" });
        }

        // If the frame changed during this batch, render it
        if redraw {
            display.render(chip8.graphics())?;
        }

        std::thread::sleep(IDLE);
    }

    Ok(())
}
