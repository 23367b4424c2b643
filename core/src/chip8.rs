use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{INSTRUCTION_SIZE, NUM_KEYS, NUM_REGISTERS, SPRITE_SHEET};
use crate::error::{Chip8Error, Result};
use crate::graphics::Graphics;
use crate::instruction::from_op;
use crate::memory::Memory;
use crate::program_counter::ProgramCounter;
use crate::registers::Registers;
use crate::stack::Stack;
use crate::timer::Timer;

/// Which timers reached zero during a `tick_timers` call
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerEvents {
    pub delay_expired: bool,
    pub sound_expired: bool,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns:
///  - `memory` with the sprite sheet installed at 0x000
///  - the data registers `v` and the key state `keys`
///  - the return address `stack` and the `pc`
///  - the framebuffer `graphics`
///  - the delay and sound timers
///  - the index register `i`
///  - `register_needing_key`, set while execution is blocked on a key press
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU by one cycle
/// - ticking its timers
/// - inspecting its frame buffer for rendering by some display
///
/// There is no reset; a fresh machine is simply constructed in its place.
pub struct Chip8 {
    pub(crate) memory: Memory,
    pub(crate) v: Registers,
    pub(crate) keys: Registers,
    pub(crate) stack: Stack,
    pub(crate) pc: ProgramCounter,
    pub(crate) graphics: Graphics,
    pub(crate) delay_timer: Timer,
    pub(crate) sound_timer: Timer,
    pub(crate) i: u16,
    pub(crate) register_needing_key: Option<usize>,
    pub(crate) rng: StdRng,
    config: Config,
}

impl Chip8 {
    /// A standard machine: 4K of memory, 64x32 display, 60Hz timers
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Chip8 {
            memory: Memory::with_contents(config.memory_size, &SPRITE_SHEET),
            v: Registers::new(NUM_REGISTERS),
            keys: Registers::new(NUM_KEYS),
            stack: Stack::new(config.stack_size),
            pc: ProgramCounter::new(config.pc_start, INSTRUCTION_SIZE),
            graphics: Graphics::new(config.display_width, config.display_height),
            delay_timer: Timer::new(),
            sound_timer: Timer::new(),
            i: 0,
            register_needing_key: None,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Copies `rom` into memory at the initial pc.
    /// Nothing is written if the rom doesn't fit.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        let max = self.config.max_rom_size();
        if rom.len() > max {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max,
            });
        }
        self.memory.write(self.pc.initial() as usize, rom)?;
        log::debug!(
            "loaded {} byte rom at {:#06X}",
            rom.len(),
            self.pc.initial()
        );
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_rom(&rom)
    }

    /// Returns the framebuffer if it changed during the last cycle
    pub fn get_frame(&self) -> Option<&Graphics> {
        if self.graphics.is_dirty() {
            Some(&self.graphics)
        } else {
            None
        }
    }

    pub fn graphics(&self) -> &Graphics {
        &self.graphics
    }

    pub fn pc(&self) -> u16 {
        self.pc.value()
    }

    pub fn index(&self) -> u16 {
        self.i
    }

    pub fn v(&self, x: usize) -> Result<u8> {
        self.v.get(x)
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer.value()
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer.value()
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.sound_timer.value() > 0
    }

    /// The register that will receive the next key press, if any
    pub fn awaiting_key(&self) -> Option<usize> {
        self.register_needing_key
    }

    /// Set the pressed status of key.
    /// A press while awaiting a key also stores it in the waiting register
    /// and resumes execution.
    ///
    /// # Arguments
    /// * `key` the key, 0x0..=0xF
    /// * `pressed` true on press, false on release
    pub fn set_key_press(&mut self, key: u8, pressed: bool) -> Result<()> {
        self.keys.set(key as usize, u16::from(pressed))?;
        if pressed {
            if let Some(register) = self.register_needing_key.take() {
                log::debug!("key {:X} pressed, resuming with V{:X}", key, register);
                self.v.set(register, u16::from(key))?;
            }
        }
        Ok(())
    }

    /// Advances both timers by one period
    pub fn tick_timers(&mut self) -> TimerEvents {
        let events = TimerEvents {
            delay_expired: self.delay_timer.tick(),
            sound_expired: self.sound_timer.tick(),
        };
        if events.delay_expired {
            log::debug!("delay timer reached zero");
        }
        if events.sound_expired {
            log::debug!("sound timer reached zero");
        }
        events
    }

    /// Advances the CPU by a single cycle
    /// - does nothing while awaiting a keypress
    /// - gets and executes the next opcode
    /// - moves the pc on to the following instruction
    ///
    /// A failed cycle leaves the machine as it was before the opcode ran.
    pub fn run_cycle(&mut self) -> Result<()> {
        if self.register_needing_key.is_some() {
            return Ok(());
        }
        self.graphics.set_clean();
        let op = self.get_op()?;
        log::trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.v.values(),
            self.i,
            self.pc.value()
        );
        let operation = from_op(op)?;
        operation(&op, self)?;
        self.pc.increment();
        Ok(())
    }

    /// Gets the opcode currently pointed at by the pc.
    fn get_op(&self) -> Result<u16> {
        self.memory.load16(self.pc.value() as usize)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
