use crate::constants::{
    CYCLE_HZ, DISPLAY_HEIGHT, DISPLAY_WIDTH, INSTRUCTION_SIZE, MEMORY_SIZE, PC_START,
    SPRITE_SHEET, STACK_SIZE, TIMER_HZ,
};
use crate::error::{Chip8Error, Result};

/// Addresses, I and the pc are all 16 bits wide
const MAX_MEMORY_SIZE: usize = 0x10000;

/// # Config
/// Machine parameters fixed for the lifetime of a `Chip8`.
///
/// `Default` gives the standard machine described in `constants`.
/// `cycle_hz` is not used by the machine itself; it travels with the rest of
/// the configuration so the driver and the machine agree on one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub memory_size: usize,
    pub stack_size: usize,
    pub pc_start: u16,
    pub display_width: usize,
    pub display_height: usize,
    pub timer_hz: u32,
    pub cycle_hz: u32,
    /// Seeds the generator behind CXNN; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            memory_size: MEMORY_SIZE,
            stack_size: STACK_SIZE,
            pc_start: PC_START,
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
            timer_hz: TIMER_HZ,
            cycle_hz: CYCLE_HZ,
            seed: None,
        }
    }
}

impl Config {
    /// Largest ROM that fits between `pc_start` and the end of memory
    pub fn max_rom_size(&self) -> usize {
        self.memory_size.saturating_sub(self.pc_start as usize)
    }

    /// Rejects machines that could not hold the sprite sheet plus at least
    /// one instruction, or that would never tick.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(Chip8Error::InvalidConfig(reason));
        let start = self.pc_start as usize;

        if self.memory_size > MAX_MEMORY_SIZE {
            return invalid(format!(
                "{} bytes of memory is more than 16-bit addresses can reach",
                self.memory_size
            ));
        }
        if start < SPRITE_SHEET.len() {
            return invalid(format!(
                "programs starting at {:#06X} would overwrite the sprite sheet",
                self.pc_start
            ));
        }
        if start + INSTRUCTION_SIZE as usize > self.memory_size {
            return invalid(format!(
                "programs starting at {:#06X} do not fit in {} bytes of memory",
                self.pc_start, self.memory_size
            ));
        }
        if self.stack_size == 0 {
            return invalid("the stack needs room for at least one address".into());
        }
        if self.display_width == 0 || self.display_height == 0 {
            return invalid(format!(
                "{}x{} is not a usable display",
                self.display_width, self.display_height
            ));
        }
        if self.timer_hz == 0 || self.cycle_hz == 0 {
            return invalid("timer and cycle frequencies must be non-zero".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn test_default_is_standard_machine() {
        let config = Config::default();
        assert_eq!(config.memory_size, 4096);
        assert_eq!(config.pc_start, 0x200);
        assert_eq!((config.display_width, config.display_height), (64, 32));
    }

    #[test]
    fn test_max_rom_size() {
        assert_eq!(Config::default().max_rom_size(), 4096 - 512);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_program_over_sprite_sheet_is_invalid() {
        let config = Config {
            pc_start: 0x40,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Chip8Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_program_past_memory_is_invalid() {
        let config = Config {
            memory_size: 0x200,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_sizes_are_invalid() {
        for config in vec![
            Config {
                stack_size: 0,
                ..Config::default()
            },
            Config {
                display_height: 0,
                ..Config::default()
            },
            Config {
                timer_hz: 0,
                ..Config::default()
            },
            Config {
                memory_size: 0x10001,
                ..Config::default()
            },
        ] {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }
}
