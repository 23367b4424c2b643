pub use crate::chip8::{Chip8, TimerEvents};
pub use crate::clock::{Clock, Due, Pacing};
pub use crate::config::Config;
pub use crate::error::{Chip8Error, Result};
pub use crate::graphics::Graphics;
pub use crate::keymap::{Keymap, KeymapError};

mod chip8;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
mod instruction;
pub mod keymap;
pub mod memory;
mod opcode;
mod operations;
pub mod program_counter;
pub mod registers;
pub mod stack;
pub mod timer;
