/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Return addresses the stack can hold
pub const STACK_SIZE: usize = 16;

/// ROMs are loaded here and execution starts here
pub const PC_START: u16 = 0x200;

/// Bytes per instruction
pub const INSTRUCTION_SIZE: u16 = 2;

/// Data registers V0..VF
pub const NUM_REGISTERS: usize = 16;

/// Keys on the hexadecimal keypad
pub const NUM_KEYS: usize = 16;

/// VF doubles as the carry/borrow/collision flag
pub const FLAG_REGISTER: u8 = 0xF;

/// Sprites are always 8 pixels wide
pub const SPRITE_WIDTH: usize = 8;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Frequency of the delay and sound timers
pub const TIMER_HZ: u32 = 60;

/// Frequency at which instructions are executed
pub const CYCLE_HZ: u32 = 630;

/// Bytes per glyph in the sprite sheet
pub const GLYPH_SIZE: u16 = 5;

/// # Sprite Sheet
/// Glyphs for the hexadecimal digits 0..F, 5 bytes each, stored at 0x000.
///
/// Each byte is one row of a 4x5 glyph, most significant bit leftmost:
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
