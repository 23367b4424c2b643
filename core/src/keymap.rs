use std::fmt::Debug;

use thiserror::Error;

use crate::constants::NUM_KEYS;

/// Chip-8 keys in the order they sit on the hexadecimal keypad, row by row
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
#[rustfmt::skip]
pub const ORDERED_KEYS: [u8; NUM_KEYS] = [
    0x1, 0x2, 0x3, 0xC,
    0x4, 0x5, 0x6, 0xD,
    0x7, 0x8, 0x9, 0xE,
    0xA, 0x0, 0xB, 0xF,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("{0} is not mapped to a key")]
    Unmapped(String),

    #[error("{0:#04X} is not a key")]
    NotAKey(u8),

    #[error("a layout needs exactly {expected} symbols, got {got}")]
    WrongLayoutSize { expected: usize, got: usize },
}

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// A keymap places one symbol `K` (a keycode, a character, ...) on each key of
/// the keypad. Layouts are listed in `ORDERED_KEYS` order, so the QWERTY
/// layout maps the keypad onto the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
#[derive(Clone, Debug)]
pub struct Keymap<K> {
    layout: Vec<K>,
}

impl<K: Debug + PartialEq> Keymap<K> {
    /// If a symbol appears twice the first key it is placed on wins.
    pub fn new(layout: Vec<K>) -> Result<Self, KeymapError> {
        if layout.len() != NUM_KEYS {
            return Err(KeymapError::WrongLayoutSize {
                expected: NUM_KEYS,
                got: layout.len(),
            });
        }
        Ok(Keymap { layout })
    }

    /// The key a symbol is placed on
    pub fn translate(&self, symbol: &K) -> Result<u8, KeymapError> {
        self.layout
            .iter()
            .position(|placed| placed == symbol)
            .map(|position| ORDERED_KEYS[position])
            .ok_or_else(|| KeymapError::Unmapped(format!("{:?}", symbol)))
    }

    /// The symbol placed on a key
    pub fn untranslate(&self, key: u8) -> Result<&K, KeymapError> {
        ORDERED_KEYS
            .iter()
            .position(|&ordered| ordered == key)
            .map(|position| &self.layout[position])
            .ok_or(KeymapError::NotAKey(key))
    }

    /// Every (symbol, key) pair in keypad order
    pub fn keys(&self) -> impl Iterator<Item = (&K, u8)> {
        self.layout.iter().zip(ORDERED_KEYS.iter().copied())
    }
}
