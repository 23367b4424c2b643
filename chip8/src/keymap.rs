use sdl2::keyboard::Keycode;

use chip8_core::{Keymap, KeymapError};

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// The hexadecimal keypad is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn qwerty() -> Result<Keymap<Keycode>, KeymapError> {
    Keymap::new(vec![
        Keycode::Num1,
        Keycode::Num2,
        Keycode::Num3,
        Keycode::Num4,
        Keycode::Q,
        Keycode::W,
        Keycode::E,
        Keycode::R,
        Keycode::A,
        Keycode::S,
        Keycode::D,
        Keycode::F,
        Keycode::Z,
        Keycode::X,
        Keycode::C,
        Keycode::V,
    ])
}

#[cfg(test)]
mod test_keymap {
    use super::*;

    #[test]
    fn test_qwerty_matches_keypad() {
        let keymap = qwerty().unwrap();
        assert_eq!(keymap.translate(&Keycode::X), Ok(0x0));
        assert_eq!(keymap.translate(&Keycode::Num4), Ok(0xC));
        assert_eq!(keymap.translate(&Keycode::V), Ok(0xF));
        assert!(keymap.translate(&Keycode::P).is_err());
    }
}
