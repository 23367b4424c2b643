/// # Opcodes
///
/// Instructions are 16-bit words fetched big-endian from memory. Which handler
/// runs is decided by some combination of nibbles:
/// - `(n, _, _, _)` the instruction family; applies to all opcodes
/// - `(_, _, _, n)` the ALU operation of an `8XYn` instruction
/// - `(_, _, n, n)` the sub-operation of an `EXnn`/`FXnn` instruction
/// - `(_, n, n, n)` the fixed `00E0`/`00EE` system instructions
///
/// The remaining nibbles carry operands:
/// - `(_, n, n, n)` NNN, a 12-bit address
/// - `(_, _, n, n)` NN, an 8-bit immediate compared with or assigned to VX
/// - `(_, _, _, n)` N, a 4-bit immediate (sprite height)
/// - `(_, n, _, _)` X, the register VX or the range V0..=VX
/// - `(_, _, n, _)` Y, the register VY
pub trait Opcode {
    /// The opcode's four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[x___]`
    fn family(&self) -> u8;

    /// `[_x__]`
    fn x(&self) -> usize;

    /// `[__y_]`
    fn y(&self) -> usize;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__nn]`
    fn nn(&self) -> u8;

    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (
            self.family(),
            self.x() as u8,
            self.y() as u8,
            self.n(),
        )
    }

    fn family(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}
