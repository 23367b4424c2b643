use crate::error::{Chip8Error, Result};

/// # Registers
/// A fixed-size file of 8-bit cells.
///
/// Used for the data registers V0..VF and, separately, for key state
/// (one cell per key holding 0 or 1).
pub struct Registers {
    cells: Vec<u8>,
}

impl Registers {
    pub fn new(count: usize) -> Self {
        Registers {
            cells: vec![0; count],
        }
    }

    pub fn count(&self) -> usize {
        self.cells.len()
    }

    pub fn values(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<u8> {
        self.cells
            .get(index)
            .copied()
            .ok_or(Chip8Error::RegisterOutOfRange {
                index,
                count: self.count(),
            })
    }

    /// Stores the low 8 bits of `value`.
    pub fn set(&mut self, index: usize, value: u16) -> Result<()> {
        let count = self.count();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Chip8Error::RegisterOutOfRange { index, count })?;
        *cell = (value & 0xFF) as u8;
        Ok(())
    }

    /// Borrows `len` consecutive cells starting at 0.
    pub fn prefix(&self, len: usize) -> Result<&[u8]> {
        if len > self.count() {
            return Err(Chip8Error::RegisterOutOfRange {
                index: len - 1,
                count: self.count(),
            });
        }
        Ok(&self.cells[..len])
    }

    /// Overwrites cells `0..values.len()`.
    pub fn set_prefix(&mut self, values: &[u8]) -> Result<()> {
        if values.len() > self.count() {
            return Err(Chip8Error::RegisterOutOfRange {
                index: values.len() - 1,
                count: self.count(),
            });
        }
        self.cells[..values.len()].copy_from_slice(values);
        Ok(())
    }
}

#[cfg(test)]
mod test_registers {
    use super::*;

    #[test]
    fn test_new_registers_are_zeroed() {
        let registers = Registers::new(16);
        assert_eq!(registers.prefix(16).unwrap(), &[0; 16][..]);
    }

    #[test]
    fn test_set_masks_to_a_byte() {
        let mut registers = Registers::new(16);
        registers.set(0x3, 0x1AB).unwrap();
        assert_eq!(registers.get(0x3).unwrap(), 0xAB);
        registers.set(0x3, 256).unwrap();
        assert_eq!(registers.get(0x3).unwrap(), 0);
    }

    #[test]
    fn test_get_out_of_range() {
        let registers = Registers::new(16);
        assert!(matches!(
            registers.get(16),
            Err(Chip8Error::RegisterOutOfRange { index: 16, count: 16 })
        ));
    }

    #[test]
    fn test_set_prefix() {
        let mut registers = Registers::new(4);
        registers.set_prefix(&[1, 2, 3]).unwrap();
        assert_eq!(registers.prefix(4).unwrap(), &[1, 2, 3, 0]);
        assert!(registers.set_prefix(&[0; 5]).is_err());
    }
}
