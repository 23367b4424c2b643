use crate::error::{Chip8Error, Result};

/// # Memory
/// Flat byte-addressable store.
///
/// Every access is bounds checked; reaching past the end is an
/// `OutOfBounds` error rather than a wrapped or undefined read.
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    pub fn new(size: usize) -> Self {
        Memory {
            bytes: vec![0; size],
        }
    }

    /// Memory of `size` bytes starting with `contents`; anything of
    /// `contents` past `size` is dropped.
    pub fn with_contents(size: usize, contents: &[u8]) -> Self {
        let mut bytes = vec![0; size];
        let len = contents.len().min(size);
        bytes[..len].copy_from_slice(&contents[..len]);
        Memory { bytes }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn load8(&self, address: usize) -> Result<u8> {
        self.check(address, 1)?;
        Ok(self.bytes[address])
    }

    /// Reads the big-endian word at `address..=address + 1`.
    pub fn load16(&self, address: usize) -> Result<u16> {
        self.check(address, 2)?;
        Ok(u16::from(self.bytes[address]) << 8 | u16::from(self.bytes[address + 1]))
    }

    pub fn store8(&mut self, address: usize, value: u8) -> Result<()> {
        self.check(address, 1)?;
        self.bytes[address] = value;
        Ok(())
    }

    /// Copies `values` into memory starting at `address`.
    /// Nothing is written unless the whole range fits.
    pub fn write(&mut self, address: usize, values: &[u8]) -> Result<()> {
        self.check(address, values.len())?;
        self.bytes[address..address + values.len()].copy_from_slice(values);
        Ok(())
    }

    /// Borrows `len` bytes starting at `address`.
    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8]> {
        self.check(address, len)?;
        Ok(&self.bytes[address..address + len])
    }

    /// Fails with the first address of `address..address + len` that is out of range.
    pub fn check(&self, address: usize, len: usize) -> Result<()> {
        let size = self.size();
        if address >= size && len > 0 {
            return Err(Chip8Error::OutOfBounds { address, size });
        }
        match address.checked_add(len) {
            Some(end) if end <= size => Ok(()),
            _ => Err(Chip8Error::OutOfBounds {
                address: size.max(address),
                size,
            }),
        }
    }
}
