/// # Program Counter
/// Address of the next instruction to fetch.
///
/// Every cycle ends with an unconditional `increment`, so anything that wants
/// execution to continue exactly at some address jumps one instruction short
/// of it (see `goto`).
pub struct ProgramCounter {
    value: u16,
    initial: u16,
    stride: u16,
}

impl ProgramCounter {
    pub fn new(initial: u16, stride: u16) -> Self {
        ProgramCounter {
            value: initial,
            initial,
            stride,
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn initial(&self) -> u16 {
        self.initial
    }

    /// Sets the counter directly
    pub fn jump(&mut self, address: u16) {
        self.value = address;
    }

    /// Lands on `address` once the end-of-cycle increment has happened
    pub fn goto(&mut self, address: u16) {
        self.jump(address.wrapping_sub(self.stride));
    }

    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(self.stride);
    }
}
