use crate::error::{Chip8Error, Result};

/// # Stack
/// Bounded LIFO of subroutine return addresses.
pub struct Stack {
    slots: Vec<u16>,
    sp: usize,
}

impl Stack {
    pub fn new(capacity: usize) -> Self {
        Stack {
            slots: vec![0; capacity],
            sp: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of addresses currently held
    pub fn pointer(&self) -> usize {
        self.sp
    }

    pub fn push(&mut self, value: u16) -> Result<()> {
        if self.sp == self.capacity() {
            return Err(Chip8Error::StackOverflow {
                capacity: self.capacity(),
            });
        }
        self.slots[self.sp] = value;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.sp -= 1;
        Ok(self.slots[self.sp])
    }
}

#[cfg(test)]
mod test_stack {
    use super::*;

    #[test]
    fn test_new_stack_is_sized_correctly() {
        let stack = Stack::new(10);
        assert_eq!(stack.capacity(), 10);
        assert_eq!(stack.pointer(), 0);
    }

    #[test]
    fn test_pops_in_reverse_order() {
        let mut stack = Stack::new(4);
        stack.push(0x202).unwrap();
        stack.push(0x404).unwrap();
        assert_eq!(stack.pop().unwrap(), 0x404);
        assert_eq!(stack.pop().unwrap(), 0x202);
        assert_eq!(stack.pointer(), 0);
    }

    #[test]
    fn test_overflow() {
        let mut stack = Stack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(matches!(
            stack.push(3),
            Err(Chip8Error::StackOverflow { capacity: 2 })
        ));
        assert_eq!(stack.pointer(), 2);
    }

    #[test]
    fn test_underflow() {
        let mut stack = Stack::new(2);
        assert!(matches!(stack.pop(), Err(Chip8Error::StackUnderflow)));
        assert_eq!(stack.pointer(), 0);
    }
}
