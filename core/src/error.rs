use thiserror::Error;

/// Failures raised by the machine and its components.
///
/// None of these are retried internally; a failed `run_cycle` leaves the
/// machine as it was right before dispatch and the driver is expected to stop.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("unknown instruction {0:#06X} encountered")]
    BadInstruction(u16),

    #[error("ROM of {size} bytes exceeds the {max} bytes available")]
    RomTooLarge { size: usize, max: usize },

    #[error("address {address:#06X} is outside of {size} bytes of memory")]
    OutOfBounds { address: usize, size: usize },

    #[error("register {index:#04X} is outside of {count} registers")]
    RegisterOutOfRange { index: usize, count: usize },

    #[error("stack overflow: all {capacity} return addresses are in use")]
    StackOverflow { capacity: usize },

    #[error("stack underflow: returned with an empty call stack")]
    StackUnderflow,

    #[error("invalid machine configuration: {0}")]
    InvalidConfig(String),

    #[error("unable to read ROM")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
