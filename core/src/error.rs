use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading or running a program.
///
/// Only `UnknownOpcode` (under `UnknownOpcodePolicy::Skip`) and `InvalidKey` leave the
/// machine runnable; every other error raised by `Chip8::step` halts it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown opcode {opcode:#06X} at {pc:#05X}")]
    UnknownOpcode { opcode: u16, pc: u16 },

    #[error("call stack overflow at {pc:#05X}")]
    StackOverflow { pc: u16 },

    #[error("return with an empty call stack at {pc:#05X}")]
    StackUnderflow { pc: u16 },

    #[error("program is {size} bytes but at most {max} bytes fit in memory")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("register V{0:X} does not exist")]
    InvalidRegister(u8),

    #[error("key {0:#X} is not on the keypad")]
    InvalidKey(u8),

    #[error("machine is halted")]
    Halted,

    #[error("unable to read program: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the machine can keep running after this error
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::InvalidKey(_) | Error::ProgramTooLarge { .. } | Error::Io(_))
    }
}
