pub use chip8::{Chip8, Step};
pub use config::{Config, Quirks, UnknownOpcodePolicy};
pub use constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH, TIMER_SPEED};
pub use display::FrameBuffer;
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use timers::TimerEvent;
pub use trace::{LogTracer, Tracer};

mod chip8;
pub mod config;
pub mod constants;
pub mod display;
mod error;
mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
pub mod registers;
pub mod stack;
pub mod state;
pub mod timers;
mod trace;
