use crate::display::DisplayBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack::CallStack;
use crate::timers::Timers;

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// - `registers` V0..VF, I and the program counter
/// - `stack` return addresses for subroutine calls
/// - `timers` the delay and sound timers
///
/// ## Memory
/// - `memory` 4096 bytes holding the glyph sheet and the program
/// - `display` the 64x32 screen, drawn to only by CLS and DRW
///
/// ## Input
/// - `keypad` the pressed status of keys 0..F
/// - execution halts until a key's value is written to `register_needing_key`
///
/// ## Signals to the outside world
/// - `draw_flag` the screen changed since the renderer last consumed it
/// - `halted` a fatal error occurred; nothing more will execute
#[derive(Copy, Clone)]
pub struct State {
    pub registers: Registers,
    pub stack: CallStack,
    pub timers: Timers,
    pub memory: Memory,
    pub display: DisplayBuffer,
    pub keypad: Keypad,
    pub draw_flag: bool,
    pub register_needing_key: Option<u8>,
    pub halted: bool,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            stack: CallStack::new(),
            timers: Timers::new(),
            memory: Memory::new(),
            display: DisplayBuffer::new(),
            keypad: Keypad::new(),
            draw_flag: false,
            register_needing_key: None,
            halted: false,
        }
    }

    /// Moves on to the next instruction.
    pub fn advance(&mut self) {
        self.registers.pc = self.registers.pc.wrapping_add(2);
    }

    /// Moves on to the next instruction, skipping over it if `condition` holds.
    pub fn skip_if(&mut self, condition: bool) {
        let delta = if condition { 4 } else { 2 };
        self.registers.pc = self.registers.pc.wrapping_add(delta);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
