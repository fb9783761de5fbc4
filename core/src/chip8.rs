use std::io::Read;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, UnknownOpcodePolicy};
use crate::constants::{MAX_PROGRAM_SIZE, PROGRAM_START};
use crate::display::FrameBuffer;
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::state::State;
use crate::timers::TimerEvent;
use crate::trace::Tracer;

/// What a call to `Chip8::step` did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Executed(Instruction),
    /// Nothing ran; an `LD Vx, K` is waiting on `key_press`.
    AwaitingKey,
    /// An undecodable opcode was stepped over under `UnknownOpcodePolicy::Skip`.
    Skipped { opcode: u16, pc: u16 },
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the loaded `program` so that the machine can be reset
///  - an optional `tracer` that observes every executed instruction
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - stepping the CPU and ticking its timers, each on whatever schedule the driver likes
/// - inspecting its frame buffer for rendering and its sound timer for beeping
pub struct Chip8 {
    state: State,
    config: Config,
    program: Vec<u8>,
    rng: StdRng,
    tracer: Option<Box<dyn Tracer>>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Chip8 {
            state: State::new(),
            config,
            program: Vec::new(),
            rng,
            tracer: None,
        }
    }

    /// Copies a program image into memory at `PROGRAM_START`.
    ///
    /// The machine is returned to its power-on state first, so nothing from an earlier
    /// program survives. An image over `MAX_PROGRAM_SIZE` bytes is rejected before
    /// anything changes.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        let mut state = State::new();
        state.memory.load_program(program)?;
        self.state = state;
        self.program = program.to_vec();
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a reader positioned at the start of a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize> {
        let mut rom = Vec::with_capacity(MAX_PROGRAM_SIZE);
        reader.read_to_end(&mut rom)?;
        self.load_program(&rom)?;
        Ok(rom.len())
    }

    /// Returns the machine to its power-on state with the current program reloaded.
    pub fn reset(&mut self) -> Result<()> {
        self.state = State::new();
        self.state.memory.load(PROGRAM_START, &self.program)
    }

    pub fn set_tracer(&mut self, tracer: Box<dyn Tracer>) {
        self.tracer = Some(tracer);
    }

    /// Set the pressed status of key
    ///
    /// Also completes a pending `LD Vx, K`.
    ///
    /// # Arguments
    /// * `key` the index 0..F of the key that was pressed
    pub fn key_press(&mut self, key: u8) -> Result<()> {
        self.state.keypad.press(key)?;
        if let Some(register) = self.state.register_needing_key.take() {
            self.state.registers.set(register, key)?;
        }
        Ok(())
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index 0..F of the key that was released
    pub fn key_release(&mut self, key: u8) -> Result<()> {
        self.state.keypad.release(key)
    }

    /// Advances the CPU by a single instruction
    /// - does nothing while awaiting a keypress
    /// - fetches, decodes and executes the next opcode
    ///
    /// Any error other than a skipped unknown opcode halts the machine; every later call
    /// returns `Error::Halted`.
    pub fn step(&mut self) -> Result<Step> {
        if self.state.halted {
            return Err(Error::Halted);
        }
        if self.state.register_needing_key.is_some() {
            return Ok(Step::AwaitingKey);
        }

        let pc = self.state.registers.pc;
        let op = self.fetch();

        let instruction = match Instruction::decode(op) {
            Some(instruction) => instruction,
            None if self.config.on_unknown_opcode == UnknownOpcodePolicy::Skip => {
                self.state.advance();
                return Ok(Step::Skipped { opcode: op.0, pc });
            }
            None => return Err(self.halt(Error::UnknownOpcode { opcode: op.0, pc })),
        };

        if let Some(tracer) = self.tracer.as_mut() {
            tracer.trace(pc, op, &instruction);
        }

        match instruction.execute(&mut self.state, &self.config.quirks, &mut self.rng) {
            Ok(()) => Ok(Step::Executed(instruction)),
            Err(e) => Err(self.halt(e)),
        }
    }

    /// Decrements the delay and sound timers; the driver calls this at `TIMER_SPEED`.
    pub fn tick(&mut self) -> TimerEvent {
        self.state.timers.tick()
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn fetch(&self) -> Opcode {
        let pc = self.state.registers.pc;
        Opcode::from_bytes(
            self.state.memory.read_byte(pc),
            self.state.memory.read_byte(pc.wrapping_add(1)),
        )
    }

    fn halt(&mut self, error: Error) -> Error {
        warn!("halted at {:#05X}: {}", self.state.registers.pc, error);
        self.state.halted = true;
        error
    }

    /// Whether the screen changed since the renderer last consumed it
    pub fn draw_needed(&self) -> bool {
        self.state.draw_flag
    }

    /// Marks the current frame as drawn without copying it
    pub fn clear_draw_flag(&mut self) {
        self.state.draw_flag = false;
    }

    /// Returns the FrameBuffer if the display should be redrawn, clearing the draw flag
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.display.snapshot())
        } else {
            None
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        self.state.display.frame()
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.timers.sound
    }

    pub fn sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }

    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// Read-only access to the whole machine state
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
