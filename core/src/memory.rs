use crate::constants::{GLYPH_SHEET, MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat, byte-addressed RAM.
///
/// ```text
/// 0x000..0x050  glyph sheet
/// 0x050..0x200  unused (historically the interpreter itself)
/// 0x200..0x1000 program
/// ```
///
/// Any address handed to `read_byte`/`write_byte` is wrapped into the address space, since
/// programs derive addresses from `I + offset` arithmetic that can run past the end.
#[derive(Copy, Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the glyph sheet in place.
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..GLYPH_SHEET.len()].copy_from_slice(&GLYPH_SHEET);
        Memory { bytes }
    }

    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bytes[wrap(addr)]
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bytes[wrap(addr)] = value;
    }

    /// Reads `len` consecutive bytes starting at `addr`, wrapping at the end of memory.
    pub fn read_wrapping(&self, addr: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.bytes[(wrap(addr) + offset) % MEMORY_SIZE])
            .collect()
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// Fails without touching memory if `data` would run past the last address.
    pub fn load(&mut self, offset: u16, data: &[u8]) -> Result<()> {
        let start = offset as usize;
        let max = MEMORY_SIZE.saturating_sub(start);
        if start > MEMORY_SIZE || data.len() > max {
            return Err(Error::ProgramTooLarge {
                size: data.len(),
                max,
            });
        }
        self.bytes[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Copies a program image to `PROGRAM_START`.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        self.load(PROGRAM_START, program)
    }

    /// A read-only view of all of memory
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(addr: u16) -> usize {
    addr as usize % MEMORY_SIZE
}
