use crate::constants::PROGRAM_START;
use crate::error::{Error, Result};

/// Index of the flag register
pub const VF: u8 = 0xF;

/// # Registers
/// - (v) 16 8-bit registers V0..VF
///     - VF doubles as the carry, borrow and collision flag; instructions that set a flag
///       overwrite whatever a program stored there
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter, starting at `PROGRAM_START`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    v: [u8; 16],
    pub i: u16,
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
        }
    }

    pub fn get(&self, x: u8) -> Result<u8> {
        self.v
            .get(x as usize)
            .copied()
            .ok_or(Error::InvalidRegister(x))
    }

    pub fn set(&mut self, x: u8, value: u8) -> Result<()> {
        let register = self
            .v
            .get_mut(x as usize)
            .ok_or(Error::InvalidRegister(x))?;
        *register = value;
        Ok(())
    }

    /// VF
    pub fn flag(&self) -> u8 {
        self.v[VF as usize]
    }

    pub fn set_flag(&mut self, set: bool) {
        self.v[VF as usize] = set as u8;
    }

    /// V0..=Vx
    pub fn range(&self, x: u8) -> Result<&[u8]> {
        self.v
            .get(..=x as usize)
            .ok_or(Error::InvalidRegister(x))
    }

    /// All of V0..VF, for inspection.
    pub fn v(&self) -> &[u8; 16] {
        &self.v
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_program_start() {
        let registers = Registers::new();
        assert_eq!(registers.pc, 0x200);
        assert_eq!(registers.i, 0);
        assert_eq!(registers.v(), &[0; 16]);
    }

    #[test]
    fn test_get_set() {
        let mut registers = Registers::new();
        registers.set(0xA, 0x42).unwrap();
        assert_eq!(registers.get(0xA).unwrap(), 0x42);
    }

    #[test]
    fn test_out_of_range_register() {
        let mut registers = Registers::new();
        assert!(matches!(registers.get(0x10), Err(Error::InvalidRegister(0x10))));
        assert!(matches!(registers.set(0x10, 1), Err(Error::InvalidRegister(0x10))));
    }

    #[test]
    fn test_flag_is_vf() {
        let mut registers = Registers::new();
        registers.set_flag(true);
        assert_eq!(registers.get(0xF).unwrap(), 1);
        registers.set(0xF, 7).unwrap();
        assert_eq!(registers.flag(), 7);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut registers = Registers::new();
        registers.set(0x2, 9).unwrap();
        assert_eq!(registers.range(0x2).unwrap(), &[0, 0, 9]);
    }
}
