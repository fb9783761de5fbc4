use crate::error::{Error, Result};

/// # Keypad
/// Pressed status of the 16 hexadecimal keys 0..F.
///
/// Written by whatever handles input, read by the skip-on-key instructions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; 16],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    pub fn press(&mut self, key: u8) -> Result<()> {
        *self.slot(key)? = true;
        Ok(())
    }

    pub fn release(&mut self, key: u8) -> Result<()> {
        *self.slot(key)? = false;
        Ok(())
    }

    /// Only the low nibble of `key` is considered, as with a register holding a key index.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }

    fn slot(&mut self, key: u8) -> Result<&mut bool> {
        self.keys.get_mut(key as usize).ok_or(Error::InvalidKey(key))
    }
}
