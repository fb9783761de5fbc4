use crate::constants::STACK_DEPTH;
use crate::error::{Error, Result};

/// # Call Stack
/// Return addresses for subroutine calls.
///
/// `sp` is the number of addresses held and so also the next free slot.
/// Pushing onto a full stack or popping an empty one is an error; the `pc` passed in is the
/// address of the offending instruction, for reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallStack {
    slots: [u16; STACK_DEPTH],
    sp: u8,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            slots: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    pub fn push(&mut self, addr: u16, pc: u16) -> Result<()> {
        let slot = self
            .slots
            .get_mut(self.sp as usize)
            .ok_or(Error::StackOverflow { pc })?;
        *slot = addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self, pc: u16) -> Result<u16> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow { pc });
        }
        self.sp -= 1;
        Ok(self.slots[self.sp as usize])
    }

    pub fn depth(&self) -> usize {
        self.sp as usize
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = CallStack::new();
        stack.push(0x202, 0x200).unwrap();
        stack.push(0x302, 0x300).unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop(0x400).unwrap(), 0x302);
        assert_eq!(stack.pop(0x304).unwrap(), 0x202);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_overflow() {
        let mut stack = CallStack::new();
        for n in 0..STACK_DEPTH as u16 {
            stack.push(n, n).unwrap();
        }
        assert!(matches!(
            stack.push(0xAAA, 0xBBB),
            Err(Error::StackOverflow { pc: 0xBBB })
        ));
        assert_eq!(stack.depth(), STACK_DEPTH);
    }

    #[test]
    fn test_underflow() {
        let mut stack = CallStack::new();
        assert!(matches!(
            stack.pop(0x200),
            Err(Error::StackUnderflow { pc: 0x200 })
        ));
        assert_eq!(stack.depth(), 0);
    }
}
