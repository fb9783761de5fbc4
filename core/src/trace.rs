use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use crate::instruction::Instruction;
use crate::opcode::Opcode;

/// Observes every instruction as it is executed.
///
/// `pc` is the address the opcode was fetched from, before execution moved it.
pub trait Tracer {
    fn trace(&mut self, pc: u16, opcode: Opcode, instruction: &Instruction);
}

/// Logs one line per instruction at trace level under the `dip_core::trace` target.
/// ```text
/// 0x200 6A02 LD VA, 0x02
/// ```
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&mut self, pc: u16, opcode: Opcode, instruction: &Instruction) {
        trace!("{:#05X} {} {}", pc, opcode, instruction);
    }
}

/// Lets a tracer be handed to a machine while the caller keeps a handle on it.
impl<T: Tracer> Tracer for Rc<RefCell<T>> {
    fn trace(&mut self, pc: u16, opcode: Opcode, instruction: &Instruction) {
        self.borrow_mut().trace(pc, opcode, instruction);
    }
}
