/// What `Chip8::step` does with an opcode it can't decode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnknownOpcodePolicy {
    /// Return `Error::UnknownOpcode` and halt the machine.
    Halt,
    /// Step over the opcode and carry on, reporting it as `Step::Skipped`.
    Skip,
}

impl Default for UnknownOpcodePolicy {
    fn default() -> Self {
        UnknownOpcodePolicy::Halt
    }
}

/// Alternate interpretations of instructions that differ between historical interpreters.
///
/// The defaults match the most widely used modern behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Quirks {
    /// SHR/SHL shift Vy into Vx (COSMAC VIP) instead of shifting Vx in place.
    pub shift_uses_vy: bool,
    /// LD [I], Vx and LD Vx, [I] leave I pointing past the last byte transferred.
    pub load_store_increments_i: bool,
}

/// # Config
/// Behavior switches for a machine, fixed when it is created.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub on_unknown_opcode: UnknownOpcodePolicy,
    pub quirks: Quirks,
    /// Seed for RND; entropy from the OS when unset.
    pub seed: Option<u64>,
}
