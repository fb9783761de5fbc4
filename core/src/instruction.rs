use std::fmt;

use rand::Rng;

use crate::config::Quirks;
use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A decoded Chip-8 instruction with its operands.
///
/// `x` and `y` are register indices, `kk` an immediate byte, `n` a sprite height and `addr` a
/// 12-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `0nnn` SYS addr
    Sys(u16),
    /// `00E0` CLS
    Clear,
    /// `00EE` RET
    Return,
    /// `1nnn` JP addr
    Jump(u16),
    /// `2nnn` CALL addr
    Call(u16),
    /// `3xkk` SE Vx, byte
    SkipEqByte { x: u8, kk: u8 },
    /// `4xkk` SNE Vx, byte
    SkipNeByte { x: u8, kk: u8 },
    /// `5xy0` SE Vx, Vy
    SkipEqReg { x: u8, y: u8 },
    /// `6xkk` LD Vx, byte
    LoadByte { x: u8, kk: u8 },
    /// `7xkk` ADD Vx, byte
    AddByte { x: u8, kk: u8 },
    /// `8xy0` LD Vx, Vy
    Move { x: u8, y: u8 },
    /// `8xy1` OR Vx, Vy
    Or { x: u8, y: u8 },
    /// `8xy2` AND Vx, Vy
    And { x: u8, y: u8 },
    /// `8xy3` XOR Vx, Vy
    Xor { x: u8, y: u8 },
    /// `8xy4` ADD Vx, Vy
    AddReg { x: u8, y: u8 },
    /// `8xy5` SUB Vx, Vy
    Sub { x: u8, y: u8 },
    /// `8xy6` SHR Vx {, Vy}
    ShiftRight { x: u8, y: u8 },
    /// `8xy7` SUBN Vx, Vy
    SubN { x: u8, y: u8 },
    /// `8xyE` SHL Vx {, Vy}
    ShiftLeft { x: u8, y: u8 },
    /// `9xy0` SNE Vx, Vy
    SkipNeReg { x: u8, y: u8 },
    /// `Annn` LD I, addr
    LoadI(u16),
    /// `Bnnn` JP V0, addr
    JumpV0(u16),
    /// `Cxkk` RND Vx, byte
    Random { x: u8, kk: u8 },
    /// `Dxyn` DRW Vx, Vy, nibble
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E` SKP Vx
    SkipPressed { x: u8 },
    /// `ExA1` SKNP Vx
    SkipNotPressed { x: u8 },
    /// `Fx07` LD Vx, DT
    LoadDelay { x: u8 },
    /// `Fx0A` LD Vx, K
    WaitKey { x: u8 },
    /// `Fx15` LD DT, Vx
    SetDelay { x: u8 },
    /// `Fx18` LD ST, Vx
    SetSound { x: u8 },
    /// `Fx1E` ADD I, Vx
    AddI { x: u8 },
    /// `Fx29` LD F, Vx
    LoadGlyph { x: u8 },
    /// `Fx33` LD B, Vx
    Bcd { x: u8 },
    /// `Fx55` LD [I], Vx
    Store { x: u8 },
    /// `Fx65` LD Vx, [I]
    Read { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a given Opcode, or None if there isn't one.
    ///
    /// The `0` group is matched on its full low byte before falling back to SYS.
    pub fn decode(op: Opcode) -> Option<Instruction> {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x0, ..) => Sys(addr),
            (0x1, ..) => Jump(addr),
            (0x2, ..) => Call(addr),
            (0x3, ..) => SkipEqByte { x, kk },
            (0x4, ..) => SkipNeByte { x, kk },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => LoadByte { x, kk },
            (0x7, ..) => AddByte { x, kk },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x, y },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x, y },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadI(addr),
            (0xB, ..) => JumpV0(addr),
            (0xC, ..) => Random { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, .., 0x9, 0xE) => SkipPressed { x },
            (0xE, .., 0xA, 0x1) => SkipNotPressed { x },
            (0xF, .., 0x0, 0x7) => LoadDelay { x },
            (0xF, .., 0x0, 0xA) => WaitKey { x },
            (0xF, .., 0x1, 0x5) => SetDelay { x },
            (0xF, .., 0x1, 0x8) => SetSound { x },
            (0xF, .., 0x1, 0xE) => AddI { x },
            (0xF, .., 0x2, 0x9) => LoadGlyph { x },
            (0xF, .., 0x3, 0x3) => Bcd { x },
            (0xF, .., 0x5, 0x5) => Store { x },
            (0xF, .., 0x6, 0x5) => Read { x },
            _ => return None,
        };
        Some(instruction)
    }

    /// Applies the instruction to `state`, including moving the program counter.
    pub fn execute(&self, state: &mut State, quirks: &Quirks, rng: &mut impl Rng) -> Result<()> {
        use Instruction::*;

        match *self {
            Sys(addr) => sys(state, addr),
            Clear => clr(state),
            Return => rts(state),
            Jump(addr) => jump(state, addr),
            Call(addr) => call(state, addr),
            SkipEqByte { x, kk } => ske(state, x, kk),
            SkipNeByte { x, kk } => skne(state, x, kk),
            SkipEqReg { x, y } => skre(state, x, y),
            LoadByte { x, kk } => load(state, x, kk),
            AddByte { x, kk } => add(state, x, kk),
            Move { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y),
            And { x, y } => and(state, x, y),
            Xor { x, y } => xor(state, x, y),
            AddReg { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            ShiftRight { x, y } => shr(state, x, y, quirks),
            SubN { x, y } => subn(state, x, y),
            ShiftLeft { x, y } => shl(state, x, y, quirks),
            SkipNeReg { x, y } => skrne(state, x, y),
            LoadI(addr) => loadi(state, addr),
            JumpV0(addr) => jumpi(state, addr),
            Random { x, kk } => rand(state, x, kk, rng),
            Draw { x, y, n } => draw(state, x, y, n),
            SkipPressed { x } => skpr(state, x),
            SkipNotPressed { x } => skup(state, x),
            LoadDelay { x } => moved(state, x),
            WaitKey { x } => keyd(state, x),
            SetDelay { x } => loads(state, x),
            SetSound { x } => ld(state, x),
            AddI { x } => addi(state, x),
            LoadGlyph { x } => ldspr(state, x),
            Bcd { x } => bcd(state, x),
            Store { x } => stor(state, x, quirks),
            Read { x } => read(state, x, quirks),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;

        match *self {
            Sys(addr) => write!(f, "SYS {:#05X}", addr),
            Clear => write!(f, "CLS"),
            Return => write!(f, "RET"),
            Jump(addr) => write!(f, "JP {:#05X}", addr),
            Call(addr) => write!(f, "CALL {:#05X}", addr),
            SkipEqByte { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            SkipNeByte { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            SkipEqReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            LoadByte { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            AddByte { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x, y } => write!(f, "SHR V{:X}, V{:X}", x, y),
            SubN { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x, y } => write!(f, "SHL V{:X}, V{:X}", x, y),
            SkipNeReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadI(addr) => write!(f, "LD I, {:#05X}", addr),
            JumpV0(addr) => write!(f, "JP V0, {:#05X}", addr),
            Random { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipPressed { x } => write!(f, "SKP V{:X}", x),
            SkipNotPressed { x } => write!(f, "SKNP V{:X}", x),
            LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            WaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddI { x } => write!(f, "ADD I, V{:X}", x),
            LoadGlyph { x } => write!(f, "LD F, V{:X}", x),
            Bcd { x } => write!(f, "LD B, V{:X}", x),
            Store { x } => write!(f, "LD [I], V{:X}", x),
            Read { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}

#[cfg(test)]
mod test_instruction {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;

    fn exec(op: u16, state: &mut State) -> Result<()> {
        exec_with(op, state, &Quirks::default())
    }

    fn exec_with(op: u16, state: &mut State, quirks: &Quirks) -> Result<()> {
        let instruction = Instruction::decode(Opcode(op)).expect("opcode should decode");
        instruction.execute(state, quirks, &mut StdRng::seed_from_u64(0))
    }

    fn v(state: &State, x: u8) -> u8 {
        state.registers.get(x).unwrap()
    }

    #[test]
    fn test_decode_priority_in_0_group() {
        assert_eq!(Instruction::decode(Opcode(0x00E0)), Some(Instruction::Clear));
        assert_eq!(Instruction::decode(Opcode(0x00EE)), Some(Instruction::Return));
        assert_eq!(Instruction::decode(Opcode(0x0123)), Some(Instruction::Sys(0x123)));
    }

    #[test]
    fn test_decode_unknown() {
        for op in [0x5121, 0x812F, 0x9121, 0xE1FF, 0xF1FF, 0xF100].iter() {
            assert_eq!(Instruction::decode(Opcode(*op)), None, "{:04X}", op);
        }
    }

    #[test]
    fn test_display_mnemonics() {
        let text = |op| Instruction::decode(Opcode(op)).unwrap().to_string();
        assert_eq!(text(0x00E0), "CLS");
        assert_eq!(text(0x6A02), "LD VA, 0x02");
        assert_eq!(text(0xA2F0), "LD I, 0x2F0");
        assert_eq!(text(0xD125), "DRW V1, V2, 5");
        assert_eq!(text(0xF355), "LD [I], V3");
    }

    #[test]
    fn test_0nnn_sys() {
        let mut state = State::new();
        exec(0x0ABC, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0ABC);
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = State::new();
        state.display.blit(0, 0, &[0x80]);
        exec(0x00E0, &mut state).unwrap();
        assert_eq!(state.display.pixel(0, 0), 0);
        assert!(state.draw_flag);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = State::new();
        state.stack.push(0xABC, 0x200).unwrap();
        exec(0x00EE, &mut state).unwrap();
        assert_eq!(state.stack.depth(), 0);
        assert_eq!(state.registers.pc, 0xABC);
    }

    #[test]
    fn test_00ee_ret_underflows() {
        let mut state = State::new();
        assert!(matches!(
            exec(0x00EE, &mut state),
            Err(Error::StackUnderflow { pc: 0x200 })
        ));
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = State::new();
        exec(0x1ABC, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut state = State::new();
        state.registers.pc = 0x0ABC;
        exec(0x2123, &mut state).unwrap();
        assert_eq!(state.stack.depth(), 1);
        assert_eq!(state.stack.pop(0).unwrap(), 0x0ABE);
        assert_eq!(state.registers.pc, 0x0123);
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut state = State::new();
        state.registers.set(0x1, 0x11).unwrap();
        exec(0x3111, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut state = State::new();
        exec(0x3111, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut state = State::new();
        exec(0x4111, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut state = State::new();
        state.registers.set(0x1, 0x11).unwrap();
        exec(0x4111, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut state = State::new();
        state.registers.set(0x1, 0x11).unwrap();
        state.registers.set(0x2, 0x11).unwrap();
        exec(0x5120, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = State::new();
        state.registers.set(0x1, 0x11).unwrap();
        exec(0x5120, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_6xkk_ld() {
        let mut state = State::new();
        exec(0x6122, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x22);
    }

    #[test]
    fn test_7xkk_add_wraps_without_flag() {
        let mut state = State::new();
        state.registers.set(0x1, 0xFF).unwrap();
        state.registers.set(0xF, 0x7).unwrap();
        exec(0x7102, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x01);
        assert_eq!(state.registers.flag(), 0x7);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = State::new();
        state.registers.set(0x2, 0x1).unwrap();
        exec(0x8120, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut state = State::new();
        state.registers.set(0x1, 0x6).unwrap();
        state.registers.set(0x2, 0x3).unwrap();
        exec(0x8121, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut state = State::new();
        state.registers.set(0x1, 0x6).unwrap();
        state.registers.set(0x2, 0x3).unwrap();
        exec(0x8122, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut state = State::new();
        state.registers.set(0x1, 0x6).unwrap();
        state.registers.set(0x2, 0x3).unwrap();
        exec(0x8123, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = State::new();
        state.registers.set(0x1, 0xEE).unwrap();
        state.registers.set(0x2, 0x11).unwrap();
        exec(0x8124, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xFF);
        assert_eq!(state.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = State::new();
        state.registers.set(0x1, 0xFF).unwrap();
        state.registers.set(0x2, 0x11).unwrap();
        exec(0x8124, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x10);
        assert_eq!(state.registers.flag(), 0x1);
    }

    #[test]
    fn test_8fy4_add_result_overwrites_flag() {
        let mut state = State::new();
        state.registers.set(0xF, 0xFF).unwrap();
        state.registers.set(0x2, 0x02).unwrap();
        exec(0x8F24, &mut state).unwrap();
        assert_eq!(state.registers.flag(), 0x01);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = State::new();
        state.registers.set(0x1, 0x33).unwrap();
        state.registers.set(0x2, 0x11).unwrap();
        exec(0x8125, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x22);
        assert_eq!(state.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = State::new();
        state.registers.set(0x1, 0x11).unwrap();
        state.registers.set(0x2, 0x12).unwrap();
        exec(0x8125, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xFF);
        assert_eq!(state.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xy5_sub_equal_operands_set_flag() {
        let mut state = State::new();
        state.registers.set(0x1, 5).unwrap();
        state.registers.set(0x2, 5).unwrap();
        exec(0x8125, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0);
        assert_eq!(state.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = State::new();
        state.registers.set(0x1, 0x5).unwrap();
        exec(0x8106, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x2);
        assert_eq!(state.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = State::new();
        state.registers.set(0x1, 0x4).unwrap();
        exec(0x8106, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x2);
        assert_eq!(state.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xy6_shr_from_vy_quirk() {
        let mut state = State::new();
        state.registers.set(0x1, 0xFF).unwrap();
        state.registers.set(0x2, 0x8).unwrap();
        let quirks = Quirks {
            shift_uses_vy: true,
            ..Quirks::default()
        };
        exec_with(0x8126, &mut state, &quirks).unwrap();
        assert_eq!(v(&state, 0x1), 0x4);
        assert_eq!(state.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = State::new();
        state.registers.set(0x1, 0x11).unwrap();
        state.registers.set(0x2, 0x33).unwrap();
        exec(0x8127, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x22);
        assert_eq!(state.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = State::new();
        state.registers.set(0x1, 0x12).unwrap();
        state.registers.set(0x2, 0x11).unwrap();
        exec(0x8127, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xFF);
        assert_eq!(state.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = State::new();
        state.registers.set(0x1, 0xFF).unwrap();
        exec(0x810E, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xFE);
        assert_eq!(state.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = State::new();
        state.registers.set(0x1, 0x4).unwrap();
        exec(0x810E, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x8);
        assert_eq!(state.registers.flag(), 0x0);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut state = State::new();
        state.registers.set(0x1, 0x11).unwrap();
        exec(0x9120, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = State::new();
        state.registers.set(0x1, 0x11).unwrap();
        state.registers.set(0x2, 0x11).unwrap();
        exec(0x9120, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = State::new();
        exec(0xAABC, &mut state).unwrap();
        assert_eq!(state.registers.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = State::new();
        state.registers.set(0x0, 0x2).unwrap();
        exec(0xBABC, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0xABE);
    }

    #[test]
    fn test_cxkk_rnd_masks() {
        let mut state = State::new();
        exec(0xC10F, &mut state).unwrap();
        assert_eq!(v(&state, 0x1) & 0xF0, 0);
        exec(0xC200, &mut state).unwrap();
        assert_eq!(v(&state, 0x2), 0);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = State::new();
        state.registers.set(0x0, 0x1).unwrap();
        // Draw the 0x0 glyph with a 1x 1y offset
        exec(0xD005, &mut state).unwrap();
        let frame = state.display.snapshot();
        assert_eq!(frame[1][1..5], [1, 1, 1, 1]);
        assert_eq!(frame[2][1..5], [1, 0, 0, 1]);
        assert_eq!(frame[3][1..5], [1, 0, 0, 1]);
        assert_eq!(frame[4][1..5], [1, 0, 0, 1]);
        assert_eq!(frame[5][1..5], [1, 1, 1, 1]);
        assert_eq!(state.registers.flag(), 0x0);
        assert!(state.draw_flag);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = State::new();
        state.display.blit(0, 0, &[0x80]);
        exec(0xD001, &mut state).unwrap();
        assert_eq!(state.registers.flag(), 0x1)
    }

    #[test]
    fn test_dxyn_drw_wraps_and_collides_on_redraw() {
        let mut state = State::new();
        state.registers.i = 0x300;
        state.memory.write_byte(0x300, 0xFF);
        state.registers.set(0x1, 60).unwrap();
        exec(0xD121, &mut state).unwrap();
        assert_eq!(state.registers.flag(), 0x0);
        assert_eq!(state.display.frame()[1][0..4], [1, 1, 1, 1]);
        exec(0xD121, &mut state).unwrap();
        assert_eq!(state.registers.flag(), 0x1);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = State::new();
        state.keypad.press(0xE).unwrap();
        state.registers.set(0x1, 0xE).unwrap();
        exec(0xE19E, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = State::new();
        exec(0xE19E, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = State::new();
        exec(0xE1A1, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = State::new();
        state.keypad.press(0xE).unwrap();
        state.registers.set(0x1, 0xE).unwrap();
        exec(0xE1A1, &mut state).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = State::new();
        state.timers.delay = 0xF;
        exec(0xF107, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xF);
    }

    #[test]
    fn test_fx0a_ld_setsregisterneedingkey() {
        let mut state = State::new();
        exec(0xF10A, &mut state).unwrap();
        assert_eq!(state.register_needing_key, Some(0x1));
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = State::new();
        state.registers.set(0x1, 0xF).unwrap();
        exec(0xF115, &mut state).unwrap();
        assert_eq!(state.timers.delay, 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = State::new();
        state.registers.set(0x1, 0xF).unwrap();
        exec(0xF118, &mut state).unwrap();
        assert_eq!(state.timers.sound, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = State::new();
        state.registers.i = 0x1;
        state.registers.set(0x1, 0x1).unwrap();
        exec(0xF11E, &mut state).unwrap();
        assert_eq!(state.registers.i, 0x2);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = State::new();
        state.registers.set(0x1, 0x2).unwrap();
        exec(0xF129, &mut state).unwrap();
        assert_eq!(state.registers.i, 0xA);
    }

    #[test]
    fn test_fx29_ld_value_above_f_is_not_masked() {
        let mut state = State::new();
        state.registers.set(0x1, 0x1A).unwrap();
        exec(0xF129, &mut state).unwrap();
        assert_eq!(state.registers.i, 0x1A * 5);
        assert_eq!(state.registers.pc, 0x202);
    }

    #[test]
    fn test_fx33_ld() {
        let mut state = State::new();
        state.registers.set(0x1, 234).unwrap();
        state.registers.i = 0x300;
        exec(0xF133, &mut state).unwrap();
        assert_eq!(state.memory.as_slice()[0x300..0x303], [2, 3, 4]);
    }

    #[test]
    fn test_fx55_ld() {
        let mut state = State::new();
        state.registers.i = 0x300;
        for (r, value) in [0x1, 0x2, 0x3, 0x4, 0x5].iter().enumerate() {
            state.registers.set(r as u8, *value).unwrap();
        }
        exec(0xF455, &mut state).unwrap();
        assert_eq!(state.memory.as_slice()[0x300..0x306], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(state.registers.i, 0x300);
    }

    #[test]
    fn test_fx55_ld_increments_i_quirk() {
        let mut state = State::new();
        state.registers.i = 0x300;
        let quirks = Quirks {
            load_store_increments_i: true,
            ..Quirks::default()
        };
        exec_with(0xF455, &mut state, &quirks).unwrap();
        assert_eq!(state.registers.i, 0x305);
    }

    #[test]
    fn test_fx65_ld() {
        let mut state = State::new();
        state.registers.i = 0x300;
        state.memory.load(0x300, &[0x1, 0x2, 0x3, 0x4, 0x5]).unwrap();
        exec(0xF465, &mut state).unwrap();
        assert_eq!(state.registers.v()[0x0..0x5], [0x1, 0x2, 0x3, 0x4, 0x5]);
    }
}
