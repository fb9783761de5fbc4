use rand::Rng;

use crate::config::Quirks;
use crate::constants::GLYPH_SIZE;
use crate::error::Result;
use crate::state::State;

/// PC = addr
/// Machine code routines aren't emulated, so this behaves as a jump.
pub fn sys(state: &mut State, addr: u16) -> Result<()> {
    state.registers.pc = addr;
    Ok(())
}

/// clear
pub fn clr(state: &mut State) -> Result<()> {
    state.display.clear();
    state.draw_flag = true;
    state.advance();
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<()> {
    state.registers.pc = state.stack.pop(state.registers.pc)?;
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) -> Result<()> {
    state.registers.pc = addr;
    Ok(())
}

/// STACK.push(PC + 2); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    let pc = state.registers.pc;
    state.stack.push(pc.wrapping_add(2), pc)?;
    state.registers.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    state.skip_if(vx == kk);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    state.skip_if(vx != kk);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    state.skip_if(vx == vy);
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    state.skip_if(vx != vy);
    Ok(())
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) -> Result<()> {
    state.registers.set(x, kk)?;
    state.advance();
    Ok(())
}

/// Vx += kk
/// Overflow wraps and VF is left alone
pub fn add(state: &mut State, x: u8, kk: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    state.registers.set(x, vx.wrapping_add(kk))?;
    state.advance();
    Ok(())
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) -> Result<()> {
    binary(state, x, y, |_, vy| vy)
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) -> Result<()> {
    binary(state, x, y, |vx, vy| vx | vy)
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) -> Result<()> {
    binary(state, x, y, |vx, vy| vx & vy)
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) -> Result<()> {
    binary(state, x, y, |vx, vy| vx ^ vy)
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    let (res, over) = vx.overflowing_add(vy);
    flagged(state, x, res, over)
}

/// Vx -= Vy; VF = !underflow
/// Equal operands don't borrow, so VF is 1 when Vx >= Vy
pub fn sub(state: &mut State, x: u8, y: u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    let (res, under) = vx.overflowing_sub(vy);
    flagged(state, x, res, !under)
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    let (res, under) = vy.overflowing_sub(vx);
    flagged(state, x, res, !under)
}

/// Vx >>= 1; VF = shifted out bit
pub fn shr(state: &mut State, x: u8, y: u8, quirks: &Quirks) -> Result<()> {
    let src = state.registers.get(if quirks.shift_uses_vy { y } else { x })?;
    flagged(state, x, src >> 1, src & 0x1 == 1)
}

/// Vx <<= 1; VF = shifted out bit
pub fn shl(state: &mut State, x: u8, y: u8, quirks: &Quirks) -> Result<()> {
    let src = state.registers.get(if quirks.shift_uses_vy { y } else { x })?;
    flagged(state, x, src << 1, src & 0x80 != 0)
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) -> Result<()> {
    state.registers.i = addr;
    state.advance();
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) -> Result<()> {
    state.registers.pc = u16::from(state.registers.get(0x0)?) + addr;
    Ok(())
}

/// Vx = rand_byte & kk
/// The random byte is drawn from 0..=254
pub fn rand(state: &mut State, x: u8, kk: u8, rng: &mut impl Rng) -> Result<()> {
    let rand_byte: u8 = rng.gen_range(0..=254);
    state.registers.set(x, rand_byte & kk)?;
    state.advance();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position (Vx, Vy) on the display with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    let sprite = state.memory.read_wrapping(state.registers.i, n as usize);
    let collision = state.display.blit(vx as usize, vy as usize, &sprite);
    state.registers.set_flag(collision);
    state.draw_flag = true;
    state.advance();
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: u8) -> Result<()> {
    let key = state.registers.get(x)?;
    state.skip_if(state.keypad.is_pressed(key));
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: u8) -> Result<()> {
    let key = state.registers.get(x)?;
    state.skip_if(!state.keypad.is_pressed(key));
    Ok(())
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) -> Result<()> {
    state.registers.set(x, state.timers.delay)?;
    state.advance();
    Ok(())
}

/// await keypress for Vx
pub fn keyd(state: &mut State, x: u8) -> Result<()> {
    state.registers.get(x)?;
    state.register_needing_key = Some(x);
    state.advance();
    Ok(())
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) -> Result<()> {
    state.timers.delay = state.registers.get(x)?;
    state.advance();
    Ok(())
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) -> Result<()> {
    state.timers.sound = state.registers.get(x)?;
    state.advance();
    Ok(())
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    state.registers.i = state.registers.i.wrapping_add(u16::from(vx));
    state.advance();
    Ok(())
}

/// I = Vx * 5
/// Set I to the memory address of the glyph for the digit in Vx
/// Values above F point past the glyph sheet; they aren't masked
/// See constants::GLYPH_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    state.registers.i = u16::from(vx) * GLYPH_SIZE;
    state.advance();
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address I
pub fn bcd(state: &mut State, x: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    let i = state.registers.i;
    for (offset, digit) in [vx / 100, vx / 10 % 10, vx % 10].iter().enumerate() {
        state.memory.write_byte(i.wrapping_add(offset as u16), *digit);
    }
    state.advance();
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8, quirks: &Quirks) -> Result<()> {
    let i = state.registers.i;
    let values = state.registers.range(x)?.to_vec();
    for (offset, value) in values.into_iter().enumerate() {
        state.memory.write_byte(i.wrapping_add(offset as u16), value);
    }
    finish_block(state, x, quirks);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8, quirks: &Quirks) -> Result<()> {
    let i = state.registers.i;
    for r in 0..=x {
        let value = state.memory.read_byte(i.wrapping_add(u16::from(r)));
        state.registers.set(r, value)?;
    }
    finish_block(state, x, quirks);
    Ok(())
}

/// Vx = f(Vx, Vy)
fn binary(state: &mut State, x: u8, y: u8, f: impl Fn(u8, u8) -> u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    state.registers.set(x, f(vx, vy))?;
    state.advance();
    Ok(())
}

/// VF = flag; Vx = res
/// The flag is written first so that a result destined for VF wins
fn flagged(state: &mut State, x: u8, res: u8, flag: bool) -> Result<()> {
    state.registers.set_flag(flag);
    state.registers.set(x, res)?;
    state.advance();
    Ok(())
}

fn finish_block(state: &mut State, x: u8, quirks: &Quirks) {
    if quirks.load_store_increments_i {
        state.registers.i = state.registers.i.wrapping_add(u16::from(x) + 1);
    }
    state.advance();
}
