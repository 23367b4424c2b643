use rand::Rng;

use crate::chip8::Chip8;
use crate::constants::{FLAG_REGISTER, GLYPH_SIZE, SPRITE_WIDTH};
use crate::error::Result;
use crate::opcode::Opcode;

// Every handler runs before the end-of-cycle increment and checks everything
// it will touch before writing anything.

const VF: usize = FLAG_REGISTER as usize;

/// Legacy machine-code call; not executed
pub fn sys(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    log::warn!(
        "ignoring machine code call to {:#05X} at {:#06X}",
        op.nnn(),
        chip8.pc.value()
    );
    Ok(())
}

/// clear
pub fn clr(_op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    chip8.graphics.clear();
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let address = chip8.stack.pop()?;
    chip8.pc.jump(address);
    Ok(())
}

/// PC = NNN
pub fn jump(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    chip8.pc.goto(op.nnn());
    Ok(())
}

/// STACK.push(PC); PC = NNN
pub fn call(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    chip8.stack.push(chip8.pc.value())?;
    chip8.pc.goto(op.nnn());
    Ok(())
}

fn skip_if(chip8: &mut Chip8, condition: bool) {
    if condition {
        chip8.pc.increment();
    }
}

/// if Vx == NN then skip
pub fn ske(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let vx = chip8.v.get(op.x())?;
    skip_if(chip8, vx == op.nn());
    Ok(())
}

/// if Vx != NN then skip
pub fn skne(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let vx = chip8.v.get(op.x())?;
    skip_if(chip8, vx != op.nn());
    Ok(())
}

/// if Vx == Vy then skip
pub fn skre(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let (vx, vy) = (chip8.v.get(op.x())?, chip8.v.get(op.y())?);
    skip_if(chip8, vx == vy);
    Ok(())
}

/// if Vx != Vy then skip
pub fn skrne(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let (vx, vy) = (chip8.v.get(op.x())?, chip8.v.get(op.y())?);
    skip_if(chip8, vx != vy);
    Ok(())
}

/// Vx = NN
pub fn load(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    chip8.v.set(op.x(), u16::from(op.nn()))
}

/// Vx += NN; VF untouched
pub fn add(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let vx = chip8.v.get(op.x())?;
    chip8.v.set(op.x(), u16::from(vx) + u16::from(op.nn()))
}

/// Applies `f` to (Vx, Vy). The result is written to Vx and then the flag,
/// when there is one, to VF, so VF holds the flag even when it is Vx.
fn alu(op: &dyn Opcode, chip8: &mut Chip8, f: fn(u8, u8) -> (u16, Option<bool>)) -> Result<()> {
    let (vx, vy) = (chip8.v.get(op.x())?, chip8.v.get(op.y())?);
    let (result, flag) = f(vx, vy);
    chip8.v.set(op.x(), result)?;
    if let Some(flag) = flag {
        chip8.v.set(VF, u16::from(flag))?;
    }
    Ok(())
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |_, vy| (u16::from(vy), None))
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |vx, vy| (u16::from(vx | vy), None))
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |vx, vy| (u16::from(vx & vy), None))
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |vx, vy| (u16::from(vx ^ vy), None))
}

/// Vx += Vy; VF = carry
pub fn addr(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |vx, vy| {
        let sum = u16::from(vx) + u16::from(vy);
        (sum, Some(sum > 0xFF))
    })
}

/// Vx -= Vy; VF = !borrow
pub fn sub(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |vx, vy| {
        (u16::from(vx.wrapping_sub(vy)), Some(vx >= vy))
    })
}

/// Vx >>= 1; VF = old lsb
pub fn shr(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |vx, _| (u16::from(vx >> 1), Some(vx & 0x1 == 0x1)))
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |vx, vy| {
        (u16::from(vy.wrapping_sub(vx)), Some(vy >= vx))
    })
}

/// Vx <<= 1; VF = old msb
pub fn shl(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    alu(op, chip8, |vx, _| (u16::from(vx) << 1, Some(vx & 0x80 == 0x80)))
}

/// I = NNN
pub fn loadi(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    chip8.i = op.nnn();
    Ok(())
}

/// PC = V0 + NNN
pub fn jumpi(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let v0 = chip8.v.get(0x0)?;
    chip8.pc.goto(op.nnn() + u16::from(v0));
    Ok(())
}

/// Vx = random_byte & NN
pub fn rnd(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let byte: u8 = chip8.rng.gen();
    chip8.v.set(op.x(), u16::from(byte & op.nn()))
}

/// draw_sprite(x=Vx y=Vy height=N)
/// XORs the sprite stored at I..I+N onto the framebuffer at (Vx, Vy), wrapping
/// at the edges. VF = 1 if any lit pixel was erased.
pub fn draw(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let x = chip8.v.get(op.x())? as usize;
    let y = chip8.v.get(op.y())? as usize;
    let rows = chip8.memory.slice(chip8.i as usize, op.n() as usize)?.to_vec();

    let mut erased = false;
    for (row, bits) in rows.iter().enumerate() {
        for bit in 0..SPRITE_WIDTH {
            if bits & (0x80 >> bit) == 0 {
                continue;
            }
            if chip8.graphics.get(x + bit, y + row) == 1 {
                erased = true;
            }
            chip8.graphics.flip(x + bit, y + row);
        }
    }

    chip8.v.set(VF, u16::from(erased))
}

/// if key[Vx] is pressed then skip
pub fn skpr(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let key = chip8.v.get(op.x())?;
    let pressed = chip8.keys.get(key as usize)?;
    skip_if(chip8, pressed == 0x1);
    Ok(())
}

/// if key[Vx] is not pressed then skip
pub fn skup(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let key = chip8.v.get(op.x())?;
    let pressed = chip8.keys.get(key as usize)?;
    skip_if(chip8, pressed == 0x0);
    Ok(())
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let delay = chip8.delay_timer.value();
    chip8.v.set(op.x(), u16::from(delay))
}

/// await a keypress for Vx
pub fn keyd(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    chip8.v.get(op.x())?;
    log::debug!("awaiting a key press for V{:X}", op.x());
    chip8.register_needing_key = Some(op.x());
    Ok(())
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let vx = chip8.v.get(op.x())?;
    chip8.delay_timer.set_value(vx);
    Ok(())
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let vx = chip8.v.get(op.x())?;
    chip8.sound_timer.set_value(vx);
    Ok(())
}

/// I += Vx; VF = I + Vx reached the end of memory
pub fn addi(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let sum = u32::from(chip8.i) + u32::from(chip8.v.get(op.x())?);
    chip8.v.set(VF, u16::from(sum >= chip8.memory.size() as u32))?;
    chip8.i = (sum & 0xFFFF) as u16;
    Ok(())
}

/// I = Vx * 5
/// Points I at the sprite sheet glyph for the digit in Vx
pub fn ldspr(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let digit = chip8.v.get(op.x())?;
    chip8.i = u16::from(digit) * GLYPH_SIZE;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let vx = chip8.v.get(op.x())?;
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    chip8.memory.write(chip8.i as usize, &digits)
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let values = chip8.v.prefix(op.x() + 1)?.to_vec();
    chip8.memory.write(chip8.i as usize, &values)
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: &dyn Opcode, chip8: &mut Chip8) -> Result<()> {
    let values = chip8.memory.slice(chip8.i as usize, op.x() + 1)?.to_vec();
    chip8.v.set_prefix(&values)
}
