//! Load side of the codec: `&[u8]` -> [`CompiledFunction`] tree.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::flags::FunctionFlags;
use crate::function::{CompiledFunction, Constant};
use crate::primitive::Reader;

const MARKER: u8 = 0xff;
const VERSION: u8 = 0x00;
const TAG_STRING: u8 = 0x00;
const TAG_NUMBER: u8 = 0x01;

/// Parses a byte sequence produced by [`crate::dump`] back into a
/// [`CompiledFunction`] tree.
///
/// Fails with [`Error::BadSignature`], [`Error::Truncated`], or
/// [`Error::UnknownConstantTag`] — collectively the format-error outcome
/// described in the base specification — on anything that isn't a
/// well-formed blob. This does not validate the bytecode instructions
/// themselves; that is explicitly out of scope (see the base
/// specification, §1).
pub fn load(bytes: &[u8]) -> Result<CompiledFunction> {
    if bytes.len() < 2 || bytes[0] != MARKER || bytes[1] != VERSION {
        return Err(Error::BadSignature);
    }
    let mut r = Reader::new(&bytes[2..]);
    load_function(&mut r)
}

/// Holds the leaf data of a function while it is being built, before the
/// final [`CompiledFunction`] value exists. This is the Rust analogue of
/// the base specification's "two-phase commit": nothing downstream can
/// observe a half-built function, because the struct literal at the end
/// of [`load_function`] is the only place one is ever constructed.
struct PendingFunction {
    n_regs: u16,
    n_args: u16,
    flags: FunctionFlags,
    start_line: u32,
    end_line: u32,
    instructions: Vec<u32>,
    constants: Vec<Constant>,
    inner_functions: Vec<Rc<CompiledFunction>>,
}

fn load_function(r: &mut Reader) -> Result<CompiledFunction> {
    let n_instr = r.read_u32()? as usize;
    let n_const = r.read_u32()? as usize;
    let n_funcs = r.read_u32()? as usize;
    let n_regs = r.read_u16()?;
    let n_args = r.read_u16()?;
    let start_line = r.read_u32()?;
    let end_line = r.read_u32()?;
    let flags = FunctionFlags::from_bits_truncate(r.read_u32()?);

    tracing::debug!(n_instr, n_const, n_funcs, "loading function");

    // Counts come straight off the wire and aren't validated yet, so
    // capacity is capped by what the remaining input could possibly hold.
    // Trusting them outright would let a short, crafted blob with a huge
    // count force a multi-gigabyte allocation before the first
    // bounds-checked read.
    let mut instructions = Vec::with_capacity(n_instr.min(r.remaining() / 4));
    for _ in 0..n_instr {
        instructions.push(r.read_u32()?);
    }

    let mut constants = Vec::with_capacity(n_const.min(r.remaining()));
    for _ in 0..n_const {
        let tag = r.read_u8()?;
        let constant = match tag {
            TAG_STRING => Constant::String(Rc::from(r.read_string()?)),
            TAG_NUMBER => Constant::Number(r.read_f64()?),
            other => return Err(Error::UnknownConstantTag(other)),
        };
        constants.push(constant);
    }

    let mut inner_functions = Vec::with_capacity(n_funcs.min(r.remaining() / 28));
    for _ in 0..n_funcs {
        inner_functions.push(Rc::new(load_function(r)?));
    }

    let pending = PendingFunction {
        n_regs,
        n_args,
        flags,
        start_line,
        end_line,
        instructions,
        constants,
        inner_functions,
    };

    load_properties(r, pending)
}

fn load_properties(r: &mut Reader, pending: PendingFunction) -> Result<CompiledFunction> {
    let length = r.read_u32()?;
    let name: Rc<str> = Rc::from(r.read_string()?);
    let file_name: Rc<str> = Rc::from(r.read_string()?);
    let pc2line = r.read_buffer()?;

    let mut var_map = Vec::new();
    loop {
        let name = r.read_string()?;
        if name.is_empty() {
            break;
        }
        let value = r.read_u32()?;
        var_map.push((Rc::from(name.as_str()), value));
    }

    let mut formals = Vec::new();
    loop {
        let name = r.read_string()?;
        if name.is_empty() {
            break;
        }
        formals.push(Rc::from(name.as_str()));
    }

    Ok(CompiledFunction {
        n_regs: pending.n_regs,
        n_args: pending.n_args,
        flags: pending.flags,
        start_line: pending.start_line,
        end_line: pending.end_line,
        instructions: pending.instructions,
        constants: pending.constants,
        inner_functions: pending.inner_functions,
        length,
        name,
        file_name,
        pc2line,
        var_map,
        formals,
    })
}
