//! Dump side of the codec: [`CompiledFunction`] tree -> `Vec<u8>`.

use crate::config::WriterConfig;
use crate::function::{CompiledFunction, Constant};
use crate::primitive::{self, string_size};
use crate::writer::BufferWriter;

const MARKER: u8 = 0xff;
const VERSION: u8 = 0x00;
const TAG_STRING: u8 = 0x00;
const TAG_NUMBER: u8 = 0x01;

/// Serialises `func` into a self-contained byte sequence, recursively
/// embedding its inner functions, using the default [`WriterConfig`].
pub fn dump(func: &CompiledFunction) -> Vec<u8> {
    dump_with_config(func, WriterConfig::default())
}

/// Serialises `func` with an explicit initial-capacity/slack policy for
/// the underlying [`BufferWriter`].
pub fn dump_with_config(func: &CompiledFunction, config: WriterConfig) -> Vec<u8> {
    let mut w = BufferWriter::new(config.initial_capacity, config.slack);
    w.ensure(2);
    w.write_u8(MARKER);
    w.write_u8(VERSION);
    dump_function(&mut w, func);
    w.finish()
}

fn dump_function(w: &mut BufferWriter, func: &CompiledFunction) {
    tracing::debug!(
        n_instr = func.instructions.len(),
        n_const = func.constants.len(),
        n_funcs = func.inner_functions.len(),
        "dumping function",
    );

    w.ensure(3 * 4 + 2 * 2 + 2 * 4);
    primitive::write_u32(w, func.instructions.len() as u32);
    primitive::write_u32(w, func.constants.len() as u32);
    primitive::write_u32(w, func.inner_functions.len() as u32);
    primitive::write_u16(w, func.n_regs);
    primitive::write_u16(w, func.n_args);
    primitive::write_u32(w, func.start_line);
    primitive::write_u32(w, func.end_line);

    w.ensure(4);
    primitive::write_u32(w, func.flags.bits());

    w.ensure(func.instructions.len() * 4);
    for &instr in &func.instructions {
        primitive::write_u32(w, instr);
    }

    for constant in &func.constants {
        match constant {
            Constant::String(s) => {
                w.ensure(1 + string_size(s));
                w.write_u8(TAG_STRING);
                primitive::write_string(w, s);
            }
            Constant::Number(n) => {
                w.ensure(1 + 8);
                w.write_u8(TAG_NUMBER);
                primitive::write_f64(w, *n);
            }
        }
    }

    for inner in &func.inner_functions {
        dump_function(w, inner);
    }

    dump_properties(w, func);

    tracing::debug!(bytes = w.offset(), "serialized function");
}

fn dump_properties(w: &mut BufferWriter, func: &CompiledFunction) {
    w.ensure(4);
    primitive::write_u32(w, func.length);

    w.ensure(string_size(&func.name));
    primitive::write_string(w, &func.name);

    w.ensure(string_size(&func.file_name));
    primitive::write_string(w, &func.file_name);

    w.ensure(primitive::buffer_size(func.pc2line.as_deref()));
    primitive::write_buffer(w, func.pc2line.as_deref());

    for (name, value) in &func.var_map {
        w.ensure(string_size(name) + 4);
        primitive::write_string(w, name);
        primitive::write_u32(w, *value);
    }
    w.ensure(string_size(""));
    primitive::write_string(w, "");

    for name in &func.formals {
        w.ensure(string_size(name));
        primitive::write_string(w, name);
    }
    w.ensure(string_size(""));
    primitive::write_string(w, "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_function_matches_the_documented_blob_layout() {
        let f = CompiledFunction::empty("f", 0);
        let blob = dump(&f);

        // FF 00, header all-zero counts, n_regs=0, n_args=0, start/end=0,
        // flags=0, no instr/const/funcs, length=0, name="f", empty
        // fileName, empty pc2line, empty var-map + formals terminators.
        let mut expected = vec![0xFF, 0x00];
        expected.extend_from_slice(&[0, 0, 0, 0]); // n_instr
        expected.extend_from_slice(&[0, 0, 0, 0]); // n_const
        expected.extend_from_slice(&[0, 0, 0, 0]); // n_funcs
        expected.extend_from_slice(&[0, 0]); // n_regs
        expected.extend_from_slice(&[0, 0]); // n_args
        expected.extend_from_slice(&[0, 0, 0, 0]); // start_line
        expected.extend_from_slice(&[0, 0, 0, 0]); // end_line
        expected.extend_from_slice(&[0, 0, 0, 0]); // flags
        expected.extend_from_slice(&[0, 0, 0, 0]); // length
        expected.extend_from_slice(&[0, 0, 0, 1, b'f']); // name
        expected.extend_from_slice(&[0, 0, 0, 0]); // fileName
        expected.extend_from_slice(&[0, 0, 0, 0]); // pc2line
        expected.extend_from_slice(&[0, 0, 0, 0]); // var-map terminator
        expected.extend_from_slice(&[0, 0, 0, 0]); // formals terminator

        assert_eq!(blob, expected);
    }
}
