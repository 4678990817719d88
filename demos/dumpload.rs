//! Builds a small sample function tree, dumps it, reloads it, and prints a
//! summary of the round trip. Stands in for the "enclosing public
//! embedding API" that a real script compiler/precompiler would drive;
//! building actual compiled functions from source is out of scope for
//! this codec.

use std::rc::Rc;

use bc_codec::{dump, load, CompiledFunction, Constant, FunctionFlags};

fn sample_function() -> CompiledFunction {
    let inner = CompiledFunction::empty("inner", 1);

    let mut outer = CompiledFunction::empty("outer", 0);
    outer.instructions = vec![0x0100_0000, 0x0200_0001];
    outer.constants = vec![
        Constant::String(Rc::from("greeting")),
        Constant::Number(1.5),
    ];
    outer.inner_functions = vec![Rc::new(inner)];
    outer.flags |= FunctionFlags::NAME_BINDING;
    outer.var_map = vec![(Rc::from("x"), 0)];
    outer.formals = Vec::new();
    outer
}

fn main() {
    let original = sample_function();
    let blob = dump(&original);
    println!("dumped {} bytes", blob.len());

    let loaded = load(&blob).expect("a blob we just produced must load cleanly");
    println!(
        "loaded function {:?}: {} instructions, {} constants, {} inner functions, name_binding={}",
        loaded.name,
        loaded.instructions.len(),
        loaded.constants.len(),
        loaded.inner_functions.len(),
        loaded.name_binding(),
    );

    assert_eq!(original, loaded, "round trip must be lossless");
    println!("round trip OK");
}
