//! Bytecode dump/load codec for compiled-function objects.
//!
//! A compiled function — its bytecode instructions, constant pool, nested
//! inner functions, and a small set of descriptive properties — can be
//! [`dump`]ed into a self-contained, big-endian byte sequence and later
//! [`load`]ed back into an equivalent [`CompiledFunction`]. The format is
//! intended for ahead-of-time precompilation: compile once, dump, ship the
//! blob, and load it (repeatedly, and on the hot path) later.
//!
//! The crate does not implement a bytecode interpreter, a compiler
//! front-end, or the instruction set itself; instructions are opaque
//! 32-bit words as far as this codec is concerned.
//!
//! ```
//! use bc_codec::{dump, load, CompiledFunction};
//!
//! let f = CompiledFunction::empty("answer", 0);
//! let blob = dump(&f);
//! let loaded = load(&blob).unwrap();
//! assert_eq!(f, loaded);
//! ```

#![warn(missing_docs)]
#![deny(unused_must_use)]

mod config;
mod dump;
mod error;
mod flags;
mod function;
mod load;
mod primitive;
mod writer;

pub use config::WriterConfig;
pub use dump::{dump, dump_with_config};
pub use error::{Error, Result};
pub use flags::FunctionFlags;
pub use function::{CompiledFunction, Constant};
pub use load::load;
