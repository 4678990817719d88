//! Tunables for the dump side of the codec.

use crate::writer::{DEFAULT_CAPACITY, DEFAULT_SLACK};

/// Controls the amortised-growth policy of the [`crate::writer::BufferWriter`]
/// used by [`crate::dump_with_config`].
///
/// The defaults match the original fixed constants (a 1024-byte initial
/// buffer, grown 1024 bytes past whatever is needed on each resize).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Initial capacity of the output buffer, in bytes.
    pub initial_capacity: usize,
    /// Extra bytes requested on every grow, beyond what is immediately
    /// needed.
    pub slack: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            initial_capacity: DEFAULT_CAPACITY,
            slack: DEFAULT_SLACK,
        }
    }
}
