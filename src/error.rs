use thiserror::Error;

/// Result type returned by the codec.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The only user-visible failure mode of [`crate::load`].
///
/// Every variant collapses to the same "this is not a valid bytecode blob"
/// contract: there is no per-offset reporting, and callers are expected to
/// surface this to the user as a single format error rather than branch on
/// the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer bytes remained in the input than the format required at this
    /// point.
    #[error("truncated input: needed {needed} bytes, had {available}")]
    Truncated {
        /// Bytes required to continue decoding.
        needed: usize,
        /// Bytes actually remaining.
        available: usize,
    },
    /// The blob did not start with the `0xFF 0x00` marker/version pair.
    #[error("bad signature: expected FF 00")]
    BadSignature,
    /// A constant pool entry carried a tag other than string (`0x00`) or
    /// number (`0x01`).
    #[error("unknown constant tag {0:#04x}")]
    UnknownConstantTag(u8),
}
