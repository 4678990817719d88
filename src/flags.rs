//! Type-flag bitfield carried by every [`crate::function::CompiledFunction`].

bitflags::bitflags! {
    /// Host-defined type flags for a compiled function.
    ///
    /// Only [`FunctionFlags::NAME_BINDING`] has codec-visible behavior (see
    /// the base specification, §4.3 and §9); the remaining bits are opaque
    /// to the codec and simply round-trip through the `flags` header word.
    #[derive(Default)]
    pub struct FunctionFlags: u32 {
        /// Strict-mode function.
        const STRICT       = 0b0000_0001;
        /// Arrow function (no own `this`/`arguments`).
        const ARROW         = 0b0000_0010;
        /// Generator function.
        const GENERATOR     = 0b0000_0100;
        /// Async function.
        const ASYNC         = 0b0000_1000;
        /// The function's own identifier must be visible inside its body
        /// via a dedicated one-entry lexical environment (see base
        /// specification §4.3 item 2 and §9).
        const NAME_BINDING  = 0b0001_0000;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FunctionFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FunctionFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Ok(FunctionFlags::from_bits_truncate(bits))
    }
}
