//! The error taxonomy for the codec and state-root core.
//!
//! One flat enum, no `Box<dyn Error>`, no downcasting. Every variant names
//! the kind of failure, not the call site; context (field name, byte
//! offset) is carried as struct-style fields so `Display` messages are
//! self-describing without a caller needing to match on the variant first.

use thiserror::Error;

/// A decode/encode/trie failure from the codec and state-root core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JamError {
    /// A decoder needed more bytes than were available.
    #[error("truncated input: needed at least {needed} bytes, found {available}")]
    TruncatedInput { needed: usize, available: usize },

    /// Compact decode saw the reserved prefix `1110xxxx`.
    #[error("reserved compact prefix encountered at byte offset {offset}")]
    ReservedPrefix { offset: usize },

    /// Compact decode saw a longer encoding than necessary, and strict mode
    /// is enabled.
    #[error("non-canonical compact encoding at byte offset {offset}: value {value} was encoded in {found_len} bytes, minimum is {minimal_len}")]
    NonCanonical {
        offset: usize,
        value: u128,
        found_len: usize,
        minimal_len: usize,
    },

    /// The state assembler saw a discriminator byte outside the known set.
    #[error("unknown discriminator byte 0x{discriminator:02X}")]
    UnknownDiscriminator { discriminator: u8 },

    /// The same discriminator appeared twice in a key/value input.
    #[error("duplicate discriminator byte 0x{discriminator:02X}")]
    DuplicateDiscriminator { discriminator: u8 },

    /// A field-specific structural violation (count mismatch, missing
    /// terminator, wrong record width, and so on).
    #[error("field shape violation in `{field}`: {detail}")]
    FieldShape { field: &'static str, detail: String },

    /// The trie's input key/value list contained two equal keys.
    #[error("duplicate trie key")]
    DuplicateKey,

    /// The trie's input contained a key of the wrong length.
    #[error("trie key has wrong length: expected {expected}, found {found}")]
    KeyLength { expected: usize, found: usize },

    /// The crypto adapter reported a failure.
    #[error("crypto adapter failure: {0}")]
    Crypto(&'static str),
}

pub type JamResult<T> = Result<T, JamError>;
