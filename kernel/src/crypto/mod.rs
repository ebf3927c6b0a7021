//! The crypto adapter (spec.md §4.5): a narrow, external-collaborator
//! interface. The core never reaches for raw platform APIs itself — these
//! are thin wrappers over audited crates, the same rationale the donor
//! kernel gives for vendoring `ed25519-dalek` instead of hand-rolling
//! curve arithmetic, applied here to the two hash primitives as well.

pub mod ed25519;
pub mod hash;

pub use ed25519::verify as ed25519_verify;
pub use hash::{blake2b_256, keccak_256};
