//! JAM State Core — codec and state-root core for a JAM (Join-Accumulate
//! Machine) protocol implementation, following the Gray Paper v0.7.2.
//!
//! Covers three tightly coupled concerns: the JAM-compact variable-length
//! integer encoding, the serialization of a 19-field heterogeneous chain
//! state, and the binary Merkle Patricia Trie that computes a 32-byte
//! state root over that state's key/value view.
//!
//! No networking, no I/O, no async, no threading. Every operation is a
//! pure, synchronous function of its byte inputs.
//!
//! INVARIANTS:
//! 1. `BTreeMap` everywhere state needs an order: iteration order is
//!    deterministic (sorted by discriminator), never a `HashMap`.
//! 2. Decode/encode pairs are exact-byte roundtrips; this is a
//!    correctness invariant, not an optimization (spec.md §1).
//! 3. Feature flags that alter codec or trie behavior are forbidden; the
//!    only runtime switch is the explicit `ChainSpec` record.
//! 4. The core never reaches for raw platform APIs; crypto is consumed
//!    through the narrow adapter in [`crypto`].

pub mod codec;
pub mod compat;
pub mod config;
pub mod crypto;
pub mod error;
pub mod harness;
pub mod state;
pub mod trie;

pub use error::{JamError, JamResult};
