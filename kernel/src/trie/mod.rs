//! The binary Merkle Patricia Trie engine (GP Appendix D). Consumes the
//! key/value view the state assembler produces, not the typed state
//! itself (spec.md §2).

pub mod build;
pub mod node;

pub use build::{compute_root, Node, KEY_LEN};
