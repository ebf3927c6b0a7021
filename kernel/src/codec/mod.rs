//! Leaf-level codecs: the JAM-compact integer encoding and the fixed-width
//! primitives every field codec is built from.

pub mod compact;
pub mod primitives;

pub use compact::Compact;
pub use primitives::H256;
