//! The chain-state codec: the 19-entry discriminator table, the typed
//! state it assembles into, and the per-field codecs each discriminator
//! dispatches to.

pub mod assembler;
pub mod discriminator;
pub mod fields;
pub mod model;

pub use assembler::{emit_keyvals, parse_keyvals};
pub use discriminator::{Discriminator, FieldValue};
pub use model::State;
