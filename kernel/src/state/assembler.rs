//! The state assembler (spec.md §4.3): marshals between the discriminated
//! key/value wire view and the typed [`State`]. Does not compute or verify
//! the trie root — that is [`crate::trie`]'s job, operating on the KV view
//! this module produces, not on the typed state.

use crate::error::JamError;
use crate::state::discriminator::{decode_field, encode_field, Discriminator};
use crate::state::model::State;

/// `parse_keyvals(kvs) → State`. Each discriminator must appear at most
/// once and must lie in the known 19-byte set; every entry dispatches to
/// its field decoder.
pub fn parse_keyvals(kvs: &[(u8, Vec<u8>)]) -> Result<State, JamError> {
    let mut state = State::new();
    for (byte, payload) in kvs {
        let disc = Discriminator::try_from(*byte)?;
        if state.get(disc).is_some() {
            return Err(JamError::DuplicateDiscriminator { discriminator: *byte });
        }
        let value = decode_field(disc, payload)?;
        state.set(disc, value);
    }
    Ok(state)
}

/// `emit_keyvals(state) → List<(Disc, Bytes)>`. One entry per set field,
/// in ascending discriminator order; every emitted payload decodes back
/// to an equal field value (the roundtrip law, P4).
pub fn emit_keyvals(state: &State) -> Vec<(u8, Vec<u8>)> {
    state.iter().map(|(disc, value)| (disc.byte(), encode_field(value))).collect()
}
