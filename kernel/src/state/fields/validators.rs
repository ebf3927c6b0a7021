//! κ (current validators), λ (previous validators), ι (queued validators).
//!
//! All three share the 256-byte `ValidatorKey` record; κ alone carries a
//! `u16` expected-count prefix, λ and ι infer their length from the
//! remaining bytes in the payload (spec.md §4.2).

use crate::codec::primitives::{read_u16_le, require, write_u16_le};
use crate::error::JamError;

/// A fixed 256-byte composite public-key record:
/// `{bandersnatch[32], ed25519[32], bls[144], metadata[48]}`.
///
/// `metadata` is opaque and MUST be preserved verbatim across a roundtrip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorKey {
    pub bandersnatch: [u8; 32],
    pub ed25519: [u8; 32],
    pub bls: [u8; 144],
    pub metadata: [u8; 48],
}

pub const VALIDATOR_KEY_LEN: usize = 32 + 32 + 144 + 48;

impl ValidatorKey {
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize), JamError> {
        require(bytes, VALIDATOR_KEY_LEN)?;
        let mut bandersnatch = [0u8; 32];
        let mut ed25519 = [0u8; 32];
        let mut bls = [0u8; 144];
        let mut metadata = [0u8; 48];
        let mut cursor = 0;
        bandersnatch.copy_from_slice(&bytes[cursor..cursor + 32]);
        cursor += 32;
        ed25519.copy_from_slice(&bytes[cursor..cursor + 32]);
        cursor += 32;
        bls.copy_from_slice(&bytes[cursor..cursor + 144]);
        cursor += 144;
        metadata.copy_from_slice(&bytes[cursor..cursor + 48]);
        cursor += 48;
        Ok((Self { bandersnatch, ed25519, bls, metadata }, cursor))
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.bandersnatch);
        out.extend_from_slice(&self.ed25519);
        out.extend_from_slice(&self.bls);
        out.extend_from_slice(&self.metadata);
    }
}

/// κ: `u16 LE expected-count · 256·expected-count bytes of keys`. The
/// expected-count on the wire is authoritative for decode sizing, even
/// when it happens to equal the configured validator set size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentValidators {
    pub keys: Vec<ValidatorKey>,
}

pub fn decode_current_validators(payload: &[u8]) -> Result<CurrentValidators, JamError> {
    let (expected_count, mut cursor) = read_u16_le(payload)?;
    let expected_count = expected_count as usize;
    let mut keys = Vec::with_capacity(expected_count);
    for _ in 0..expected_count {
        let (key, consumed) = ValidatorKey::decode(&payload[cursor..])?;
        keys.push(key);
        cursor += consumed;
    }
    if cursor != payload.len() {
        return Err(JamError::FieldShape {
            field: "current_validators",
            detail: format!("{} trailing bytes after {expected_count} keys", payload.len() - cursor),
        });
    }
    if keys.len() != expected_count {
        return Err(JamError::FieldShape {
            field: "current_validators",
            detail: "expected-count must equal the number of decoded keys".into(),
        });
    }
    Ok(CurrentValidators { keys })
}

pub fn encode_current_validators(field: &CurrentValidators) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + field.keys.len() * VALIDATOR_KEY_LEN);
    write_u16_le(field.keys.len() as u16, &mut out);
    for key in &field.keys {
        key.encode(&mut out);
    }
    out
}

/// λ and ι: a bare list of `ValidatorKey`, no count prefix; length is
/// inferred from the remaining bytes in the value slot.
pub fn decode_validator_key_list(payload: &[u8], field: &'static str) -> Result<Vec<ValidatorKey>, JamError> {
    if payload.len() % VALIDATOR_KEY_LEN != 0 {
        return Err(JamError::FieldShape {
            field,
            detail: format!(
                "payload length {} is not a multiple of the {}-byte validator key",
                payload.len(),
                VALIDATOR_KEY_LEN
            ),
        });
    }
    let mut keys = Vec::with_capacity(payload.len() / VALIDATOR_KEY_LEN);
    let mut cursor = 0;
    while cursor < payload.len() {
        let (key, consumed) = ValidatorKey::decode(&payload[cursor..])?;
        keys.push(key);
        cursor += consumed;
    }
    Ok(keys)
}

pub fn encode_validator_key_list(keys: &[ValidatorKey]) -> Vec<u8> {
    let mut out = Vec::with_capacity(keys.len() * VALIDATOR_KEY_LEN);
    for key in keys {
        key.encode(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key(tag: u8) -> ValidatorKey {
        ValidatorKey {
            bandersnatch: [tag; 32],
            ed25519: [tag.wrapping_add(1); 32],
            bls: [tag.wrapping_add(2); 144],
            metadata: [tag.wrapping_add(3); 48],
        }
    }

    #[test]
    fn validator_key_roundtrip() {
        let key = sample_key(7);
        let mut out = Vec::new();
        key.encode(&mut out);
        assert_eq!(out.len(), VALIDATOR_KEY_LEN);
        let (decoded, consumed) = ValidatorKey::decode(&out).unwrap();
        assert_eq!(consumed, VALIDATOR_KEY_LEN);
        assert_eq!(decoded, key);
    }

    #[test]
    fn current_validators_count_zero_roundtrips() {
        let field = CurrentValidators { keys: vec![] };
        let bytes = encode_current_validators(&field);
        assert_eq!(bytes, vec![0x00, 0x00]);
        let decoded = decode_current_validators(&bytes).unwrap();
        assert_eq!(decoded, field);
    }

    #[test]
    fn current_validators_roundtrip_with_entries() {
        let field = CurrentValidators { keys: vec![sample_key(1), sample_key(2)] };
        let bytes = encode_current_validators(&field);
        let decoded = decode_current_validators(&bytes).unwrap();
        assert_eq!(decoded, field);
    }

    #[test]
    fn current_validators_count_mismatch_is_rejected() {
        let field = CurrentValidators { keys: vec![sample_key(1)] };
        let mut bytes = encode_current_validators(&field);
        bytes[0] = 2; // claim 2 keys, only 1 present
        assert!(decode_current_validators(&bytes).is_err());
    }

    #[test]
    fn previous_validators_infers_length() {
        let keys = vec![sample_key(9), sample_key(10), sample_key(11)];
        let bytes = encode_validator_key_list(&keys);
        let decoded = decode_validator_key_list(&bytes, "previous_validators").unwrap();
        assert_eq!(decoded, keys);
    }

    #[test]
    fn validator_key_list_rejects_misaligned_length() {
        let bytes = vec![0u8; VALIDATOR_KEY_LEN - 1];
        assert!(decode_validator_key_list(&bytes, "previous_validators").is_err());
    }
}
