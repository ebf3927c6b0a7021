//! η (entropy): either four concatenated `H256` (128 bytes total) or a
//! single "genesis stub" `H256` (32 bytes), disambiguated by payload length
//! alone (spec.md §4.2).

use crate::codec::primitives::H256;
use crate::error::JamError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entropy {
    GenesisStub(H256),
    Full([H256; 4]),
}

pub fn decode_entropy(payload: &[u8]) -> Result<Entropy, JamError> {
    match payload.len() {
        32 => Ok(Entropy::GenesisStub(H256::from_slice(payload)?)),
        128 => {
            let mut hashes = [H256::ZERO; 4];
            for (i, hash) in hashes.iter_mut().enumerate() {
                *hash = H256::from_slice(&payload[i * 32..(i + 1) * 32])?;
            }
            Ok(Entropy::Full(hashes))
        }
        other => Err(JamError::FieldShape {
            field: "entropy",
            detail: format!("expected 32 bytes (genesis stub) or 128 bytes (four hashes), found {other}"),
        }),
    }
}

pub fn encode_entropy(field: &Entropy) -> Vec<u8> {
    match field {
        Entropy::GenesisStub(hash) => hash.as_bytes().to_vec(),
        Entropy::Full(hashes) => {
            let mut out = Vec::with_capacity(128);
            for hash in hashes {
                out.extend_from_slice(hash.as_bytes());
            }
            out
        }
    }
}
