//! ψ (past judgements): three `Compact(len) · H256[len]` sub-fields,
//! serialized in order good/bad/wonky.
//!
//! `encode_h256_set`/`decode_h256_set` are shared with ξ (accumulation
//! outputs) and ο (offenders), which spec.md §3.2 gives the identical wire
//! shape.

use crate::codec::compact::Compact;
use crate::codec::primitives::{read_h256, H256};
use crate::error::JamError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PastJudgements {
    pub good: Vec<H256>,
    pub bad: Vec<H256>,
    pub wonky: Vec<H256>,
}

pub fn decode_h256_set(bytes: &[u8]) -> Result<(Vec<H256>, usize), JamError> {
    let (len, mut cursor) = Compact::decode(bytes, false)?;
    let len = len as usize;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        let (hash, consumed) = read_h256(&bytes[cursor..])?;
        out.push(hash);
        cursor += consumed;
    }
    Ok((out, cursor))
}

pub fn encode_h256_set(hashes: &[H256], out: &mut Vec<u8>) {
    out.extend(Compact::encode(hashes.len() as u128));
    for hash in hashes {
        out.extend_from_slice(hash.as_bytes());
    }
}

pub fn decode_past_judgements(payload: &[u8]) -> Result<PastJudgements, JamError> {
    let (good, mut cursor) = decode_h256_set(payload)?;
    let (bad, consumed) = decode_h256_set(&payload[cursor..])?;
    cursor += consumed;
    let (wonky, consumed) = decode_h256_set(&payload[cursor..])?;
    cursor += consumed;
    if cursor != payload.len() {
        return Err(JamError::FieldShape {
            field: "past_judgements",
            detail: format!("{} trailing bytes after good/bad/wonky", payload.len() - cursor),
        });
    }
    Ok(PastJudgements { good, bad, wonky })
}

pub fn encode_past_judgements(field: &PastJudgements) -> Vec<u8> {
    let mut out = Vec::new();
    encode_h256_set(&field.good, &mut out);
    encode_h256_set(&field.bad, &mut out);
    encode_h256_set(&field.wonky, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(tag: u8) -> H256 {
        H256([tag; 32])
    }

    #[test]
    fn empty_judgements_roundtrip() {
        let field = PastJudgements { good: vec![], bad: vec![], wonky: vec![] };
        let bytes = encode_past_judgements(&field);
        assert_eq!(bytes, vec![0x00, 0x00, 0x00]);
        assert_eq!(decode_past_judgements(&bytes).unwrap(), field);
    }

    #[test]
    fn mixed_judgements_roundtrip() {
        let field = PastJudgements { good: vec![h(1), h(2)], bad: vec![h(3)], wonky: vec![] };
        let bytes = encode_past_judgements(&field);
        assert_eq!(decode_past_judgements(&bytes).unwrap(), field);
    }
}
