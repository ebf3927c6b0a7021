//! φ (authorizations): pools and queues, each entry padded to 305 bytes
//! per spec.md §4.2. Padding bytes are zero on encode and MUST be
//! preserved verbatim on decode, so each entry is carried as an opaque
//! 305-byte record rather than split into "real" and "padding" parts.

use crate::codec::compact::Compact;
use crate::error::JamError;

pub const AUTH_ENTRY_LEN: usize = 305;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthEntry {
    pub bytes: [u8; AUTH_ENTRY_LEN],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Authorizations {
    pub pools: Vec<AuthEntry>,
    pub queues: Vec<AuthEntry>,
}

fn decode_entries(bytes: &[u8]) -> Result<(Vec<AuthEntry>, usize), JamError> {
    let (count, mut cursor) = Compact::decode(bytes, false)?;
    let count = count as usize;
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        if bytes.len() < cursor + AUTH_ENTRY_LEN {
            return Err(JamError::TruncatedInput { needed: cursor + AUTH_ENTRY_LEN, available: bytes.len() });
        }
        let mut entry = [0u8; AUTH_ENTRY_LEN];
        entry.copy_from_slice(&bytes[cursor..cursor + AUTH_ENTRY_LEN]);
        entries.push(AuthEntry { bytes: entry });
        cursor += AUTH_ENTRY_LEN;
    }
    Ok((entries, cursor))
}

fn encode_entries(entries: &[AuthEntry], out: &mut Vec<u8>) {
    out.extend(Compact::encode(entries.len() as u128));
    for entry in entries {
        out.extend_from_slice(&entry.bytes);
    }
}

pub fn decode_authorizations(payload: &[u8]) -> Result<Authorizations, JamError> {
    let (pools, cursor) = decode_entries(payload)?;
    let (queues, consumed) = decode_entries(&payload[cursor..])?;
    let cursor = cursor + consumed;
    if cursor != payload.len() {
        return Err(JamError::FieldShape {
            field: "authorizations",
            detail: format!("{} trailing bytes after pools and queues", payload.len() - cursor),
        });
    }
    Ok(Authorizations { pools, queues })
}

pub fn encode_authorizations(field: &Authorizations) -> Vec<u8> {
    let mut out = Vec::new();
    encode_entries(&field.pools, &mut out);
    encode_entries(&field.queues, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: u8) -> AuthEntry {
        AuthEntry { bytes: [tag; AUTH_ENTRY_LEN] }
    }

    #[test]
    fn empty_authorizations_roundtrip() {
        let field = Authorizations { pools: vec![], queues: vec![] };
        let bytes = encode_authorizations(&field);
        assert_eq!(bytes, vec![0x00, 0x00]);
        assert_eq!(decode_authorizations(&bytes).unwrap(), field);
    }

    #[test]
    fn padded_entries_preserved_verbatim() {
        let field = Authorizations { pools: vec![entry(1), entry(2)], queues: vec![entry(9)] };
        let bytes = encode_authorizations(&field);
        assert_eq!(decode_authorizations(&bytes).unwrap(), field);
    }
}
