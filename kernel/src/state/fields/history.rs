//! β (recent history): `Compact(n) · HistoryEntry[n] · 0x00` terminator.
//!
//! Each `HistoryEntry` is itself length-prefixed (`Compact(len) · bytes`) so
//! the list can be decoded without a separate per-entry schema; the Gray
//! Paper under-specifies the entry's interior for this core's purposes, so
//! it is treated as opaque-bytes-with-roundtrip, the same policy spec.md §9
//! applies to γ and ρ.

use crate::codec::compact::Compact;
use crate::error::JamError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentHistory {
    pub entries: Vec<HistoryEntry>,
}

pub fn decode_recent_history(payload: &[u8]) -> Result<RecentHistory, JamError> {
    let (n, mut cursor) = Compact::decode(payload, false)?;
    let n = n as usize;
    let mut entries = Vec::with_capacity(n);
    for _ in 0..n {
        let (len, consumed) = Compact::decode(&payload[cursor..], false)?;
        cursor += consumed;
        let len = len as usize;
        if payload.len() < cursor + len {
            return Err(JamError::TruncatedInput { needed: cursor + len, available: payload.len() });
        }
        entries.push(HistoryEntry { bytes: payload[cursor..cursor + len].to_vec() });
        cursor += len;
    }
    if cursor >= payload.len() || payload[cursor] != 0x00 {
        return Err(JamError::FieldShape {
            field: "recent_history",
            detail: "missing 0x00 padding terminator".into(),
        });
    }
    cursor += 1;
    if cursor != payload.len() {
        return Err(JamError::FieldShape {
            field: "recent_history",
            detail: format!("{} trailing bytes after the terminator", payload.len() - cursor),
        });
    }
    Ok(RecentHistory { entries })
}

pub fn encode_recent_history(field: &RecentHistory) -> Vec<u8> {
    let mut out = Compact::encode(field.entries.len() as u128);
    for entry in &field.entries {
        out.extend(Compact::encode(entry.bytes.len() as u128));
        out.extend_from_slice(&entry.bytes);
    }
    out.push(0x00);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_roundtrips() {
        let field = RecentHistory { entries: vec![] };
        let bytes = encode_recent_history(&field);
        assert_eq!(bytes, vec![0x00, 0x00], "count=0 then the terminator byte");
        assert_eq!(decode_recent_history(&bytes).unwrap(), field);
    }

    #[test]
    fn single_entry_history_roundtrips() {
        let field = RecentHistory { entries: vec![HistoryEntry { bytes: vec![1, 2, 3] }] };
        let bytes = encode_recent_history(&field);
        assert_eq!(decode_recent_history(&bytes).unwrap(), field);
    }

    #[test]
    fn history_with_only_the_padding_byte_is_empty() {
        // count = 0, immediately followed by the terminator: no entries.
        let bytes = vec![0x00, 0x00];
        let decoded = decode_recent_history(&bytes).unwrap();
        assert!(decoded.entries.is_empty());
    }

    #[test]
    fn missing_terminator_is_rejected() {
        let bytes = vec![0x00]; // count=0, but terminator never written
        assert!(decode_recent_history(&bytes).is_err());
    }
}
