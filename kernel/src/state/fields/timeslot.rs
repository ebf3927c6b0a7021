//! τ (timeslot): raw `u32` LE, no length prefix (spec.md §4.2).

use crate::codec::primitives::{read_u32_le, write_u32_le};
use crate::error::JamError;

pub fn decode_timeslot(payload: &[u8]) -> Result<u32, JamError> {
    let (value, consumed) = read_u32_le(payload)?;
    if consumed != payload.len() {
        return Err(JamError::FieldShape {
            field: "timeslot",
            detail: format!("expected exactly 4 bytes, found {}", payload.len()),
        });
    }
    Ok(value)
}

pub fn encode_timeslot(value: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(4);
    write_u32_le(value, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeslot_roundtrips() {
        for value in [0u32, 1, u32::MAX, 0x0102_0304] {
            let bytes = encode_timeslot(value);
            assert_eq!(bytes.len(), 4);
            assert_eq!(decode_timeslot(&bytes).unwrap(), value);
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(decode_timeslot(&[0u8; 3]).is_err());
        assert!(decode_timeslot(&[0u8; 5]).is_err());
    }
}
