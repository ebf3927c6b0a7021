//! γ (safrole state), ρ (work-reports-per-core), π (core statistics):
//! structured aggregates whose interior the Gray Paper only partially
//! specifies from this core's vantage point. Treated as
//! opaque-bytes-with-roundtrip, per spec.md §9's explicit direction for
//! γ and ρ, extended to π (an added field with no detail given at all).
//! Structural decoding is deferred until a vector exercises their interior.

use crate::error::JamError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpaqueField {
    pub bytes: Vec<u8>,
}

pub fn decode_opaque(payload: &[u8]) -> Result<OpaqueField, JamError> {
    Ok(OpaqueField { bytes: payload.to_vec() })
}

pub fn encode_opaque(field: &OpaqueField) -> Vec<u8> {
    field.bytes.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_field_roundtrips_any_bytes() {
        for sample in [vec![], vec![0u8], vec![1, 2, 3, 4, 5]] {
            let field = decode_opaque(&sample).unwrap();
            assert_eq!(encode_opaque(&field), sample);
        }
    }
}
