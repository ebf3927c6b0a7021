//! Fixed-width primitives: little-endian integers and the 32-byte opaque
//! hash type every field codec builds on.

use crate::error::JamError;

/// A 32-byte opaque hash. Equality and ordering are byte-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct H256(pub [u8; 32]);

impl H256 {
    pub const ZERO: H256 = H256([0u8; 32]);

    pub fn from_slice(bytes: &[u8]) -> Result<Self, JamError> {
        if bytes.len() != 32 {
            return Err(JamError::FieldShape {
                field: "H256",
                detail: format!("expected 32 bytes, found {}", bytes.len()),
            });
        }
        let mut out = [0u8; 32];
        out.copy_from_slice(bytes);
        Ok(H256(out))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Read a fixed-width little-endian `u32` from the start of `bytes`.
pub fn read_u32_le(bytes: &[u8]) -> Result<(u32, usize), JamError> {
    require(bytes, 4)?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    Ok((u32::from_le_bytes(buf), 4))
}

/// Write a `u32` in little-endian order.
pub fn write_u32_le(n: u32, out: &mut Vec<u8>) {
    out.extend_from_slice(&n.to_le_bytes());
}

/// Read a fixed-width little-endian `u16` from the start of `bytes`.
pub fn read_u16_le(bytes: &[u8]) -> Result<(u16, usize), JamError> {
    require(bytes, 2)?;
    let mut buf = [0u8; 2];
    buf.copy_from_slice(&bytes[..2]);
    Ok((u16::from_le_bytes(buf), 2))
}

/// Write a `u16` in little-endian order.
pub fn write_u16_le(n: u16, out: &mut Vec<u8>) {
    out.extend_from_slice(&n.to_le_bytes());
}

/// Read exactly `len` bytes from the start of `bytes`.
pub fn read_exact(bytes: &[u8], len: usize) -> Result<(&[u8], usize), JamError> {
    require(bytes, len)?;
    Ok((&bytes[..len], len))
}

/// Read a fixed-width `H256` from the start of `bytes`.
pub fn read_h256(bytes: &[u8]) -> Result<(H256, usize), JamError> {
    let (slice, len) = read_exact(bytes, 32)?;
    Ok((H256::from_slice(slice)?, len))
}

pub fn require(bytes: &[u8], needed: usize) -> Result<(), JamError> {
    if bytes.len() < needed {
        Err(JamError::TruncatedInput { needed, available: bytes.len() })
    } else {
        Ok(())
    }
}
