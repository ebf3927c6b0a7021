//! δ (service-accounts root), σ (storage-root snapshot), θ (ready queue),
//! ω (privileged services): the eight-discriminator gap `spec.md` §3.2
//! leaves unfilled in its own worked table; shapes chosen by analogy to an
//! already-specified sibling field (see `SPEC_FULL.md` §3.2).

use crate::codec::compact::Compact;
use crate::codec::primitives::{read_h256, read_u32_le, write_u32_le, H256};
use crate::error::JamError;

/// δ and σ: a bare 32-byte hash, same shape as a single trie leaf value.
pub fn decode_hash_field(payload: &[u8], field: &'static str) -> Result<H256, JamError> {
    let (hash, consumed) = read_h256(payload)?;
    if consumed != payload.len() {
        return Err(JamError::FieldShape { field, detail: "expected exactly 32 bytes".into() });
    }
    Ok(hash)
}

pub fn encode_hash_field(hash: &H256) -> Vec<u8> {
    hash.as_bytes().to_vec()
}

/// θ: `Compact(len) · Bytes`, the same inner-length framing β uses per
/// entry, carried here as a single opaque blob for the whole field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadyQueue {
    pub bytes: Vec<u8>,
}

pub fn decode_ready_queue(payload: &[u8]) -> Result<ReadyQueue, JamError> {
    let (len, cursor) = Compact::decode(payload, false)?;
    let len = len as usize;
    if payload.len() != cursor + len {
        return Err(JamError::FieldShape {
            field: "ready_queue",
            detail: format!("length prefix {len} does not match remaining payload of {} bytes", payload.len() - cursor),
        });
    }
    Ok(ReadyQueue { bytes: payload[cursor..].to_vec() })
}

pub fn encode_ready_queue(field: &ReadyQueue) -> Vec<u8> {
    let mut out = Compact::encode(field.bytes.len() as u128);
    out.extend_from_slice(&field.bytes);
    out
}

/// ω: a fixed 12-byte record, no internal framing — the same
/// trust-the-wire-shape treatment spec.md §4.2 gives κ's count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PrivilegedServices {
    pub manager: u32,
    pub assign: u32,
    pub designate: u32,
}

pub const PRIVILEGED_SERVICES_LEN: usize = 12;

pub fn decode_privileged_services(payload: &[u8]) -> Result<PrivilegedServices, JamError> {
    if payload.len() != PRIVILEGED_SERVICES_LEN {
        return Err(JamError::FieldShape {
            field: "privileged_services",
            detail: format!("expected exactly {PRIVILEGED_SERVICES_LEN} bytes, found {}", payload.len()),
        });
    }
    let (manager, mut cursor) = read_u32_le(payload)?;
    let (assign, n) = read_u32_le(&payload[cursor..])?;
    cursor += n;
    let (designate, _) = read_u32_le(&payload[cursor..])?;
    Ok(PrivilegedServices { manager, assign, designate })
}

pub fn encode_privileged_services(field: &PrivilegedServices) -> Vec<u8> {
    let mut out = Vec::with_capacity(PRIVILEGED_SERVICES_LEN);
    write_u32_le(field.manager, &mut out);
    write_u32_le(field.assign, &mut out);
    write_u32_le(field.designate, &mut out);
    out
}
