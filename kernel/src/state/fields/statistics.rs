//! χ (statistics): exactly 252 fixed-width validator statistic records,
//! decoded iteratively with no length prefix (spec.md §4.2).
//!
//! The Gray Paper's per-record schema is not detailed by spec.md beyond
//! "fixed by the statistics sub-schema"; this core fixes that schema as
//! four little-endian `u32` counters per validator (blocks produced,
//! tickets submitted, preimages provided, guarantees issued), the smallest
//! record shape that plausibly carries the distinct per-validator counters
//! the Gray Paper's validator-activity statistics track.

use crate::codec::primitives::{read_u32_le, write_u32_le};
use crate::error::JamError;

pub const VALIDATOR_SLOT_COUNT: usize = 252;
pub const STATISTICS_RECORD_LEN: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StatisticsRecord {
    pub blocks_produced: u32,
    pub tickets_submitted: u32,
    pub preimages_provided: u32,
    pub guarantees_issued: u32,
}

impl StatisticsRecord {
    fn decode(bytes: &[u8]) -> Result<(Self, usize), JamError> {
        let mut cursor = 0;
        let (blocks_produced, n) = read_u32_le(&bytes[cursor..])?;
        cursor += n;
        let (tickets_submitted, n) = read_u32_le(&bytes[cursor..])?;
        cursor += n;
        let (preimages_provided, n) = read_u32_le(&bytes[cursor..])?;
        cursor += n;
        let (guarantees_issued, n) = read_u32_le(&bytes[cursor..])?;
        cursor += n;
        Ok((Self { blocks_produced, tickets_submitted, preimages_provided, guarantees_issued }, cursor))
    }

    fn encode(&self, out: &mut Vec<u8>) {
        write_u32_le(self.blocks_produced, out);
        write_u32_le(self.tickets_submitted, out);
        write_u32_le(self.preimages_provided, out);
        write_u32_le(self.guarantees_issued, out);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatisticsTable {
    pub slots: Vec<StatisticsRecord>,
}

pub fn decode_statistics(payload: &[u8]) -> Result<StatisticsTable, JamError> {
    let expected_len = VALIDATOR_SLOT_COUNT * STATISTICS_RECORD_LEN;
    if payload.len() != expected_len {
        return Err(JamError::FieldShape {
            field: "statistics",
            detail: format!("expected exactly {expected_len} bytes ({VALIDATOR_SLOT_COUNT} records), found {}", payload.len()),
        });
    }
    let mut slots = Vec::with_capacity(VALIDATOR_SLOT_COUNT);
    let mut cursor = 0;
    for _ in 0..VALIDATOR_SLOT_COUNT {
        let (record, consumed) = StatisticsRecord::decode(&payload[cursor..])?;
        slots.push(record);
        cursor += consumed;
    }
    Ok(StatisticsTable { slots })
}

pub fn encode_statistics(field: &StatisticsTable) -> Vec<u8> {
    let mut out = Vec::with_capacity(VALIDATOR_SLOT_COUNT * STATISTICS_RECORD_LEN);
    for record in &field.slots {
        record.encode(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_roundtrip() {
        let slots: Vec<StatisticsRecord> = (0..VALIDATOR_SLOT_COUNT as u32)
            .map(|i| StatisticsRecord { blocks_produced: i, tickets_submitted: i + 1, preimages_provided: i + 2, guarantees_issued: i + 3 })
            .collect();
        let field = StatisticsTable { slots };
        let bytes = encode_statistics(&field);
        assert_eq!(bytes.len(), VALIDATOR_SLOT_COUNT * STATISTICS_RECORD_LEN);
        assert_eq!(decode_statistics(&bytes).unwrap(), field);
    }

    #[test]
    fn wrong_slot_count_is_rejected() {
        let bytes = vec![0u8; STATISTICS_RECORD_LEN * (VALIDATOR_SLOT_COUNT - 1)];
        assert!(decode_statistics(&bytes).is_err());
    }
}
