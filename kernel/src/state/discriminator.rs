//! The closed, 19-byte discriminator table (spec.md §3.2, filled out per
//! `SPEC_FULL.md` §3.2) and the typed field values each discriminator
//! decodes to.
//!
//! Greek-letter symbols are documented here for cross-reference but never
//! used as Rust identifiers, per spec.md §9: English names are the stable
//! internal vocabulary, the discriminator byte is the stable wire identity.

use crate::error::JamError;
use crate::state::fields::{authorizations, entropy, history, judgements, misc, reports, statistics, timeslot, validators};

/// One of the 19 known state-field discriminators. Any other byte is
/// `UnknownDiscriminator` at the assembler boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Discriminator {
    /// κ — current validators
    CurrentValidators = 0x01,
    /// λ — previous validators
    PreviousValidators = 0x02,
    /// β — recent history
    RecentHistory = 0x03,
    /// γ — safrole state
    SafroleState = 0x04,
    /// ψ — past judgements
    PastJudgements = 0x05,
    /// ι — queued validators
    QueuedValidators = 0x06,
    /// χ (current epoch half) — statistics
    StatisticsCurrent = 0x07,
    /// χ (previous epoch half) — statistics
    StatisticsPrevious = 0x08,
    /// π — core statistics
    CoreStatistics = 0x09,
    /// η — entropy
    Entropy = 0x0A,
    /// τ — timeslot
    Timeslot = 0x0B,
    /// ρ — work-reports-per-core
    WorkReports = 0x0C,
    /// φ — authorizations
    Authorizations = 0x0D,
    /// δ — service-accounts root
    ServiceAccountsRoot = 0x0E,
    /// ξ — recent accumulation outputs
    AccumulationOutputs = 0x0F,
    /// θ — ready queue
    ReadyQueue = 0x10,
    /// ο — offenders
    Offenders = 0x11,
    /// σ — storage-root snapshot
    StorageRootSnapshot = 0x12,
    /// ω — privileged services
    PrivilegedServices = 0x13,
}

pub const ALL_DISCRIMINATORS: [Discriminator; 19] = [
    Discriminator::CurrentValidators,
    Discriminator::PreviousValidators,
    Discriminator::RecentHistory,
    Discriminator::SafroleState,
    Discriminator::PastJudgements,
    Discriminator::QueuedValidators,
    Discriminator::StatisticsCurrent,
    Discriminator::StatisticsPrevious,
    Discriminator::CoreStatistics,
    Discriminator::Entropy,
    Discriminator::Timeslot,
    Discriminator::WorkReports,
    Discriminator::Authorizations,
    Discriminator::ServiceAccountsRoot,
    Discriminator::AccumulationOutputs,
    Discriminator::ReadyQueue,
    Discriminator::Offenders,
    Discriminator::StorageRootSnapshot,
    Discriminator::PrivilegedServices,
];

impl Discriminator {
    pub fn byte(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Discriminator::CurrentValidators => "current_validators",
            Discriminator::PreviousValidators => "previous_validators",
            Discriminator::RecentHistory => "recent_history",
            Discriminator::SafroleState => "safrole_state",
            Discriminator::PastJudgements => "past_judgements",
            Discriminator::QueuedValidators => "queued_validators",
            Discriminator::StatisticsCurrent => "statistics_current",
            Discriminator::StatisticsPrevious => "statistics_previous",
            Discriminator::CoreStatistics => "core_statistics",
            Discriminator::Entropy => "entropy",
            Discriminator::Timeslot => "timeslot",
            Discriminator::WorkReports => "work_reports",
            Discriminator::Authorizations => "authorizations",
            Discriminator::ServiceAccountsRoot => "service_accounts_root",
            Discriminator::AccumulationOutputs => "accumulation_outputs",
            Discriminator::ReadyQueue => "ready_queue",
            Discriminator::Offenders => "offenders",
            Discriminator::StorageRootSnapshot => "storage_root_snapshot",
            Discriminator::PrivilegedServices => "privileged_services",
        }
    }
}

impl TryFrom<u8> for Discriminator {
    type Error = JamError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        ALL_DISCRIMINATORS
            .into_iter()
            .find(|d| d.byte() == byte)
            .ok_or(JamError::UnknownDiscriminator { discriminator: byte })
    }
}

/// The typed value a discriminator decodes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    CurrentValidators(validators::CurrentValidators),
    ValidatorList(Vec<validators::ValidatorKey>),
    RecentHistory(history::RecentHistory),
    Opaque(reports::OpaqueField),
    PastJudgements(judgements::PastJudgements),
    Statistics(statistics::StatisticsTable),
    Entropy(entropy::Entropy),
    Timeslot(u32),
    Authorizations(authorizations::Authorizations),
    Hash(crate::codec::primitives::H256),
    HashSet(Vec<crate::codec::primitives::H256>),
    ReadyQueue(misc::ReadyQueue),
    PrivilegedServices(misc::PrivilegedServices),
}

/// Decode the payload bytes for `disc` into its typed [`FieldValue`].
pub fn decode_field(disc: Discriminator, payload: &[u8]) -> Result<FieldValue, JamError> {
    use Discriminator::*;
    Ok(match disc {
        CurrentValidators => FieldValue::CurrentValidators(validators::decode_current_validators(payload)?),
        PreviousValidators => FieldValue::ValidatorList(validators::decode_validator_key_list(payload, "previous_validators")?),
        QueuedValidators => FieldValue::ValidatorList(validators::decode_validator_key_list(payload, "queued_validators")?),
        RecentHistory => FieldValue::RecentHistory(history::decode_recent_history(payload)?),
        SafroleState | WorkReports | CoreStatistics => FieldValue::Opaque(reports::decode_opaque(payload)?),
        PastJudgements => FieldValue::PastJudgements(judgements::decode_past_judgements(payload)?),
        StatisticsCurrent | StatisticsPrevious => FieldValue::Statistics(statistics::decode_statistics(payload)?),
        Entropy => FieldValue::Entropy(entropy::decode_entropy(payload)?),
        Timeslot => FieldValue::Timeslot(timeslot::decode_timeslot(payload)?),
        Authorizations => FieldValue::Authorizations(authorizations::decode_authorizations(payload)?),
        ServiceAccountsRoot => FieldValue::Hash(misc::decode_hash_field(payload, "service_accounts_root")?),
        StorageRootSnapshot => FieldValue::Hash(misc::decode_hash_field(payload, "storage_root_snapshot")?),
        AccumulationOutputs => {
            let (hashes, consumed) = judgements::decode_h256_set(payload)?;
            if consumed != payload.len() {
                return Err(JamError::FieldShape {
                    field: "accumulation_outputs",
                    detail: format!("{} trailing bytes", payload.len() - consumed),
                });
            }
            FieldValue::HashSet(hashes)
        }
        Offenders => {
            let (hashes, consumed) = judgements::decode_h256_set(payload)?;
            if consumed != payload.len() {
                return Err(JamError::FieldShape {
                    field: "offenders",
                    detail: format!("{} trailing bytes", payload.len() - consumed),
                });
            }
            FieldValue::HashSet(hashes)
        }
        ReadyQueue => FieldValue::ReadyQueue(misc::decode_ready_queue(payload)?),
        PrivilegedServices => FieldValue::PrivilegedServices(misc::decode_privileged_services(payload)?),
    })
}

/// Encode a typed [`FieldValue`] back to its wire payload.
pub fn encode_field(value: &FieldValue) -> Vec<u8> {
    match value {
        FieldValue::CurrentValidators(v) => validators::encode_current_validators(v),
        FieldValue::ValidatorList(v) => validators::encode_validator_key_list(v),
        FieldValue::RecentHistory(v) => history::encode_recent_history(v),
        FieldValue::Opaque(v) => reports::encode_opaque(v),
        FieldValue::PastJudgements(v) => judgements::encode_past_judgements(v),
        FieldValue::Statistics(v) => statistics::encode_statistics(v),
        FieldValue::Entropy(v) => entropy::encode_entropy(v),
        FieldValue::Timeslot(v) => timeslot::encode_timeslot(*v),
        FieldValue::Authorizations(v) => authorizations::encode_authorizations(v),
        FieldValue::Hash(v) => misc::encode_hash_field(v),
        FieldValue::HashSet(v) => {
            let mut out = Vec::new();
            judgements::encode_h256_set(v, &mut out);
            out
        }
        FieldValue::ReadyQueue(v) => misc::encode_ready_queue(v),
        FieldValue::PrivilegedServices(v) => misc::encode_privileged_services(v),
    }
}
