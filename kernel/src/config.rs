//! The chain-spec configuration record (spec.md §6.3). No environment
//! variables, no persisted state, no CLI surface — the record is
//! constructed explicitly by the embedding caller, the same way the donor
//! kernel's `EpochState::genesis()` takes its parameters as plain
//! arguments rather than reading ambient configuration.

use serde::{Deserialize, Serialize};

/// Selects field-size constants for the validator set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Profile {
    /// Small validator set, for local development and test vectors.
    Tiny,
    /// Production-sized validator set.
    Full,
}

/// χ always uses the fixed 252 slots regardless of this value; it exists
/// for informational/downstream use only (spec.md §6.3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSpec {
    pub profile: Profile,
    /// If true, non-canonical compact encodings are rejected on decode.
    pub strict_compact: bool,
    /// Informational only; χ always decodes its fixed 252 slots.
    pub validator_count: u32,
}

impl ChainSpec {
    pub fn tiny() -> Self {
        Self { profile: Profile::Tiny, strict_compact: false, validator_count: 6 }
    }

    pub fn full() -> Self {
        Self { profile: Profile::Full, strict_compact: false, validator_count: 1023 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strict_compact_is_false() {
        // Open Question resolution (spec.md §9): strict=false by default.
        assert!(!ChainSpec::tiny().strict_compact);
        assert!(!ChainSpec::full().strict_compact);
    }

    #[test]
    fn chain_spec_roundtrips_through_json() {
        let spec = ChainSpec { profile: Profile::Full, strict_compact: true, validator_count: 1023 };
        let json = serde_json::to_string(&spec).unwrap();
        let decoded: ChainSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, spec);
    }
}
