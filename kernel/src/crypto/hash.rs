//! `blake2b_256` and `keccak_256`: thin wrappers over audited hash crates.
//! Blake2b-256 is the trie's node hash (spec.md §4.4); Keccak-256 is
//! exposed for dependency-surface completeness but is not used by the
//! trie itself (spec.md §4.5).

use blake2::Digest;
use crate::codec::primitives::H256;

/// Blake2b with a 256-bit digest, as used by the binary Merkle Patricia
/// Trie's leaf and branch node hashing.
pub fn blake2b_256(input: &[u8]) -> H256 {
    let mut hasher = blake2::Blake2b::<blake2::digest::consts::U32>::new();
    hasher.update(input);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    H256(out)
}

/// Keccak-256, available through the adapter but not used by the trie.
pub fn keccak_256(input: &[u8]) -> H256 {
    use sha3::Digest as _;
    let mut hasher = sha3::Keccak256::new();
    hasher.update(input);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    H256(out)
}
