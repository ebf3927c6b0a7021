//! The two node shapes of the binary Merkle Patricia Trie (spec.md §4.4)
//! and their Blake2b-256 hashing.

use crate::codec::primitives::H256;
use crate::crypto::hash::blake2b_256;

const LEAF_TAG: u8 = 0x00;
const BRANCH_TAG: u8 = 0x01;

/// Hash a leaf node: `0x00 · key · H(value)`.
pub fn hash_leaf(key: &[u8], value: &[u8]) -> H256 {
    let value_hash = blake2b_256(value);
    let mut preimage = Vec::with_capacity(1 + key.len() + 32);
    preimage.push(LEAF_TAG);
    preimage.extend_from_slice(key);
    preimage.extend_from_slice(value_hash.as_bytes());
    blake2b_256(&preimage)
}

/// Hash a branch node: `0x01 · h_left · h_right`.
pub fn hash_branch(left: &H256, right: &H256) -> H256 {
    let mut preimage = Vec::with_capacity(1 + 32 + 32);
    preimage.push(BRANCH_TAG);
    preimage.extend_from_slice(left.as_bytes());
    preimage.extend_from_slice(right.as_bytes());
    blake2b_256(&preimage)
}
