//! The binary Merkle Patricia Trie (GP Appendix D, spec.md §4.4): sort,
//! validate, build, and hash a key/value set into a 32-byte state root.

use crate::codec::primitives::H256;
use crate::error::JamError;
use crate::trie::node::{hash_branch, hash_leaf};

pub const KEY_LEN: usize = 31;

/// The trie's structural shape, independent of any hash function (P7: the
/// node byte layout pre-hash is a pure function of the key/value set).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf { key: Vec<u8>, value: Vec<u8> },
    Branch { left: Box<Node>, right: Box<Node> },
}

/// Compute the 32-byte state root over `kvs`. Accepts the set in any
/// order — it is sorted internally — so P5 (trie determinism under
/// permutation) holds by construction rather than by caller discipline.
pub fn compute_root(kvs: &[(Vec<u8>, Vec<u8>)]) -> Result<H256, JamError> {
    if kvs.is_empty() {
        return Ok(H256::ZERO);
    }
    for (key, _) in kvs {
        if key.len() != KEY_LEN {
            return Err(JamError::KeyLength { expected: KEY_LEN, found: key.len() });
        }
    }
    let mut sorted = kvs.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    for window in sorted.windows(2) {
        if window[0].0 == window[1].0 {
            return Err(JamError::DuplicateKey);
        }
    }
    Ok(hash_node(&build(&sorted)))
}

/// Build the structural node tree for an already-sorted, duplicate-free,
/// non-empty key/value set.
pub fn build(entries: &[(Vec<u8>, Vec<u8>)]) -> Node {
    if entries.len() == 1 {
        let (key, value) = &entries[0];
        return Node::Leaf { key: key.clone(), value: value.clone() };
    }
    let split_bit = find_split_bit(entries);
    let split_at = entries.partition_point(|(key, _)| !get_bit(key, split_bit));
    let (left, right) = entries.split_at(split_at);
    // The split bit is, by construction, the first bit at which the
    // sorted set's first and last keys disagree; every intermediate key
    // lies between them lexicographically and therefore agrees with both
    // up to that bit, so neither partition can be empty.
    debug_assert!(!left.is_empty() && !right.is_empty());
    Node::Branch { left: Box::new(build(left)), right: Box::new(build(right)) }
}

pub fn hash_node(node: &Node) -> H256 {
    match node {
        Node::Leaf { key, value } => hash_leaf(key, value),
        Node::Branch { left, right } => hash_branch(&hash_node(left), &hash_node(right)),
    }
}

fn get_bit(key: &[u8], bit_index: usize) -> bool {
    let byte = bit_index / 8;
    let offset = bit_index % 8;
    (key[byte] >> (7 - offset)) & 1 == 1
}

/// First bit index (MSB-first across bytes) at which not all keys in
/// `entries` agree. Relies on `entries` being lexicographically sorted:
/// the first and last keys then bound every intermediate key bitwise, so
/// comparing only those two suffices.
fn find_split_bit(entries: &[(Vec<u8>, Vec<u8>)]) -> usize {
    let key_len = entries[0].0.len();
    let first = &entries[0].0;
    let last = &entries[entries.len() - 1].0;
    for bit in 0..key_len * 8 {
        if get_bit(first, bit) != get_bit(last, bit) {
            return bit;
        }
    }
    unreachable!("a sorted, duplicate-free key set of length > 1 must disagree somewhere")
}
