//! The typed chain state: a mapping from discriminator to typed field
//! value (spec.md §3.2). Backed by a `BTreeMap`, never a `HashMap` — the
//! trie's key enumeration and the assembler's emit order are both strict
//! ascending-discriminator order, and a `BTreeMap` makes that order the
//! type's own invariant rather than something callers must remember to
//! re-sort.

use crate::compat::BTreeMap;
use crate::state::discriminator::{Discriminator, FieldValue};

/// A fully or partially populated chain state. Discriminators absent from
/// the map are "unset" (spec.md §4.3: "Missing discriminators leave the
/// corresponding state field unset").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    fields: BTreeMap<Discriminator, FieldValue>,
}

impl State {
    pub fn new() -> Self {
        Self { fields: BTreeMap::new() }
    }

    pub fn get(&self, disc: Discriminator) -> Option<&FieldValue> {
        self.fields.get(&disc)
    }

    pub fn set(&mut self, disc: Discriminator, value: FieldValue) {
        self.fields.insert(disc, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Discriminator, &FieldValue)> {
        self.fields.iter().map(|(d, v)| (*d, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
