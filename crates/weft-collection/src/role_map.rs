// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Role assignment maps.

use std::collections::BTreeMap;

use weft_message::Role;

use crate::Collection;

/// A mapping from message name or type to its declared [`Role`].
///
/// One key never maps to two different roles without an explicit overwrite
/// decision: [`RoleMap::add`] fails softly (returns `false`) when the key is
/// already present rather than silently replacing the assignment. Callers
/// that genuinely want replacement must remove first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleMap<K: Ord> {
    entries: BTreeMap<K, Role>,
}

impl<K: Ord> RoleMap<K> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Records a role assignment. Returns `false` without mutating when the
    /// key already has an assignment (even an equal one).
    pub fn add(&mut self, key: K, role: Role) -> bool {
        match self.entries.entry(key) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(role);
                true
            }
        }
    }

    /// Removes an assignment. Returns `false` when the key was absent.
    pub fn remove(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Returns the role assigned to `key`, if any.
    pub fn role_of(&self, key: &K) -> Option<Role> {
        self.entries.get(key).copied()
    }

    /// True when `key` has an assignment.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map has no assignments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Equality requires identical size, membership, and role assignment.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries == other.entries
    }

    /// Visits assignments lazily, in no defined order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Role)> {
        self.entries.iter().map(|(k, r)| (k, *r))
    }

    /// Visits only the keys assigned `role`, until exhausted or the callback
    /// returns `false`.
    pub fn range_by_role(&self, role: Role, f: &mut dyn FnMut(&K) -> bool) {
        for (key, assigned) in &self.entries {
            if *assigned != role {
                continue;
            }
            if !f(key) {
                return;
            }
        }
    }
}

impl<K: Ord + Clone> RoleMap<K> {
    /// Returns the subset map of keys assigned `role`.
    #[must_use]
    pub fn filter_by_role(&self, role: Role) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, assigned)| **assigned == role)
                .map(|(k, r)| (k.clone(), *r))
                .collect(),
        }
    }
}

impl<K: Ord> FromIterator<(K, Role)> for RoleMap<K> {
    /// Collects assignments with first-seen-wins semantics, matching
    /// [`RoleMap::add`].
    fn from_iter<I: IntoIterator<Item = (K, Role)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, role) in iter {
            let _ = map.add(key, role);
        }
        map
    }
}

impl<K: Ord> Collection<K> for RoleMap<K> {
    fn has(&self, member: &K) -> bool {
        self.contains(member)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn each(&self, f: &mut dyn FnMut(&K) -> bool) {
        for key in self.entries.keys() {
            if !f(key) {
                return;
            }
        }
    }
}
