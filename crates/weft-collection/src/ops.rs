// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Free set operations over abstract collections.
//!
//! These operate through the [`Collection`] capability rather than concrete
//! container types, so one call may mix a [`crate::Set`], a
//! [`crate::RoleMap`], and any caller-supplied implementation.

use crate::{Collection, Set};

/// Returns every member seen in any of the collections.
///
/// Union over zero collections is the empty set.
pub fn union<T: Ord + Clone>(collections: &[&dyn Collection<T>]) -> Set<T> {
    let mut out = Set::new();
    for collection in collections {
        collection.each(&mut |member| {
            let _ = out.add(member.clone());
            true
        });
    }
    out
}

/// Returns the members present in every collection.
///
/// Intersection over zero collections is the empty set by convention; over
/// one collection it is a copy of that collection.
pub fn intersection<T: Ord + Clone>(collections: &[&dyn Collection<T>]) -> Set<T> {
    let mut out = Set::new();
    let Some((first, rest)) = collections.split_first() else {
        return out;
    };
    first.each(&mut |member| {
        if rest.iter().all(|c| c.has(member)) {
            let _ = out.add(member.clone());
        }
        true
    });
    out
}

/// Returns the members of `a` absent from `b`.
pub fn difference<T: Ord + Clone>(a: &dyn Collection<T>, b: &dyn Collection<T>) -> Set<T> {
    let mut out = Set::new();
    a.each(&mut |member| {
        if !b.has(member) {
            let _ = out.add(member.clone());
        }
        true
    });
    out
}
