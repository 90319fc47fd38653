// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! weft-collection: deterministic set and role-map algebra.
//!
//! The flow engine indexes messages by name and by type; this crate supplies
//! the containers it does that with. [`Set`] and [`RoleMap`] are the two
//! concrete shapes; the [`Collection`] capability trait keeps the free
//! set-operations ([`union`], [`intersection`], [`difference`]) agnostic of
//! the concrete container, so callers may mix implementations.
//!
//! # Determinism Invariant
//!
//! Operations are deterministic in *content*, never in enumeration order.
//! No public API promises an iteration order; any consumer that needs stable
//! output (the flow engine does) must sort before emission.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod ops;
mod role_map;
mod set;

pub use ops::{difference, intersection, union};
pub use role_map::RoleMap;
pub use set::Set;

/// Capability contract for anything the set operations can consume.
///
/// Object-safe so heterogeneous container implementations can be mixed in
/// one call. Iteration via [`Collection::each`] is lazy, restartable, and
/// finite; it visits every member exactly once in no defined order, and
/// stops early when the callback returns `false`.
pub trait Collection<T> {
    /// True when `member` is present.
    fn has(&self, member: &T) -> bool;

    /// Number of members.
    fn len(&self) -> usize;

    /// Visits every member until exhausted or the callback returns `false`.
    fn each(&self, f: &mut dyn FnMut(&T) -> bool);

    /// True when the collection has no members. An absent collection and an
    /// explicitly empty one are indistinguishable.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
