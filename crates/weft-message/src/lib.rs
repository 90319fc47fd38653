// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! weft-message: canonical message identity and classification.
//!
//! A message is a typed unit of data flowing between handlers, classified as
//! a command, an event, or a timeout. This crate derives a canonical,
//! collision-resistant textual identity ([`MessageName`]) for a message's
//! underlying type, pairs it with a structural handle ([`MessageType`]), and
//! classifies messages two ways: declaratively ([`Role`], assigned by handler
//! configuration) and structurally ([`Kind`], derived from the capability
//! markers a value satisfies).
//!
//! # Identity Invariant
//!
//! Two messages of the same underlying type always produce equal names, and
//! `MessageName` compares by value. The canonical form is reproduced by a
//! fixed recursive rendering over [`TypeExpr`] so that independently derived
//! names (and names decoded from the wire) byte-compare equal.
//!
//! # Determinism Invariant
//!
//! Name derivation is referentially transparent: same type expression, same
//! string, across calls and across processes. [`NameCache`] memoizes the
//! derivation per concrete type; it is an acceleration, never a source of
//! truth.
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

mod descriptor;
mod kind;
mod name;
mod role;
mod type_expr;

pub use descriptor::MessageDescriptor;
pub use kind::{CapabilitySet, InvalidMessageError, Kind};
pub use name::{EmptyNameError, MessageName, MessageType, NameCache, NameDecodeError};
pub use role::{InvalidRoleEncodingError, InvalidRoleError, Role, RoleConstraintError};
pub use type_expr::{ChanDir, StructField, TypeExpr};
