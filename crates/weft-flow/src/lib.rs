// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! weft-flow: deterministic message-flow graph synthesis.
//!
//! Consumes an ordered collection of application configurations (each a set
//! of handlers declaring which message names they consume and produce) and
//! produces a renderer-agnostic [`FlowGraph`]: application sub-containers,
//! handler nodes, message-typed edges with merged sorted labels, and
//! synthesized foreign endpoints for message traffic that enters or leaves
//! the modeled application set.
//!
//! # Determinism Invariant
//!
//! Equal inputs yield byte-equal canonical graphs. Everywhere an unordered
//! container could leak its enumeration order into observable output —
//! edge labels, node ordering, foreign endpoints — the builder sorts before
//! emission. [`FlowGraph::digest`] exists so tests and tools can assert
//! this cheaply.
//!
//! # Failure Semantics
//!
//! Synthesis never fails on structurally valid input. Configuration
//! inconsistencies (a message name registered with disagreeing kinds) are
//! accumulated as [`Diagnostic`] values and returned beside the graph; a
//! best-effort visualization beats a hard failure for a diagnostic tool.
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

mod config;
mod diagnostic;
mod graph;
mod synthesize;

pub use config::{ApplicationConfig, HandlerConfig, HandlerType, Identity, MessageUse};
pub use diagnostic::{check_declared_roles, Diagnostic};
pub use graph::{
    make_foreign_node_id, make_handler_node_id, ApplicationGroup, CanonicalEncodeError, FlowEdge,
    FlowGraph, ForeignDirection, ForeignNode, HandlerNode, NodeId,
};
pub use synthesize::{synthesize, Synthesis};
