// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Renderer-facing flow graph.
//!
//! Built fresh per synthesis call from immutable input configurations and
//! never mutated afterwards. A renderer needs nothing beyond these types to
//! produce graphical or tabular output.

use std::collections::BTreeSet;
use std::fmt;

use blake3::Hasher;
use ciborium::ser::into_writer;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use weft_message::Kind;

use crate::config::HandlerType;

/// Canonical 256-bit identifier for a graph node.
///
/// Node ids are stable, label-derived blake3 hashes with a domain prefix
/// per node class, so a handler keeps its id across syntheses and handler
/// ids can never collide with foreign-endpoint ids.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(pub [u8; 32]);

impl NodeId {
    /// Returns the canonical byte representation of this id.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Produces a stable, domain-separated node id (prefix `b"handler:"`) for a
/// handler's external key.
pub fn make_handler_node_id(handler_key: &str) -> NodeId {
    let mut hasher = Hasher::new();
    hasher.update(b"handler:");
    hasher.update(handler_key.as_bytes());
    NodeId(hasher.finalize().into())
}

/// Produces a stable, domain-separated node id (prefix `b"foreign:"`) for a
/// synthesized foreign endpoint. One id per (direction, kind) pair.
pub fn make_foreign_node_id(direction: ForeignDirection, kind: Kind) -> NodeId {
    let mut hasher = Hasher::new();
    hasher.update(b"foreign:");
    hasher.update(direction.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(kind.as_str().as_bytes());
    NodeId(hasher.finalize().into())
}

/// A handler node inside an application sub-container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerNode {
    /// Stable node id derived from the handler's external key.
    pub id: NodeId,
    /// Display label (the handler's human name).
    pub label: String,
    /// Handler class; renderers derive styling from it via
    /// [`HandlerType::style_hint`].
    pub handler_type: HandlerType,
}

/// An application sub-container grouping its handler nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationGroup {
    /// Display label derived from the application identity's name.
    pub label: String,
    /// The application's stable external key.
    pub key: String,
    /// Handler nodes, ordered by distinct message count ascending (stable).
    pub handlers: Vec<HandlerNode>,
}

/// A directed edge carrying one or more message labels.
///
/// Edges are idempotent per (source, target): a second message flowing
/// between the same pair of nodes merges into the existing edge's label set
/// instead of creating a parallel edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Source node.
    pub source: NodeId,
    /// Destination node.
    pub target: NodeId,
    /// Merged message labels (`<short name><kind marker>`), kept sorted by
    /// the container.
    pub labels: BTreeSet<String>,
    /// Representative kind for styling: the kind belonging to the
    /// lexicographically first label.
    pub kind: Kind,
}

impl FlowEdge {
    /// Creates an edge with a single label.
    #[must_use]
    pub fn new(source: NodeId, target: NodeId, label: String, kind: Kind) -> Self {
        let mut labels = BTreeSet::new();
        labels.insert(label);
        Self {
            source,
            target,
            labels,
            kind,
        }
    }

    /// Merges another message into this edge. Keeps the representative kind
    /// in step with the lexicographically first label.
    pub fn merge_label(&mut self, label: String, kind: Kind) {
        let leads = self
            .labels
            .iter()
            .next()
            .is_none_or(|first| label.as_str() < first.as_str());
        if leads {
            self.kind = kind;
        }
        let _ = self.labels.insert(label);
    }

    /// Display text: the sorted labels joined with newlines, guaranteeing a
    /// deterministic rendering regardless of discovery order.
    #[must_use]
    pub fn label_text(&self) -> String {
        self.labels.iter().cloned().collect::<Vec<_>>().join("\n")
    }
}

/// Direction of a synthesized foreign endpoint, relative to the modeled
/// application set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForeignDirection {
    /// Stands in for producers outside the modeled applications.
    Producer,
    /// Stands in for consumers outside the modeled applications.
    Consumer,
}

impl ForeignDirection {
    /// Returns the textual form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ForeignDirection::Producer => "producer",
            ForeignDirection::Consumer => "consumer",
        }
    }
}

impl fmt::Display for ForeignDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthesized endpoint for message traffic with no counterpart inside
/// the modeled application set. At most one exists per (direction, kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignNode {
    /// Stable node id (see [`make_foreign_node_id`]).
    pub id: NodeId,
    /// Kind tag for styling.
    pub kind: Kind,
    /// Whether this endpoint produces or consumes.
    pub direction: ForeignDirection,
}

impl ForeignNode {
    /// Display label, e.g. `foreign event consumer`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("foreign {} {}", self.kind, self.direction)
    }
}

/// Error returned when canonical encoding fails.
///
/// CBOR serialization into a growable buffer has no practical failure mode,
/// but the encoder's contract is fallible and this crate never panics.
#[derive(Debug, Error)]
#[error("canonical CBOR encoding failed: {0}")]
pub struct CanonicalEncodeError(#[from] ciborium::ser::Error<std::io::Error>);

/// The synthesis output: application sub-containers, handler nodes, merged
/// edges, and foreign endpoints.
///
/// Application order follows input order (it affects visual grouping only);
/// edges and foreign nodes are sorted so equal inputs yield byte-equal
/// canonical forms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    /// Application sub-containers, in input order.
    pub applications: Vec<ApplicationGroup>,
    /// Directed edges, sorted by (source, target).
    pub edges: Vec<FlowEdge>,
    /// Foreign endpoints, sorted by id.
    pub foreign: Vec<ForeignNode>,
}

impl FlowGraph {
    /// Canonical serialization (edges and foreign nodes re-sorted) for
    /// hashing and snapshot comparison.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, CanonicalEncodeError> {
        let mut g = self.clone();
        g.edges.sort_by(|a, b| (a.source, a.target).cmp(&(b.source, b.target)));
        g.foreign.sort_by_key(|f| f.id);
        let mut bytes = Vec::new();
        into_writer(&g, &mut bytes)?;
        Ok(bytes)
    }

    /// Blake3 hash of the canonical form.
    pub fn digest(&self) -> Result<[u8; 32], CanonicalEncodeError> {
        Ok(blake3::hash(&self.to_canonical_bytes()?).into())
    }
}
