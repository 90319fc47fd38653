// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-pass flow-graph synthesis.

use std::collections::BTreeMap;

use tracing::warn;
use weft_collection::{difference, Set};
use weft_message::{Kind, MessageName};

use crate::config::{ApplicationConfig, HandlerConfig};
use crate::diagnostic::Diagnostic;
use crate::graph::{
    make_foreign_node_id, make_handler_node_id, ApplicationGroup, FlowEdge, FlowGraph,
    ForeignDirection, ForeignNode, HandlerNode, NodeId,
};

/// The result of one synthesis call: the graph plus every warning-class
/// inconsistency found along the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Synthesis {
    /// The synthesized flow graph.
    pub graph: FlowGraph,
    /// Accumulated configuration diagnostics, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Synthesizes a flow graph from an ordered list of application
/// configurations.
///
/// Never fails on structurally valid input: the degenerate single
/// application with no handlers yields one empty sub-container, no edges,
/// and no foreign nodes. Input order affects visual grouping only, never
/// the edge set.
pub fn synthesize(applications: &[ApplicationConfig]) -> Synthesis {
    let mut builder = Builder::default();
    for application in applications {
        builder.application(application);
    }
    builder.finish()
}

/// Per-invocation synthesis state. All of it is private to one call;
/// concurrent syntheses share nothing.
#[derive(Default)]
struct Builder {
    groups: Vec<ApplicationGroup>,
    /// Process-wide Name → Kind index. First-seen-wins on conflict: earlier
    /// edges were already labeled with the first kind, so rewriting the
    /// index mid-pass would tie styling to input order even harder.
    kinds: BTreeMap<MessageName, Kind>,
    producers: BTreeMap<MessageName, Set<NodeId>>,
    consumers: BTreeMap<MessageName, Set<NodeId>>,
    edges: BTreeMap<(NodeId, NodeId), FlowEdge>,
    diagnostics: Vec<Diagnostic>,
}

impl Builder {
    fn application(&mut self, application: &ApplicationConfig) {
        let mut group = ApplicationGroup {
            label: application.identity.name.clone(),
            key: application.identity.key.clone(),
            handlers: Vec::new(),
        };

        // Stable sort by distinct message count, ascending: a deterministic,
        // visually consistent layout independent of provider map order.
        let mut ordered: Vec<&HandlerConfig> = application.handlers.iter().collect();
        ordered.sort_by_key(|handler| handler.messages.len());

        for handler in ordered {
            let node = make_handler_node_id(&handler.identity.key);
            group.handlers.push(HandlerNode {
                id: node,
                label: handler.identity.name.clone(),
                handler_type: handler.handler_type,
            });

            for (name, message_use) in &handler.messages {
                let kind = self.record_kind(name, message_use.kind, &application.identity.name);
                let label = edge_label(name, kind);

                if message_use.consumed {
                    // Wire from every producer registered so far; later
                    // producers wire back to this handler symmetrically, so
                    // the final edge set is visitation-order independent.
                    let known: Vec<NodeId> = self
                        .producers
                        .get(name)
                        .map(|set| set.iter().copied().collect())
                        .unwrap_or_default();
                    for producer in known {
                        self.add_edge(producer, node, label.clone(), kind);
                    }
                    let _ = self.consumers.entry(name.clone()).or_default().add(node);
                }

                if message_use.produced {
                    let known: Vec<NodeId> = self
                        .consumers
                        .get(name)
                        .map(|set| set.iter().copied().collect())
                        .unwrap_or_default();
                    for consumer in known {
                        self.add_edge(node, consumer, label.clone(), kind);
                    }
                    let _ = self.producers.entry(name.clone()).or_default().add(node);
                }
            }
        }

        self.groups.push(group);
    }

    /// Records a message's kind in the process-wide index and returns the
    /// kind that governs the name (the first one seen). Disagreement is a
    /// configuration defect, surfaced but never fatal.
    fn record_kind(&mut self, name: &MessageName, kind: Kind, application: &str) -> Kind {
        if let Some(recorded) = self.kinds.get(name) {
            let recorded = *recorded;
            if recorded != kind {
                warn!(
                    name = %name,
                    recorded = %recorded,
                    conflicting = %kind,
                    application,
                    "kind disagreement for message name; keeping first-seen kind"
                );
                self.diagnostics.push(Diagnostic::KindConflict {
                    name: name.clone(),
                    recorded,
                    conflicting: kind,
                    application: application.to_owned(),
                });
            }
            return recorded;
        }
        self.kinds.insert(name.clone(), kind);
        kind
    }

    /// Idempotent edge creation: an existing (source, target) edge absorbs
    /// the new label instead of spawning a parallel edge.
    fn add_edge(&mut self, source: NodeId, target: NodeId, label: String, kind: Kind) {
        match self.edges.entry((source, target)) {
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                slot.get_mut().merge_label(label, kind);
            }
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(FlowEdge::new(source, target, label, kind));
            }
        }
    }

    /// Synthesizes foreign endpoints for unbalanced flows, then assembles
    /// the final graph.
    fn finish(mut self) -> Synthesis {
        let produced: Set<MessageName> = self.producers.keys().cloned().collect();
        let consumed: Set<MessageName> = self.consumers.keys().cloned().collect();
        let mut foreign: BTreeMap<NodeId, ForeignNode> = BTreeMap::new();

        // Producers with no consumer anywhere: traffic leaves the modeled
        // set, so it flows to a per-kind foreign consumer.
        for name in difference(&produced, &consumed).iter() {
            let Some(kind) = self.kinds.get(name).copied() else {
                continue;
            };
            let endpoint =
                foreign_endpoint(&mut foreign, ForeignDirection::Consumer, kind);
            let label = edge_label(name, kind);
            let sources: Vec<NodeId> = self
                .producers
                .get(name)
                .map(|set| set.iter().copied().collect())
                .unwrap_or_default();
            for source in sources {
                self.add_edge(source, endpoint, label.clone(), kind);
            }
        }

        // Consumers with no producer anywhere: traffic originates outside.
        for name in difference(&consumed, &produced).iter() {
            let Some(kind) = self.kinds.get(name).copied() else {
                continue;
            };
            let endpoint =
                foreign_endpoint(&mut foreign, ForeignDirection::Producer, kind);
            let label = edge_label(name, kind);
            let targets: Vec<NodeId> = self
                .consumers
                .get(name)
                .map(|set| set.iter().copied().collect())
                .unwrap_or_default();
            for target in targets {
                self.add_edge(endpoint, target, label.clone(), kind);
            }
        }

        Synthesis {
            graph: FlowGraph {
                applications: self.groups,
                edges: self.edges.into_values().collect(),
                foreign: foreign.into_values().collect(),
            },
            diagnostics: self.diagnostics,
        }
    }
}

/// Lazily creates the per-(direction, kind) foreign node and returns its id.
fn foreign_endpoint(
    foreign: &mut BTreeMap<NodeId, ForeignNode>,
    direction: ForeignDirection,
    kind: Kind,
) -> NodeId {
    let id = make_foreign_node_id(direction, kind);
    foreign.entry(id).or_insert(ForeignNode {
        id,
        kind,
        direction,
    });
    id
}

/// Compact edge label: short display name plus the kind's marker character.
fn edge_label(name: &MessageName, kind: Kind) -> String {
    format!("{}{}", name.unqualified(), kind.marker())
}
