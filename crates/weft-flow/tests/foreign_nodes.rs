// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Foreign endpoint synthesis for unbalanced flows.

mod common;

use common::{application, consumes, handler, produces};
use weft_flow::{
    make_foreign_node_id, make_handler_node_id, synthesize, ForeignDirection, HandlerType,
};
use weft_message::Kind;

#[test]
fn unconsumed_production_flows_to_one_foreign_consumer() {
    let apps = vec![application(
        "App",
        "app-1",
        vec![handler(
            "Emitter",
            "emitter-1",
            HandlerType::Aggregate,
            vec![produces("OrderPlaced", Kind::Event)],
        )],
    )];

    let graph = synthesize(&apps).graph;

    assert_eq!(graph.foreign.len(), 1);
    let foreign = graph.foreign[0];
    assert_eq!(foreign.kind, Kind::Event);
    assert_eq!(foreign.direction, ForeignDirection::Consumer);
    assert_eq!(foreign.label(), "foreign event consumer");

    assert_eq!(graph.edges.len(), 1);
    let edge = &graph.edges[0];
    assert_eq!(edge.source, make_handler_node_id("emitter-1"));
    assert_eq!(edge.target, foreign.id);
    assert_eq!(edge.label_text(), "OrderPlaced!");
}

#[test]
fn unproduced_consumption_flows_from_one_foreign_producer() {
    let apps = vec![application(
        "App",
        "app-1",
        vec![handler(
            "Executor",
            "executor-1",
            HandlerType::Aggregate,
            vec![consumes("PlaceOrder", Kind::Command)],
        )],
    )];

    let graph = synthesize(&apps).graph;

    assert_eq!(graph.foreign.len(), 1);
    let foreign = graph.foreign[0];
    assert_eq!(foreign.kind, Kind::Command);
    assert_eq!(foreign.direction, ForeignDirection::Producer);
    assert_eq!(foreign.label(), "foreign command producer");

    assert_eq!(graph.edges.len(), 1);
    let edge = &graph.edges[0];
    assert_eq!(edge.source, foreign.id);
    assert_eq!(edge.target, make_handler_node_id("executor-1"));
    assert_eq!(edge.label_text(), "PlaceOrder?");
}

#[test]
fn foreign_endpoints_are_shared_per_kind() {
    // Two unconsumed events from two producers: one foreign consumer node,
    // one edge per producer, labels unmerged across distinct node pairs.
    let apps = vec![application(
        "App",
        "app-1",
        vec![
            handler(
                "EmitterA",
                "emitter-a",
                HandlerType::Aggregate,
                vec![produces("OrderPlaced", Kind::Event)],
            ),
            handler(
                "EmitterB",
                "emitter-b",
                HandlerType::Aggregate,
                vec![produces("InvoiceRaised", Kind::Event)],
            ),
        ],
    )];

    let graph = synthesize(&apps).graph;

    assert_eq!(graph.foreign.len(), 1);
    let expected = make_foreign_node_id(ForeignDirection::Consumer, Kind::Event);
    assert_eq!(graph.foreign[0].id, expected);
    assert_eq!(graph.edges.len(), 2);
    assert!(graph.edges.iter().all(|e| e.target == expected));
}

#[test]
fn distinct_kinds_get_distinct_foreign_endpoints() {
    let apps = vec![application(
        "App",
        "app-1",
        vec![handler(
            "Gateway",
            "gateway-1",
            HandlerType::Integration,
            vec![
                produces("OrderPlaced", Kind::Event),
                produces("ArchiveOrder", Kind::Command),
            ],
        )],
    )];

    let graph = synthesize(&apps).graph;

    assert_eq!(graph.foreign.len(), 2);
    let kinds: Vec<Kind> = graph.foreign.iter().map(|f| f.kind).collect();
    assert!(kinds.contains(&Kind::Event));
    assert!(kinds.contains(&Kind::Command));
    assert!(graph
        .foreign
        .iter()
        .all(|f| f.direction == ForeignDirection::Consumer));
}

#[test]
fn balanced_flows_synthesize_no_foreign_nodes() {
    let apps = vec![application(
        "App",
        "app-1",
        vec![
            handler(
                "Emitter",
                "emitter-1",
                HandlerType::Aggregate,
                vec![produces("OrderPlaced", Kind::Event)],
            ),
            handler(
                "Tracker",
                "tracker-1",
                HandlerType::Projection,
                vec![consumes("OrderPlaced", Kind::Event)],
            ),
        ],
    )];

    let graph = synthesize(&apps).graph;
    assert!(graph.foreign.is_empty());
}
