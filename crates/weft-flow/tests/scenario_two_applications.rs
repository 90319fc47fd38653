// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end scenario: two applications, one cross-application flow.
//!
//! App1 carries an aggregate consuming a command and producing an event;
//! App2 carries a projection consuming that event. The command has no
//! in-model producer, so a foreign command producer must appear.
#![allow(clippy::expect_used)]

mod common;

use common::{application, consumes, handler, produces};
use weft_flow::{
    make_handler_node_id, synthesize, ForeignDirection, HandlerType,
};
use weft_message::Kind;

#[test]
fn cross_application_flow_with_foreign_command_source() {
    let apps = vec![
        application(
            "App1",
            "app-1",
            vec![handler(
                "A1",
                "a1-key",
                HandlerType::Aggregate,
                vec![
                    consumes("CommandX", Kind::Command),
                    produces("EventY", Kind::Event),
                ],
            )],
        ),
        application(
            "App2",
            "app-2",
            vec![handler(
                "P1",
                "p1-key",
                HandlerType::Projection,
                vec![consumes("EventY", Kind::Event)],
            )],
        ),
    ];

    let synthesis = synthesize(&apps);
    assert!(synthesis.diagnostics.is_empty());
    let graph = synthesis.graph;

    // Two application groups in input order, one handler node each.
    assert_eq!(graph.applications.len(), 2);
    assert_eq!(graph.applications[0].label, "App1");
    assert_eq!(graph.applications[1].label, "App2");
    assert_eq!(graph.applications[0].handlers.len(), 1);
    assert_eq!(graph.applications[1].handlers.len(), 1);

    let a1 = make_handler_node_id("a1-key");
    let p1 = make_handler_node_id("p1-key");
    assert_eq!(graph.applications[0].handlers[0].id, a1);
    assert_eq!(graph.applications[1].handlers[0].id, p1);

    // One foreign producer of kind command, wired to A1.
    assert_eq!(graph.foreign.len(), 1);
    let foreign = graph.foreign[0];
    assert_eq!(foreign.kind, Kind::Command);
    assert_eq!(foreign.direction, ForeignDirection::Producer);

    // Exactly two edges: A1 -> P1 for the event, foreign -> A1 for the
    // command, each labeled with the message's marker form.
    assert_eq!(graph.edges.len(), 2);

    let event_edge = graph
        .edges
        .iter()
        .find(|e| e.source == a1 && e.target == p1)
        .expect("missing A1 -> P1 edge");
    assert_eq!(event_edge.label_text(), "EventY!");
    assert_eq!(event_edge.kind, Kind::Event);

    let command_edge = graph
        .edges
        .iter()
        .find(|e| e.source == foreign.id && e.target == a1)
        .expect("missing foreign -> A1 edge");
    assert_eq!(command_edge.label_text(), "CommandX?");
    assert_eq!(command_edge.kind, Kind::Command);
}

#[test]
fn handler_ordering_within_a_group_is_by_message_count() {
    let apps = vec![application(
        "App",
        "app-1",
        vec![
            handler(
                "Busy",
                "busy-key",
                HandlerType::Process,
                vec![
                    consumes("EventA", Kind::Event),
                    consumes("EventB", Kind::Event),
                    produces("CommandC", Kind::Command),
                ],
            ),
            handler(
                "Quiet",
                "quiet-key",
                HandlerType::Projection,
                vec![consumes("EventA", Kind::Event)],
            ),
        ],
    )];

    let graph = synthesize(&apps).graph;
    let labels: Vec<&str> = graph.applications[0]
        .handlers
        .iter()
        .map(|h| h.label.as_str())
        .collect();
    assert_eq!(labels, ["Quiet", "Busy"]);
}
