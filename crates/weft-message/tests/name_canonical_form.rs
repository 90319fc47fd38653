// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixture coverage for the canonical rendering templates.
//!
//! These strings are wire-visible identity: a change to any template breaks
//! cross-implementation identity guarantees, so each composite shape is
//! pinned here exactly.

use weft_message::{ChanDir, MessageName, MessageType, StructField, TypeExpr};

fn named(scope: &str, name: &str) -> TypeExpr {
    TypeExpr::named(scope, name)
}

#[test]
fn named_type_is_scope_dot_name() {
    let name = MessageName::for_type(&named("example.com/billing", "Invoice"));
    assert_eq!(name.as_str(), "example.com/billing.Invoice");
}

#[test]
fn predeclared_type_has_no_qualifier() {
    let name = MessageName::for_type(&named("", "int"));
    assert_eq!(name.as_str(), "int");
}

#[test]
fn pointer_slice_and_array_templates() {
    let elem = named("example.com/billing", "Invoice");
    assert_eq!(
        MessageName::for_type(&TypeExpr::pointer(elem.clone())).as_str(),
        "*example.com/billing.Invoice"
    );
    assert_eq!(
        MessageName::for_type(&TypeExpr::slice(elem.clone())).as_str(),
        "[]example.com/billing.Invoice"
    );
    assert_eq!(
        MessageName::for_type(&TypeExpr::Array {
            len: 8,
            elem: Box::new(elem),
        })
        .as_str(),
        "[8]example.com/billing.Invoice"
    );
}

#[test]
fn map_template_renders_key_then_element() {
    let expr = TypeExpr::Map {
        key: Box::new(named("", "string")),
        elem: Box::new(named("example.com/billing", "Invoice")),
    };
    assert_eq!(
        MessageName::for_type(&expr).as_str(),
        "map[string]example.com/billing.Invoice"
    );
}

#[test]
fn channel_templates_cover_all_directions() {
    let elem = Box::new(named("", "int"));
    let cases = [
        (ChanDir::Recv, "<-chan int"),
        (ChanDir::Send, "chan<- int"),
        (ChanDir::Both, "chan int"),
    ];
    for (dir, want) in cases {
        let expr = TypeExpr::Chan {
            dir,
            elem: elem.clone(),
        };
        assert_eq!(MessageName::for_type(&expr).as_str(), want);
    }
}

#[test]
fn struct_template_labels_fields_and_elides_anonymous_labels() {
    let expr = TypeExpr::Struct {
        fields: vec![
            StructField {
                label: Some("Total".to_owned()),
                ty: named("", "int"),
            },
            StructField {
                label: None,
                ty: named("example.com/billing", "Header"),
            },
        ],
    };
    assert_eq!(
        MessageName::for_type(&expr).as_str(),
        "struct { Total int; example.com/billing.Header }"
    );
}

#[test]
fn empty_struct_renders_closed_braces() {
    let expr = TypeExpr::Struct { fields: vec![] };
    assert_eq!(MessageName::for_type(&expr).as_str(), "struct {}");
}

#[test]
fn func_template_parenthesizes_multiple_results_only() {
    let none = TypeExpr::Func {
        params: vec![named("", "int")],
        results: vec![],
    };
    assert_eq!(MessageName::for_type(&none).as_str(), "func(int)");

    let one = TypeExpr::Func {
        params: vec![named("", "int"), named("", "string")],
        results: vec![named("", "bool")],
    };
    assert_eq!(MessageName::for_type(&one).as_str(), "func(int, string) bool");

    let many = TypeExpr::Func {
        params: vec![],
        results: vec![named("", "bool"), named("", "error")],
    };
    assert_eq!(MessageName::for_type(&many).as_str(), "func() (bool, error)");
}

#[test]
fn nested_composites_recurse_through_every_template() {
    let expr = TypeExpr::Map {
        key: Box::new(named("example.com/billing", "InvoiceId")),
        elem: Box::new(TypeExpr::slice(TypeExpr::pointer(named(
            "example.com/billing",
            "Invoice",
        )))),
    };
    let name = MessageName::for_type(&expr);
    assert_eq!(
        name.as_str(),
        "map[example.com/billing.InvoiceId][]*example.com/billing.Invoice"
    );
    assert_eq!(name.unqualified(), "map[InvoiceId][]*Invoice");
}

#[test]
fn derivation_is_deterministic_across_calls() {
    let expr = TypeExpr::slice(named("example.com/shipping", "Manifest"));
    let first = MessageName::for_type(&expr);
    let second = MessageName::for_type(&expr);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn display_form_of_message_type_omits_qualifiers() {
    let ty = MessageType::of(TypeExpr::slice(named("example.com/billing", "Invoice")));
    assert_eq!(ty.to_string(), "[]Invoice");
    assert_eq!(ty.name().as_str(), "[]example.com/billing.Invoice");
}

#[test]
fn unqualified_strips_hyphenated_scopes_whole() {
    let name = MessageName::for_type(&named("example-corp.com/billing", "Invoice"));
    assert_eq!(name.unqualified(), "Invoice");
}
