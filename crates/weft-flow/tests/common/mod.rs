// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use std::collections::BTreeMap;

use weft_flow::{ApplicationConfig, HandlerConfig, HandlerType, Identity, MessageUse};
use weft_message::{Kind, MessageName, TypeExpr};

/// Canonical name for a fixture message type in the shared test scope.
pub fn name(type_name: &str) -> MessageName {
    MessageName::for_type(&TypeExpr::named("example.com/app", type_name))
}

/// One (name, use) entry for a handler's message map.
pub fn consumes(type_name: &str, kind: Kind) -> (MessageName, MessageUse) {
    (
        name(type_name),
        MessageUse {
            consumed: true,
            produced: false,
            kind,
        },
    )
}

/// One (name, use) entry for a handler's message map.
pub fn produces(type_name: &str, kind: Kind) -> (MessageName, MessageUse) {
    (
        name(type_name),
        MessageUse {
            consumed: false,
            produced: true,
            kind,
        },
    )
}

/// One (name, use) entry for a handler that both consumes and produces.
pub fn consumes_and_produces(type_name: &str, kind: Kind) -> (MessageName, MessageUse) {
    (
        name(type_name),
        MessageUse {
            consumed: true,
            produced: true,
            kind,
        },
    )
}

/// Builds a handler config from its parts.
pub fn handler(
    display: &str,
    key: &str,
    handler_type: HandlerType,
    uses: Vec<(MessageName, MessageUse)>,
) -> HandlerConfig {
    HandlerConfig {
        identity: Identity::new(display, key),
        handler_type,
        messages: uses.into_iter().collect::<BTreeMap<_, _>>(),
    }
}

/// Builds an application config from its parts.
pub fn application(display: &str, key: &str, handlers: Vec<HandlerConfig>) -> ApplicationConfig {
    ApplicationConfig {
        identity: Identity::new(display, key),
        handlers,
    }
}
