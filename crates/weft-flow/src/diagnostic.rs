// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Configuration-consistency diagnostics.
//!
//! Warning-class defects. They are surfaced to the caller beside the graph
//! and never abort synthesis.

use std::fmt;

use serde::{Deserialize, Serialize};
use weft_collection::RoleMap;
use weft_message::{Kind, MessageName, Role};

use crate::config::HandlerConfig;

/// A non-fatal configuration defect found while synthesizing or validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// The same message name was registered with disagreeing kinds across
    /// applications. The first-seen kind stays in the index.
    KindConflict {
        /// The message name in conflict.
        name: MessageName,
        /// The kind already recorded for the name.
        recorded: Kind,
        /// The disagreeing kind that was dropped.
        conflicting: Kind,
        /// Display name of the application that supplied the conflict.
        application: String,
    },
    /// A handler's declared role for a message disagrees with the message's
    /// structurally derived kind.
    RoleDisagreement {
        /// The message name in disagreement.
        name: MessageName,
        /// The role the configuration declares.
        declared: Role,
        /// The kind derived from the message's capability markers.
        derived: Kind,
        /// Display name of the handler carrying the declaration.
        handler: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::KindConflict {
                name,
                recorded,
                conflicting,
                application,
            } => write!(
                f,
                "application {application:?} registers {name} as {conflicting}, but it is already registered as {recorded}"
            ),
            Diagnostic::RoleDisagreement {
                name,
                declared,
                derived,
                handler,
            } => write!(
                f,
                "handler {handler:?} declares {name} as {declared}, but its capability markers derive {derived}"
            ),
        }
    }
}

/// Checks a handler's message uses against a declared role assignment map.
///
/// Returns one [`Diagnostic::RoleDisagreement`] per message whose declared
/// role disagrees with its derived kind. Messages absent from `declared`
/// are skipped; declaring roles is optional for a provider.
pub fn check_declared_roles(
    handler: &HandlerConfig,
    declared: &RoleMap<MessageName>,
) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (name, message_use) in &handler.messages {
        let Some(role) = declared.role_of(name) else {
            continue;
        };
        if message_use.kind.agrees_with(role) {
            continue;
        }
        out.push(Diagnostic::RoleDisagreement {
            name: name.clone(),
            declared: role,
            derived: message_use.kind,
            handler: handler.identity.name.clone(),
        });
    }
    out
}
