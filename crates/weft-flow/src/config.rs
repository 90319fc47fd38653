// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Upstream input contract.
//!
//! The configuration provider — live-object introspection and static source
//! analysis are both valid producers — hands the engine these plain data
//! values. The engine never calls back into the provider.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use weft_message::{Kind, MessageName};

/// Human name plus stable external key for an application or handler.
///
/// The key is an opaque UUID-shaped string: two handlers with equal keys are
/// the same logical handler across reconfiguration, whatever their display
/// names say.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Human-facing display name.
    pub name: String,
    /// Stable external key (opaque, UUID-shaped).
    pub key: String,
}

impl Identity {
    /// Builds an identity from its parts.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// The four handler classes the upstream provider distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerType {
    /// Consumes commands, produces events, guards an aggregate's state.
    Aggregate,
    /// Orchestrates long-running flows; consumes events/timeouts, produces
    /// commands.
    Process,
    /// Bridges to systems outside the message model.
    Integration,
    /// Builds read models from events; produces nothing.
    Projection,
}

impl HandlerType {
    /// Returns the textual form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HandlerType::Aggregate => "aggregate",
            HandlerType::Process => "process",
            HandlerType::Integration => "integration",
            HandlerType::Projection => "projection",
        }
    }

    /// Shape hint for renderers. Purely advisory; a renderer may ignore it.
    #[must_use]
    pub fn style_hint(self) -> &'static str {
        match self {
            HandlerType::Aggregate => "box",
            HandlerType::Process => "octagon",
            HandlerType::Integration => "component",
            HandlerType::Projection => "cylinder",
        }
    }
}

impl fmt::Display for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one handler uses one message name.
///
/// `consumed` and `produced` are independent; a handler may do both (the
/// graph then carries a self-edge). A use with neither flag set is inert
/// and contributes nothing beyond its kind registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageUse {
    /// The handler consumes this message.
    pub consumed: bool,
    /// The handler produces this message.
    pub produced: bool,
    /// The message's structurally derived kind.
    pub kind: Kind,
}

/// One handler's declared message contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Handler identity.
    pub identity: Identity,
    /// Handler class, used for node styling.
    pub handler_type: HandlerType,
    /// Every message name the handler references, with its usage flags.
    pub messages: BTreeMap<MessageName, MessageUse>,
}

/// One application's configuration: identity plus ordered handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application identity.
    pub identity: Identity,
    /// Handlers, in provider order.
    pub handlers: Vec<HandlerConfig>,
}
