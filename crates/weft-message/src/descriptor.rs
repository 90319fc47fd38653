// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Registration-time message descriptors.

use crate::kind::{CapabilitySet, InvalidMessageError, Kind};
use crate::name::{MessageName, MessageType};
use crate::type_expr::TypeExpr;

/// Everything the identity model needs to know about a message value: the
/// structural description of its underlying type plus the capability
/// markers it satisfies.
///
/// Descriptors are handed over by the upstream configuration provider; the
/// model never inspects live values. All derivations fail with
/// [`InvalidMessageError`] when the capability set does not classify the
/// value as exactly one kind of message — validate with
/// [`CapabilitySet::is_message`] before deriving.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageDescriptor {
    type_expr: TypeExpr,
    capabilities: CapabilitySet,
}

impl MessageDescriptor {
    /// Builds a descriptor from its parts.
    #[must_use]
    pub fn new(type_expr: TypeExpr, capabilities: CapabilitySet) -> Self {
        Self {
            type_expr,
            capabilities,
        }
    }

    /// Returns the structural type description.
    #[must_use]
    pub fn type_expr(&self) -> &TypeExpr {
        &self.type_expr
    }

    /// Returns the capability markers.
    #[must_use]
    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    /// Derives the canonical name of the message's type.
    pub fn name(&self) -> Result<MessageName, InvalidMessageError> {
        self.capabilities.kind()?;
        Ok(MessageName::for_type(&self.type_expr))
    }

    /// Derives the typed handle for the message's type.
    pub fn message_type(&self) -> Result<MessageType, InvalidMessageError> {
        self.capabilities.kind()?;
        Ok(MessageType::of(self.type_expr.clone()))
    }

    /// Derives the message's kind from its capability markers.
    pub fn kind(&self) -> Result<Kind, InvalidMessageError> {
        self.capabilities.kind()
    }
}
