// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Declared message roles and their wire encoding.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::kind::Kind;

/// Error returned when parsing a role from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized message role {0:?}")]
pub struct InvalidRoleError(pub String);

/// Error returned when decoding a role from its binary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRoleEncodingError {
    /// The input was not exactly one byte.
    #[error("role encoding must be exactly one byte, got {0} bytes")]
    Length(usize),
    /// The byte was outside the fixed alphabet `{C, E, T}`.
    #[error("unrecognized role byte {0:#04x}")]
    UnknownByte(u8),
}

/// Error returned by [`Role::must_be`] / [`Role::must_not_be`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleConstraintError {
    /// The role was outside the allowed set.
    #[error("role {actual} is not one of the allowed roles {allowed:?}")]
    MustBe {
        /// The role that was checked.
        actual: Role,
        /// The allowed set.
        allowed: Vec<Role>,
    },
    /// The role was inside the denied set.
    #[error("role {actual} is one of the denied roles {denied:?}")]
    MustNotBe {
        /// The role that was checked.
        actual: Role,
        /// The denied set.
        denied: Vec<Role>,
    },
}

/// Declared three-way classification of a message.
///
/// Total and closed: every message belongs to exactly one role, and an
/// unrecognized role value is a parse error at the trust boundary — it is
/// never coerced into a default. Contrast with [`Kind`], which expresses the
/// same three-way split but is derived per-value from capability markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// A request to change state, addressed to exactly one handler.
    Command,
    /// A fact about something that has happened.
    Event,
    /// A deadline message a handler schedules for itself.
    Timeout,
}

impl Role {
    /// All roles, in canonical order.
    pub const ALL: [Role; 3] = [Role::Command, Role::Event, Role::Timeout];

    /// Returns the textual form accepted by the parser.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Command => "command",
            Role::Event => "event",
            Role::Timeout => "timeout",
        }
    }

    /// Returns the one-character discriminator used in compact edge labels:
    /// `?` command, `!` event, `@` timeout.
    #[must_use]
    pub fn marker(self) -> char {
        match self {
            Role::Command => '?',
            Role::Event => '!',
            Role::Timeout => '@',
        }
    }

    /// Returns the structural classification equivalent to this role.
    #[must_use]
    pub fn kind(self) -> Kind {
        match self {
            Role::Command => Kind::Command,
            Role::Event => Kind::Event,
            Role::Timeout => Kind::Timeout,
        }
    }

    /// Closed-set membership test.
    #[must_use]
    pub fn is(self, candidates: &[Role]) -> bool {
        candidates.contains(&self)
    }

    /// Requires membership in `allowed`; the error carries both sides so the
    /// caller's `?` site reads as the assertion it is.
    pub fn must_be(self, allowed: &[Role]) -> Result<(), RoleConstraintError> {
        if self.is(allowed) {
            Ok(())
        } else {
            Err(RoleConstraintError::MustBe {
                actual: self,
                allowed: allowed.to_vec(),
            })
        }
    }

    /// Requires absence from `denied`.
    pub fn must_not_be(self, denied: &[Role]) -> Result<(), RoleConstraintError> {
        if self.is(denied) {
            Err(RoleConstraintError::MustNotBe {
                actual: self,
                denied: denied.to_vec(),
            })
        } else {
            Ok(())
        }
    }

    /// Encodes the role as its fixed single-byte wire form (`C`/`E`/`T`).
    #[must_use]
    pub fn marshal_binary(self) -> [u8; 1] {
        match self {
            Role::Command => [b'C'],
            Role::Event => [b'E'],
            Role::Timeout => [b'T'],
        }
    }

    /// Decodes a role from its wire form. Exactly one byte from the fixed
    /// alphabet; anything else is an [`InvalidRoleEncodingError`].
    pub fn unmarshal_binary(data: &[u8]) -> Result<Self, InvalidRoleEncodingError> {
        match data {
            [b'C'] => Ok(Role::Command),
            [b'E'] => Ok(Role::Event),
            [b'T'] => Ok(Role::Timeout),
            [other] => Err(InvalidRoleEncodingError::UnknownByte(*other)),
            _ => Err(InvalidRoleEncodingError::Length(data.len())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidRoleError;

    /// Accepts exactly `command`, `event`, and `timeout` — case-sensitive,
    /// no trimming. This is the `Validate` gate for role values arriving
    /// from outside the type system.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "command" => Ok(Role::Command),
            "event" => Ok(Role::Event),
            "timeout" => Ok(Role::Timeout),
            other => Err(InvalidRoleError(other.to_owned())),
        }
    }
}
