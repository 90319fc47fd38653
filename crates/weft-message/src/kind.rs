// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Structurally derived message kinds and capability markers.

use std::fmt;

use thiserror::Error;

use crate::role::Role;

/// Error returned when a value's capability set does not classify it as
/// exactly one kind of message.
///
/// These are programmer errors at registration time: callers are expected
/// to have validated membership via [`CapabilitySet::is_message`] first, so
/// the error is designed to propagate immediately, not be defaulted away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMessageError {
    /// The value satisfies none of the three capability markers.
    #[error("value satisfies no message capability marker (command, event, or timeout)")]
    Unclassified,
    /// The value satisfies more than one capability marker. Ambiguous sets
    /// are rejected at registration; no precedence order is ever applied.
    #[error("value satisfies multiple message capability markers ({0})")]
    Ambiguous(CapabilitySet),
}

/// The set of message capability markers a concrete value satisfies.
///
/// This is the registration-time stand-in for runtime interface inspection:
/// the upstream provider states which of the three marker capabilities the
/// value implements, and classification derives from that statement alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilitySet {
    /// The value satisfies the command marker.
    pub command: bool,
    /// The value satisfies the event marker.
    pub event: bool,
    /// The value satisfies the timeout marker.
    pub timeout: bool,
}

impl CapabilitySet {
    /// The empty set: not a message at all.
    pub const NONE: CapabilitySet = CapabilitySet {
        command: false,
        event: false,
        timeout: false,
    };

    /// A set with exactly the marker matching `kind`.
    #[must_use]
    pub fn only(kind: Kind) -> Self {
        match kind {
            Kind::Command => CapabilitySet {
                command: true,
                ..Self::NONE
            },
            Kind::Event => CapabilitySet {
                event: true,
                ..Self::NONE
            },
            Kind::Timeout => CapabilitySet {
                timeout: true,
                ..Self::NONE
            },
        }
    }

    /// Number of markers set.
    #[must_use]
    pub fn count(self) -> usize {
        usize::from(self.command) + usize::from(self.event) + usize::from(self.timeout)
    }

    /// True when the value is a well-formed message: exactly one marker.
    #[must_use]
    pub fn is_message(self) -> bool {
        self.count() == 1
    }

    /// Classifies the value. Empty and ambiguous sets both fail; see
    /// [`InvalidMessageError`].
    pub fn kind(self) -> Result<Kind, InvalidMessageError> {
        match (self.command, self.event, self.timeout) {
            (true, false, false) => Ok(Kind::Command),
            (false, true, false) => Ok(Kind::Event),
            (false, false, true) => Ok(Kind::Timeout),
            (false, false, false) => Err(InvalidMessageError::Unclassified),
            _ => Err(InvalidMessageError::Ambiguous(self)),
        }
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (set, label) in [
            (self.command, "command"),
            (self.event, "event"),
            (self.timeout, "timeout"),
        ] {
            if !set {
                continue;
            }
            if !first {
                f.write_str("+")?;
            }
            f.write_str(label)?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// Structurally derived three-way classification of a message value.
///
/// Mirrors [`Role`] exactly, but where a role is assigned declaratively by
/// handler configuration, a kind is derived from the value's capability
/// markers. In a well-formed application the two always agree; disagreement
/// is a configuration defect surfaced by the flow engine's diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// Derived from the command capability marker.
    Command,
    /// Derived from the event capability marker.
    Event,
    /// Derived from the timeout capability marker.
    Timeout,
}

impl Kind {
    /// All kinds, in canonical order.
    pub const ALL: [Kind; 3] = [Kind::Command, Kind::Event, Kind::Timeout];

    /// Returns the textual form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Command => "command",
            Kind::Event => "event",
            Kind::Timeout => "timeout",
        }
    }

    /// Same one-character discriminator as the equivalent role:
    /// `?` command, `!` event, `@` timeout.
    #[must_use]
    pub fn marker(self) -> char {
        self.role().marker()
    }

    /// Returns the declarative classification equivalent to this kind.
    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Kind::Command => Role::Command,
            Kind::Event => Role::Event,
            Kind::Timeout => Role::Timeout,
        }
    }

    /// True when the declared role matches this derived kind.
    #[must_use]
    pub fn agrees_with(self, role: Role) -> bool {
        self.role() == role
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
