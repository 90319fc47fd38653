// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical message names and typed handles.

use std::fmt;
use std::str::Utf8Error;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::type_expr::TypeExpr;

/// Error returned when marshaling the zero [`MessageName`].
///
/// The zero name is a distinguished "unset" value; putting it on the wire
/// would silently manufacture an identity, so marshaling it must fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("message name is empty")]
pub struct EmptyNameError;

/// Error returned when decoding a [`MessageName`] from wire bytes.
///
/// Decoding happens at a trust boundary, so malformed input is always a
/// recoverable error value, never a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameDecodeError {
    /// The input was empty; the zero name never round-trips.
    #[error("message name is empty")]
    Empty,
    /// The input was not valid UTF-8.
    #[error("message name is not valid UTF-8")]
    InvalidUtf8(#[from] Utf8Error),
}

/// Canonical, globally-unique textual identity for a message's underlying
/// type.
///
/// Two messages of the same underlying type always produce equal names;
/// comparison is by value, never by provenance. The canonical form is the
/// qualified rendering of the type's [`TypeExpr`] (see that type's
/// documentation for the exact templates).
///
/// `MessageName::default()` is the distinguished zero value: invalid for
/// serialization and reported by [`MessageName::is_zero`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MessageName(String);

impl MessageName {
    /// Derives the canonical name for a type expression.
    #[must_use]
    pub fn for_type(expr: &TypeExpr) -> Self {
        Self(expr.canonical())
    }

    /// Returns true for the distinguished zero (unset) name.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the canonical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a display-only rendering with scope qualifiers stripped from
    /// every identifier token (`example.com/billing.Invoice` → `Invoice`,
    /// composites recursively: `map[billing.Id]billing.Invoice` →
    /// `map[Id]Invoice`).
    ///
    /// Never use this for identity comparison; distinct canonical names may
    /// collapse to the same display text.
    #[must_use]
    pub fn unqualified(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut token = String::new();
        for ch in self.0.chars() {
            if ch.is_alphanumeric() || matches!(ch, '_' | '.' | '/' | '-') {
                token.push(ch);
            } else {
                flush_token(&mut out, &mut token);
                out.push(ch);
            }
        }
        flush_token(&mut out, &mut token);
        out
    }

    /// Encodes the name as UTF-8 text. Fails for the zero name.
    pub fn marshal_text(&self) -> Result<Vec<u8>, EmptyNameError> {
        if self.is_zero() {
            return Err(EmptyNameError);
        }
        Ok(self.0.clone().into_bytes())
    }

    /// Decodes a name from UTF-8 text. Empty input fails the same way
    /// marshaling the zero name does.
    pub fn unmarshal_text(data: &[u8]) -> Result<Self, NameDecodeError> {
        if data.is_empty() {
            return Err(NameDecodeError::Empty);
        }
        let text = std::str::from_utf8(data)?;
        Ok(Self(text.to_owned()))
    }

    /// Binary encoding: identical bytes to the text encoding, no framing.
    pub fn marshal_binary(&self) -> Result<Vec<u8>, EmptyNameError> {
        self.marshal_text()
    }

    /// Binary decoding: identical semantics to [`MessageName::unmarshal_text`].
    pub fn unmarshal_binary(data: &[u8]) -> Result<Self, NameDecodeError> {
        Self::unmarshal_text(data)
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Emits a pending identifier token with its scope qualifier stripped.
fn flush_token(out: &mut String, token: &mut String) {
    if token.is_empty() {
        return;
    }
    match token.rfind('.') {
        Some(idx) => out.push_str(&token[idx + 1..]),
        None => out.push_str(token),
    }
    token.clear();
}

/// A [`MessageName`] paired with a shared handle to the underlying type
/// definition.
///
/// The handle is sufficient to re-derive identity or print the short display
/// form. Equality, ordering, and hashing are defined purely by name, so two
/// distinct handles for the same canonical name are interchangeable for
/// graph and set purposes.
#[derive(Debug, Clone)]
pub struct MessageType {
    name: MessageName,
    expr: std::sync::Arc<TypeExpr>,
}

impl MessageType {
    /// Builds a typed handle, deriving the canonical name once.
    #[must_use]
    pub fn of(expr: TypeExpr) -> Self {
        let name = MessageName::for_type(&expr);
        Self {
            name,
            expr: std::sync::Arc::new(expr),
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> &MessageName {
        &self.name
    }

    /// Returns the underlying type expression.
    #[must_use]
    pub fn expr(&self) -> &TypeExpr {
        &self.expr
    }
}

impl PartialEq for MessageType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MessageType {}

impl PartialOrd for MessageType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MessageType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl std::hash::Hash for MessageType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for MessageType {
    /// Display form omits scope qualifiers; never use it for identity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr.display_form())
    }
}

/// Explicit, injectable memoization of name derivation.
///
/// Name derivation is referentially transparent, so the cache is purely an
/// in-process acceleration: a hit and a recomputation are indistinguishable.
/// The cache is safe to share across threads; create one per process or per
/// synthesis run as suits the caller.
#[derive(Debug, Default)]
pub struct NameCache {
    inner: RwLock<FxHashMap<TypeExpr, MessageName>>,
}

impl NameCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical name for `expr`, deriving and memoizing it on
    /// first sight.
    pub fn name_for(&self, expr: &TypeExpr) -> MessageName {
        if let Some(hit) = self.read_guard().get(expr) {
            return hit.clone();
        }
        let name = MessageName::for_type(expr);
        self.write_guard().insert(expr.clone(), name.clone());
        name
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// True when nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock only means a peer panicked mid-insert; the map itself
    // is always structurally valid, so recover the guard.
    fn read_guard(&self) -> RwLockReadGuard<'_, FxHashMap<TypeExpr, MessageName>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, FxHashMap<TypeExpr, MessageName>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_hit_equals_direct_derivation() {
        let cache = NameCache::new();
        let expr = TypeExpr::pointer(TypeExpr::named("example.com/shipping", "Manifest"));
        let first = cache.name_for(&expr);
        let second = cache.name_for(&expr);
        assert_eq!(first, second);
        assert_eq!(first, MessageName::for_type(&expr));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn message_type_equality_ignores_structural_content() {
        // Same canonical name via two separately built handles.
        let a = MessageType::of(TypeExpr::named("example.com/billing", "Invoice"));
        let b = MessageType::of(TypeExpr::named("example.com/billing", "Invoice"));
        assert_eq!(a, b);
    }
}
