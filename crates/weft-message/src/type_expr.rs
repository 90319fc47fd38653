// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Structural type descriptors.
//!
//! Classification in weft is capability-descriptor based: the upstream
//! provider registers an explicit description of each message's underlying
//! type rather than relying on runtime type inspection. [`TypeExpr`] is that
//! description — a recursive value covering named types and the anonymous
//! composite shapes (pointers, sequences, maps, channels, structural records,
//! function signatures) a message type may be built from.
//!
//! The canonical rendering templates here are load-bearing: they define the
//! wire-visible identity of every message type and must not drift. Recursion
//! terminates at named (declared) types.

/// Direction of a channel-like type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChanDir {
    /// Receive-only (`<-chan T`).
    Recv,
    /// Send-only (`chan<- T`).
    Send,
    /// Bidirectional (`chan T`).
    Both,
}

/// A field of a structural record type.
///
/// An anonymous/embedded field carries no label and contributes only its
/// type text to the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructField {
    /// Declared field label, or `None` for an anonymous/embedded field.
    pub label: Option<String>,
    /// Field type.
    pub ty: TypeExpr,
}

/// Structural description of a message's underlying type.
///
/// A *named* type renders as `<scope>.<name>` in the canonical (qualified)
/// form and as `<name>` alone in the display form. Every composite variant
/// renders from a fixed textual template applied recursively to its element
/// type(s).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeExpr {
    /// A declared type: fully-qualified defining scope plus declared name.
    ///
    /// `scope` may be empty for predeclared/builtin names, which render
    /// identically in both forms.
    Named {
        /// Fully-qualified defining scope (e.g. `example.com/billing`).
        scope: String,
        /// Declared type name (e.g. `Invoice`).
        name: String,
    },
    /// Pointer to an element type: `*<elem>`.
    Pointer(Box<TypeExpr>),
    /// Variable-length sequence: `[]<elem>`.
    Slice(Box<TypeExpr>),
    /// Fixed-size array: `[<n>]<elem>`.
    Array {
        /// Number of elements.
        len: u64,
        /// Element type.
        elem: Box<TypeExpr>,
    },
    /// Mapping: `map[<key>]<elem>`.
    Map {
        /// Key type.
        key: Box<TypeExpr>,
        /// Element type.
        elem: Box<TypeExpr>,
    },
    /// Channel-like type: `<-chan <elem>`, `chan<- <elem>`, or `chan <elem>`.
    Chan {
        /// Channel direction.
        dir: ChanDir,
        /// Element type.
        elem: Box<TypeExpr>,
    },
    /// Structural record: `struct { <field> <type>; ... }`.
    Struct {
        /// Record fields, in declaration order.
        fields: Vec<StructField>,
    },
    /// Function signature: `func(<in>, ...) <out>`, with multiple outputs
    /// parenthesized.
    Func {
        /// Parameter types, in declaration order.
        params: Vec<TypeExpr>,
        /// Result types, in declaration order.
        results: Vec<TypeExpr>,
    },
}

impl TypeExpr {
    /// Convenience constructor for a named type.
    pub fn named(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            scope: scope.into(),
            name: name.into(),
        }
    }

    /// Convenience constructor for a pointer type.
    pub fn pointer(elem: TypeExpr) -> Self {
        Self::Pointer(Box::new(elem))
    }

    /// Convenience constructor for a sequence type.
    pub fn slice(elem: TypeExpr) -> Self {
        Self::Slice(Box::new(elem))
    }

    /// Renders the canonical (fully-qualified) form. This is the identity
    /// string a [`crate::MessageName`] wraps.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        self.render(true, &mut out);
        out
    }

    /// Renders the display form, with scope qualifiers omitted.
    ///
    /// Not guaranteed globally unique; for human-facing output only.
    pub fn display_form(&self) -> String {
        let mut out = String::new();
        self.render(false, &mut out);
        out
    }

    /// Recursive renderer shared by both forms. The qualifier flag is fixed
    /// at the top-level call; it never flips mid-recursion.
    fn render(&self, qualified: bool, out: &mut String) {
        match self {
            Self::Named { scope, name } => {
                if qualified && !scope.is_empty() {
                    out.push_str(scope);
                    out.push('.');
                }
                out.push_str(name);
            }
            Self::Pointer(elem) => {
                out.push('*');
                elem.render(qualified, out);
            }
            Self::Slice(elem) => {
                out.push_str("[]");
                elem.render(qualified, out);
            }
            Self::Array { len, elem } => {
                out.push('[');
                out.push_str(&len.to_string());
                out.push(']');
                elem.render(qualified, out);
            }
            Self::Map { key, elem } => {
                out.push_str("map[");
                key.render(qualified, out);
                out.push(']');
                elem.render(qualified, out);
            }
            Self::Chan { dir, elem } => {
                out.push_str(match dir {
                    ChanDir::Recv => "<-chan ",
                    ChanDir::Send => "chan<- ",
                    ChanDir::Both => "chan ",
                });
                elem.render(qualified, out);
            }
            Self::Struct { fields } => {
                if fields.is_empty() {
                    out.push_str("struct {}");
                    return;
                }
                out.push_str("struct { ");
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    if let Some(label) = &field.label {
                        out.push_str(label);
                        out.push(' ');
                    }
                    field.ty.render(qualified, out);
                }
                out.push_str(" }");
            }
            Self::Func { params, results } => {
                out.push_str("func(");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    param.render(qualified, out);
                }
                out.push(')');
                match results.as_slice() {
                    [] => {}
                    [single] => {
                        out.push(' ');
                        single.render(qualified, out);
                    }
                    many => {
                        out.push_str(" (");
                        for (i, result) in many.iter().enumerate() {
                            if i > 0 {
                                out.push_str(", ");
                            }
                            result.render(qualified, out);
                        }
                        out.push(')');
                    }
                }
            }
        }
    }
}
