//! Scope namespace for attribute resolution.
//!
//! A [`Scope`] maps binding names to tagged values. It mirrors the two ways a
//! host namespace can be written to:
//!
//! - **Assignment** ([`Scope::assign`]): ordinary writes. Rejected for
//!   read-only bindings.
//! - **Definition** ([`Scope::define`], [`Scope::define_readonly`]): replaces
//!   whatever was bound under the name, whatever its writability. This is how
//!   directives install bindings, and how a re-run directive rebinds them.
//!
//! Node values are stored as [`NodeRef`] handles. Reading one back yields the
//! same node, never a copy.

use crate::{error::ScopeError, node::Node, node::NodeRef};
use std::{collections::HashMap, fmt};

/// A value bound in a [`Scope`].
pub enum ScopeValue<N: Node> {
    /// A handle to a rendered node.
    Node(NodeRef<N>),
    /// A text value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
}

impl<N: Node> ScopeValue<N> {
    /// Returns the node handle if this is a node value.
    pub fn as_node(&self) -> Option<&NodeRef<N>> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl<N: Node> Clone for ScopeValue<N> {
    fn clone(&self) -> Self {
        match self {
            Self::Node(node) => Self::Node(node.clone()),
            Self::Text(text) => Self::Text(text.clone()),
            Self::Number(n) => Self::Number(*n),
            Self::Bool(b) => Self::Bool(*b),
        }
    }
}

impl<N: Node> PartialEq for ScopeValue<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Node(a), Self::Node(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl<N: Node> fmt::Debug for ScopeValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "Node({:p})", std::sync::Arc::as_ptr(node.as_arc())),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
        }
    }
}

impl<N: Node> From<NodeRef<N>> for ScopeValue<N> {
    fn from(node: NodeRef<N>) -> Self {
        Self::Node(node)
    }
}

impl<N: Node> From<String> for ScopeValue<N> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<N: Node> From<&str> for ScopeValue<N> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<N: Node> From<f64> for ScopeValue<N> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl<N: Node> From<bool> for ScopeValue<N> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

struct Slot<N: Node> {
    value: ScopeValue<N>,
    writable: bool,
}

/// The namespace a node's attributes resolve against.
pub struct Scope<N: Node> {
    slots: HashMap<String, Slot<N>>,
}

impl<N: Node> Default for Scope<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> Scope<N> {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<&ScopeValue<N>> {
        self.slots.get(name).map(|slot| &slot.value)
    }

    /// Look up a binding holding a node.
    pub fn node(&self, name: &str) -> Option<&NodeRef<N>> {
        self.get(name).and_then(ScopeValue::as_node)
    }

    /// Whether a binding exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Whether the binding accepts [`assign`](Self::assign).
    ///
    /// Returns `None` if nothing is bound under `name`.
    pub fn is_writable(&self, name: &str) -> Option<bool> {
        self.slots.get(name).map(|slot| slot.writable)
    }

    /// Assign a value with ordinary write semantics.
    ///
    /// Creates a writable binding if none exists. Fails with
    /// [`ScopeError::ReadOnly`] if the existing binding is read-only; the
    /// binding is left untouched in that case.
    pub fn assign(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ScopeValue<N>>,
    ) -> Result<(), ScopeError> {
        let name = name.into();
        match self.slots.get_mut(&name) {
            Some(slot) if !slot.writable => Err(ScopeError::ReadOnly(name)),
            Some(slot) => {
                slot.value = value.into();
                Ok(())
            }
            None => {
                self.slots.insert(
                    name,
                    Slot {
                        value: value.into(),
                        writable: true,
                    },
                );
                Ok(())
            }
        }
    }

    /// Define a writable binding, replacing any previous one.
    ///
    /// Any string is a valid name, including the empty one.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ScopeValue<N>>,
    ) -> Option<ScopeValue<N>> {
        self.install(name.into(), value.into(), true)
    }

    /// Define a read-only binding, replacing any previous one.
    ///
    /// The binding rejects [`assign`](Self::assign) but can itself be replaced
    /// by another definition. Returns the previously bound value, if any.
    pub fn define_readonly(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ScopeValue<N>>,
    ) -> Option<ScopeValue<N>> {
        self.install(name.into(), value.into(), false)
    }

    fn install(
        &mut self,
        name: String,
        value: ScopeValue<N>,
        writable: bool,
    ) -> Option<ScopeValue<N>> {
        let previous = self.slots.insert(name, Slot { value, writable });
        previous.map(|slot| slot.value)
    }

    /// Iterate over bound names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the scope has no bindings.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<N: Node> fmt::Debug for Scope<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|(name, slot)| (name, &slot.value)))
            .finish()
    }
}
