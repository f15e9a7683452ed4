//! Node marker trait and identity handles.

use std::{fmt, ops::Deref, sync::Arc};

/// A marker trait for the rendering engine's node type.
///
/// The dispatch core never looks inside a node; it only passes handles to
/// directives. Any `Send + Sync + 'static` type qualifies.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Node",
    label = "must be `Send + Sync + 'static`",
    note = "Nodes handed to directives must be thread-safe and static."
)]
pub trait Node: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Node for T {}

/// A shared handle to a rendered node.
///
/// Cloning a `NodeRef` clones the handle, not the node. Equality is identity:
/// two handles are equal only if they point at the same node.
pub struct NodeRef<N: Node>(Arc<N>);

impl<N: Node> NodeRef<N> {
    /// Wrap a node in a new handle.
    pub fn new(node: N) -> Self {
        Self(Arc::new(node))
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Access the underlying `Arc`.
    pub fn as_arc(&self) -> &Arc<N> {
        &self.0
    }
}

impl<N: Node> Clone for NodeRef<N> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<N: Node> Deref for NodeRef<N> {
    type Target = N;

    fn deref(&self) -> &N {
        &self.0
    }
}

impl<N: Node> PartialEq for NodeRef<N> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<N: Node> Eq for NodeRef<N> {}

impl<N: Node> From<Arc<N>> for NodeRef<N> {
    fn from(node: Arc<N>) -> Self {
        Self(node)
    }
}

impl<N: Node + fmt::Debug> fmt::Debug for NodeRef<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&*self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::NodeRef;
    use std::sync::Arc;

    #[test]
    fn test_identity_equality() {
        let a = NodeRef::new("div".to_string());
        let b = NodeRef::new("div".to_string());

        assert_eq!(a, a.clone());
        assert_ne!(a, b, "equal contents must not make handles equal");
        assert_eq!(&*a, "div");
    }

    #[test]
    fn test_from_arc_shares_node() {
        let node = Arc::new(7_u32);
        let handle = NodeRef::from(Arc::clone(&node));
        assert!(Arc::ptr_eq(handle.as_arc(), &node));
    }
}
