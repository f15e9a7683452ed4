//! Per-invocation processing context.

use crate::{attribute::Attribute, node::Node, node::NodeRef, scope::Scope};

/// Everything a directive sees for one attribute occurrence.
///
/// Built by the caller for each `process` or `update` invocation and dropped
/// afterwards. Directives may mutate the scope, and the target through
/// whatever interior mutability the node type offers.
pub struct ProcessingContext<'a, N: Node> {
    /// The attribute being processed.
    pub attribute: &'a Attribute,
    /// The node the attribute was found on.
    pub target: &'a NodeRef<N>,
    /// The scope in force at that point of the tree.
    pub scope: &'a mut Scope<N>,
}

impl<'a, N: Node> ProcessingContext<'a, N> {
    /// Bundle an attribute occurrence with its target and scope.
    pub fn new(attribute: &'a Attribute, target: &'a NodeRef<N>, scope: &'a mut Scope<N>) -> Self {
        Self {
            attribute,
            target,
            scope,
        }
    }
}
