//! Reference-binding directive.
//!
//! `#ref="name"` exposes the node it sits on to the enclosing scope under
//! `name`. The binding holds the node itself (a shared handle, not a copy),
//! is read-only for ordinary assignment, and is replaced without warning when
//! the directive runs again for the same name.

use sigil_core::{BoxError, Directive, Node, ProcessingContext, ScopeValue, UpdateHandle};

/// The attribute name claimed by [`RefDirective`].
pub const REF_ATTRIBUTE: &str = "#ref";

/// The catalog name of [`RefDirective`].
pub const REF_DIRECTIVE: &str = "ref";

/// Binds the target node into the scope under the attribute's value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefDirective;

impl<N: Node> Directive<N> for RefDirective {
    fn name(&self) -> &str {
        REF_DIRECTIVE
    }

    fn matches(&self, attribute: &str) -> bool {
        attribute == REF_ATTRIBUTE
    }

    fn process(&self, ctx: ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError> {
        let name = ctx.attribute.value.clone();
        let previous = ctx
            .scope
            .define_readonly(name, ScopeValue::Node(ctx.target.clone()));
        if previous.is_some() {
            tracing::trace!(binding = %ctx.attribute.value, "reference rebound");
        }
        // Bound once; nothing to refresh.
        Ok(UpdateHandle::noop())
    }
}
