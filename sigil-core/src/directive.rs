//! # Directive Contract
//!
//! A directive is a named behavior bound to an attribute. It consists of:
//!
//! - a **match predicate** deciding which attribute names it claims, and
//! - a **processing step** run once per attribute occurrence, which may
//!   mutate the target node or the scope and returns an [`UpdateHandle`] for
//!   later refresh cycles.
//!
//! Matching is an arbitrary predicate. Exact names, prefixes and anything
//! else are equally valid; the dispatch core never assumes a naming scheme.

use crate::{
    context::ProcessingContext,
    error::BoxError,
    node::Node,
    update::UpdateHandle,
};

/// A directive that can be registered in a registry.
///
/// The trait is object-safe; registries hold directives as
/// `Arc<dyn Directive<N>>`.
///
/// # Example
///
/// ```rust
/// use sigil_core::{BoxError, Directive, ProcessingContext, UpdateHandle};
///
/// struct Hidden;
///
/// impl Directive<String> for Hidden {
///     fn matches(&self, attribute: &str) -> bool {
///         attribute == "#hidden"
///     }
///
///     fn process(&self, ctx: ProcessingContext<'_, String>) -> Result<UpdateHandle<String>, BoxError> {
///         ctx.scope.define("hidden", true);
///         Ok(UpdateHandle::noop())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Directive` for nodes of type `{N}`",
    label = "missing `Directive` implementation",
    note = "Directives must implement `matches` and `process` for the node type `{N}`."
)]
pub trait Directive<N: Node>: Send + Sync + 'static {
    /// Label used in logs and errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether this directive claims the attribute name.
    ///
    /// Must be a pure predicate: it can be called any number of times, or not
    /// at all when an earlier directive already matched.
    fn matches(&self, attribute: &str) -> bool;

    /// Apply the directive to one attribute occurrence.
    ///
    /// Called exactly once per occurrence. Errors are propagated to the
    /// caller untouched.
    fn process(&self, ctx: ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError>;
}

// Allow Box<dyn Directive> to be used where Directive is expected.
impl<N: Node> Directive<N> for Box<dyn Directive<N>> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn matches(&self, attribute: &str) -> bool {
        (**self).matches(attribute)
    }

    fn process(&self, ctx: ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError> {
        (**self).process(ctx)
    }
}
