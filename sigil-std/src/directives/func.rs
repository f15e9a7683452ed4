//! Closure-backed directives.

use sigil_core::{BoxError, Directive, Node, ProcessingContext, UpdateHandle};
use std::borrow::Cow;

/// A directive built from a match predicate and a processing closure.
///
/// # Example
///
/// ```rust
/// use sigil_std::{
///     FnDirective, matchers,
///     sigil_core::{ProcessingContext, UpdateHandle},
/// };
///
/// let hidden = FnDirective::new(
///     "hidden",
///     matchers::exact("#hidden"),
///     |ctx: ProcessingContext<'_, String>| {
///         ctx.scope.define("hidden", true);
///         Ok(UpdateHandle::noop())
///     },
/// );
/// # let _ = hidden;
/// ```
pub struct FnDirective<M, P> {
    name: Cow<'static, str>,
    matcher: M,
    process: P,
}

impl<M, P> FnDirective<M, P> {
    /// Assemble a directive.
    pub fn new<N>(name: impl Into<Cow<'static, str>>, matcher: M, process: P) -> Self
    where
        N: Node,
        M: Fn(&str) -> bool + Send + Sync + 'static,
        P: Fn(ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            matcher,
            process,
        }
    }
}

impl<N, M, P> Directive<N> for FnDirective<M, P>
where
    N: Node,
    M: Fn(&str) -> bool + Send + Sync + 'static,
    P: Fn(ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, attribute: &str) -> bool {
        (self.matcher)(attribute)
    }

    fn process(&self, ctx: ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError> {
        (self.process)(ctx)
    }
}
