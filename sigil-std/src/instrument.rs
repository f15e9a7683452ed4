//! Tracing instrumentation for directives.

use sigil_core::{BoxError, Directive, Node, ProcessingContext, UpdateHandle, UpdateHook};

/// A Directive wrapper that instruments execution with `tracing` spans.
///
/// Processing runs inside a `directive_process` span. Reactive update hooks
/// are wrapped so refresh cycles run inside a `directive_update` span; no-op
/// hooks are passed through untouched. Errors are logged and returned as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracedDirective<D> {
    inner: D,
}

impl<D> TracedDirective<D> {
    /// Create a new `TracedDirective` around a directive.
    pub const fn new(inner: D) -> Self {
        Self { inner }
    }

    /// The wrapped directive.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Unwrap the directive.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<N, D> Directive<N> for TracedDirective<D>
where
    N: Node,
    D: Directive<N>,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn matches(&self, attribute: &str) -> bool {
        self.inner.matches(attribute)
    }

    fn process(&self, ctx: ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError> {
        let span = tracing::debug_span!(
            "directive_process",
            directive = self.inner.name(),
            attribute = %ctx.attribute.name
        );
        let _enter = span.enter();

        match self.inner.process(ctx) {
            Ok(hook) if hook.is_noop() => Ok(hook),
            Ok(hook) => Ok(UpdateHandle::new(TracedUpdate {
                inner: hook,
                directive: self.inner.name().to_string(),
            })),
            Err(err) => {
                tracing::debug!(error = %err, "directive failed");
                Err(err)
            }
        }
    }
}

struct TracedUpdate<N: Node> {
    inner: UpdateHandle<N>,
    directive: String,
}

impl<N: Node> UpdateHook<N> for TracedUpdate<N> {
    fn update(&self, ctx: ProcessingContext<'_, N>) -> Result<(), BoxError> {
        let span = tracing::debug_span!(
            "directive_update",
            directive = %self.directive,
            attribute = %ctx.attribute.name
        );
        let _enter = span.enter();

        self.inner.update(ctx).inspect_err(|err| {
            tracing::debug!(error = %err, "update hook failed");
        })
    }
}
