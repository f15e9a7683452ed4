//! Reactive update hooks.
//!
//! A directive's processing step returns an [`UpdateHandle`]. The rendering
//! engine keeps it and calls it on each refresh cycle with a fresh
//! [`ProcessingContext`]. Directives with nothing to refresh return
//! [`UpdateHandle::noop`], a shared stateless handle that allocates nothing
//! and does nothing.

use crate::{context::ProcessingContext, error::BoxError, node::Node};
use std::{fmt, sync::Arc};

/// A refresh callback produced by a directive.
pub trait UpdateHook<N: Node>: Send + Sync + 'static {
    /// Re-apply the directive's reactive effect.
    fn update(&self, ctx: ProcessingContext<'_, N>) -> Result<(), BoxError>;
}

/// An [`UpdateHook`] backed by a closure.
pub struct FnUpdate<F>(F);

impl<F> FnUpdate<F> {
    /// Wrap a closure.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<N, F> UpdateHook<N> for FnUpdate<F>
where
    N: Node,
    F: Fn(ProcessingContext<'_, N>) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn update(&self, ctx: ProcessingContext<'_, N>) -> Result<(), BoxError> {
        (self.0)(ctx)
    }
}

enum Inner<N: Node> {
    Noop,
    Hook(Arc<dyn UpdateHook<N>>),
}

/// A shared handle to a directive's update hook.
pub struct UpdateHandle<N: Node> {
    inner: Inner<N>,
}

impl<N: Node> UpdateHandle<N> {
    /// The no-op handle.
    pub const NOOP: Self = Self { inner: Inner::Noop };

    /// A handle that performs no work when invoked.
    pub const fn noop() -> Self {
        Self::NOOP
    }

    /// Wrap an update hook.
    pub fn new<H: UpdateHook<N>>(hook: H) -> Self {
        Self {
            inner: Inner::Hook(Arc::new(hook)),
        }
    }

    /// Wrap an already shared update hook.
    pub fn from_arc(hook: Arc<dyn UpdateHook<N>>) -> Self {
        Self {
            inner: Inner::Hook(hook),
        }
    }

    /// Wrap a closure as an update hook.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(ProcessingContext<'_, N>) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self::new(FnUpdate::new(f))
    }

    /// Whether this is the no-op handle.
    pub fn is_noop(&self) -> bool {
        matches!(self.inner, Inner::Noop)
    }

    /// Invoke the hook with a refreshed context.
    pub fn update(&self, ctx: ProcessingContext<'_, N>) -> Result<(), BoxError> {
        match &self.inner {
            Inner::Noop => Ok(()),
            Inner::Hook(hook) => hook.update(ctx),
        }
    }
}

impl<N: Node> UpdateHook<N> for UpdateHandle<N> {
    fn update(&self, ctx: ProcessingContext<'_, N>) -> Result<(), BoxError> {
        UpdateHandle::update(self, ctx)
    }
}

impl<N: Node> Default for UpdateHandle<N> {
    fn default() -> Self {
        Self::NOOP
    }
}

impl<N: Node> Clone for UpdateHandle<N> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner::Noop => Inner::Noop,
            Inner::Hook(hook) => Inner::Hook(Arc::clone(hook)),
        };
        Self { inner }
    }
}

impl<N: Node> fmt::Debug for UpdateHandle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            Inner::Noop => f.write_str("UpdateHandle::Noop"),
            Inner::Hook(_) => f.write_str("UpdateHandle::Hook"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateHandle;
    use crate::{attribute::Attribute, context::ProcessingContext, node::NodeRef, scope::Scope};
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_noop_has_no_effect() {
        let attribute = Attribute::new("#ref", "el");
        let target = NodeRef::new(());
        let mut scope: Scope<()> = Scope::new();

        let handle = UpdateHandle::<()>::noop();
        assert!(handle.is_noop());
        handle
            .update(ProcessingContext::new(&attribute, &target, &mut scope))
            .unwrap();

        assert!(scope.is_empty());
        assert!(UpdateHandle::<()>::default().is_noop());
    }

    #[test]
    fn test_clones_share_hook() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handle = UpdateHandle::<()>::from_fn(move |_ctx| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        let copy = handle.clone();

        let attribute = Attribute::new(":text", "title");
        let target = NodeRef::new(());
        let mut scope = Scope::new();

        handle
            .update(ProcessingContext::new(&attribute, &target, &mut scope))
            .unwrap();
        copy.update(ProcessingContext::new(&attribute, &target, &mut scope))
            .unwrap();

        assert!(!handle.is_noop());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_hook_can_write_scope() {
        let handle = UpdateHandle::<()>::from_fn(|ctx| {
            ctx.scope.assign(ctx.attribute.value.clone(), "refreshed")?;
            Ok(())
        });

        let attribute = Attribute::new(":text", "title");
        let target = NodeRef::new(());
        let mut scope = Scope::new();
        handle
            .update(ProcessingContext::new(&attribute, &target, &mut scope))
            .unwrap();

        assert_eq!(scope.get("title").and_then(|v| v.as_text()), Some("refreshed"));
    }
}
