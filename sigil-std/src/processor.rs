//! # Directive Processor
//!
//! Applies exactly one directive to one attribute occurrence and keeps the
//! resulting update hook.
//!
//! # Dispatch
//!
//! 1. **Lookup**: the first registered directive whose predicate accepts the
//!    attribute name. No match leaves target and scope untouched.
//! 2. **Processing**: the directive's `process` runs once, with no retries.
//! 3. **Retention**: the returned hook is kept in a [`Binding`] for the
//!    engine's refresh cycles.
//!
//! Faults raised by a directive are wrapped in [`DispatchError`] with the
//! original error as its source and returned to the caller, which decides
//! whether to abort the render.

use crate::registry::Registry;
use sigil_core::{
    Attribute, Directive, DispatchError, Node, NodeRef, ProcessingContext, Scope, UpdateHandle,
};
use std::{fmt, sync::Arc};

/// Dispatches attributes to the directives of a registry.
pub struct DirectiveProcessor<N: Node> {
    registry: Arc<Registry<N>>,
}

impl<N: Node> DirectiveProcessor<N> {
    /// Create a processor over a fully built registry.
    pub fn new(registry: impl Into<Arc<Registry<N>>>) -> Self {
        Self {
            registry: registry.into(),
        }
    }

    /// The registry this processor dispatches to.
    pub fn registry(&self) -> &Registry<N> {
        &self.registry
    }

    /// Find the directive that would handle `attribute`.
    pub fn find_match(&self, attribute: &str) -> Option<&dyn Directive<N>> {
        self.registry.find_match(attribute)
    }

    /// Apply the matching directive to one attribute occurrence.
    ///
    /// Returns `Ok(None)` when no directive claims the attribute. On failure
    /// the directive's own error is left unmodified and can be recovered with
    /// [`DispatchError::into_source`].
    pub fn dispatch(
        &self,
        attribute: &Attribute,
        target: &NodeRef<N>,
        scope: &mut Scope<N>,
    ) -> Result<Option<Binding<N>>, DispatchError> {
        let Some(directive) = self.registry.find_match(&attribute.name) else {
            tracing::trace!(attribute = %attribute.name, "no directive matched");
            return Ok(None);
        };

        let ctx = ProcessingContext::new(attribute, target, scope);
        match directive.process(ctx) {
            Ok(hook) => {
                tracing::debug!(
                    directive = directive.name(),
                    attribute = %attribute.name,
                    reactive = !hook.is_noop(),
                    "directive processed"
                );
                Ok(Some(Binding {
                    directive: directive.name().to_string(),
                    attribute: attribute.clone(),
                    hook,
                }))
            }
            Err(source) => {
                tracing::debug!(
                    directive = directive.name(),
                    attribute = %attribute.name,
                    error = %source,
                    "directive failed"
                );
                Err(DispatchError::Process {
                    directive: directive.name().to_string(),
                    attribute: attribute.name.clone(),
                    source,
                })
            }
        }
    }

    /// Dispatch every attribute of one node, in order.
    ///
    /// Unmatched attributes are skipped. The first fault stops processing;
    /// directives already applied keep their effects.
    pub fn process_element<'a, I>(
        &self,
        attributes: I,
        target: &NodeRef<N>,
        scope: &mut Scope<N>,
    ) -> Result<BindingSet<N>, DispatchError>
    where
        I: IntoIterator<Item = &'a Attribute>,
    {
        let mut bindings = BindingSet::new();
        for attribute in attributes {
            if let Some(binding) = self.dispatch(attribute, target, scope)? {
                bindings.push(binding);
            }
        }
        Ok(bindings)
    }
}

impl<N: Node> Clone for DirectiveProcessor<N> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<N: Node> fmt::Debug for DirectiveProcessor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectiveProcessor")
            .field("registry", &self.registry)
            .finish()
    }
}

/// One processed attribute occurrence and its retained update hook.
pub struct Binding<N: Node> {
    directive: String,
    attribute: Attribute,
    hook: UpdateHandle<N>,
}

impl<N: Node> Binding<N> {
    /// Name of the directive that processed the attribute.
    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// The attribute as it was when processed.
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    /// The retained update hook.
    pub fn hook(&self) -> &UpdateHandle<N> {
        &self.hook
    }

    /// Whether the hook does nothing on refresh.
    pub fn is_noop(&self) -> bool {
        self.hook.is_noop()
    }

    /// Run the hook with the attribute as originally processed.
    pub fn update(&self, target: &NodeRef<N>, scope: &mut Scope<N>) -> Result<(), DispatchError> {
        self.update_with(&self.attribute, target, scope)
    }

    /// Run the hook with a refreshed attribute.
    pub fn update_with(
        &self,
        attribute: &Attribute,
        target: &NodeRef<N>,
        scope: &mut Scope<N>,
    ) -> Result<(), DispatchError> {
        self.hook
            .update(ProcessingContext::new(attribute, target, scope))
            .map_err(|source| {
                tracing::debug!(
                    directive = %self.directive,
                    attribute = %attribute.name,
                    error = %source,
                    "update hook failed"
                );
                DispatchError::Update {
                    directive: self.directive.clone(),
                    attribute: attribute.name.clone(),
                    source,
                }
            })
    }
}

impl<N: Node> Clone for Binding<N> {
    fn clone(&self) -> Self {
        Self {
            directive: self.directive.clone(),
            attribute: self.attribute.clone(),
            hook: self.hook.clone(),
        }
    }
}

impl<N: Node> fmt::Debug for Binding<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("directive", &self.directive)
            .field("attribute", &self.attribute)
            .field("hook", &self.hook)
            .finish()
    }
}

/// The bindings produced for one node.
pub struct BindingSet<N: Node> {
    bindings: Vec<Binding<N>>,
}

impl<N: Node> Default for BindingSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> BindingSet<N> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Append a binding.
    pub fn push(&mut self, binding: Binding<N>) {
        self.bindings.push(binding);
    }

    /// Run one refresh cycle over the node's bindings, in dispatch order.
    ///
    /// No-op hooks are skipped. The first fault stops the cycle.
    pub fn update(&self, target: &NodeRef<N>, scope: &mut Scope<N>) -> Result<(), DispatchError> {
        for binding in self.bindings.iter().filter(|binding| !binding.is_noop()) {
            binding.update(target, scope)?;
        }
        Ok(())
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no attribute was matched.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of bindings with a real update hook.
    pub fn active(&self) -> usize {
        self.bindings.iter().filter(|binding| !binding.is_noop()).count()
    }

    /// Iterate over bindings in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, Binding<N>> {
        self.bindings.iter()
    }
}

impl<N: Node> fmt::Debug for BindingSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.bindings).finish()
    }
}

impl<N: Node> IntoIterator for BindingSet<N> {
    type Item = Binding<N>;
    type IntoIter = std::vec::IntoIter<Binding<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

impl<'a, N: Node> IntoIterator for &'a BindingSet<N> {
    type Item = &'a Binding<N>;
    type IntoIter = std::slice::Iter<'a, Binding<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

impl<N: Node> Extend<Binding<N>> for BindingSet<N> {
    fn extend<T: IntoIterator<Item = Binding<N>>>(&mut self, iter: T) {
        self.bindings.extend(iter);
    }
}
