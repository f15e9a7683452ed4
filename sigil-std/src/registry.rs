//! Ordered directive registry.
//!
//! The registry is append-only. Registration order decides which directive
//! wins when several claim the same attribute name: the earliest one. Once a
//! registry is handed to a [`DirectiveProcessor`](crate::DirectiveProcessor)
//! it is shared read-only.

use crate::catalog::DirectiveCatalog;
use sigil_core::{Directive, Node, RegistryError};
use std::{fmt, sync::Arc};

/// An ordered collection of directives.
pub struct Registry<N: Node> {
    directives: Vec<Arc<dyn Directive<N>>>,
}

impl<N: Node> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> Registry<N> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    /// Append a directive.
    pub fn add<D: Directive<N>>(&mut self, directive: D) {
        self.add_shared(Arc::new(directive));
    }

    /// Append an already shared directive.
    pub fn add_shared(&mut self, directive: Arc<dyn Directive<N>>) {
        tracing::debug!(
            directive = directive.name(),
            position = self.directives.len(),
            "directive registered"
        );
        self.directives.push(directive);
    }

    /// Find the first directive, in registration order, that claims `attribute`.
    ///
    /// Directives after the first match are not consulted.
    pub fn find_match(&self, attribute: &str) -> Option<&dyn Directive<N>> {
        self.directives
            .iter()
            .find(|directive| directive.matches(attribute))
            .map(|directive| &**directive)
    }

    /// Iterate over directives in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Directive<N>> {
        self.directives.iter().map(|directive| &**directive)
    }

    /// Directive names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|directive| directive.name()).collect()
    }

    /// Number of registered directives.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Whether no directive is registered.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

impl<N: Node> fmt::Debug for Registry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("directives", &self.names())
            .finish()
    }
}

/// Builder for constructing a [`Registry`].
pub struct RegistryBuilder<N: Node> {
    directives: Vec<Arc<dyn Directive<N>>>,
}

impl<N: Node> Default for RegistryBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> RegistryBuilder<N> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    /// Build a registry from a configured list of catalog names.
    ///
    /// The list order becomes the registration order.
    pub fn from_names<I, S>(catalog: &DirectiveCatalog<N>, names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Self::new(), |builder, name| builder.add_named(catalog, name.as_ref()))
    }

    /// Register a directive.
    pub fn add<D: Directive<N>>(mut self, directive: D) -> Self {
        self.directives.push(Arc::new(directive));
        self
    }

    /// Register a boxed directive.
    pub fn add_boxed(mut self, directive: Box<dyn Directive<N>>) -> Self {
        self.directives.push(Arc::from(directive));
        self
    }

    /// Register the catalog entry called `name`.
    pub fn add_named(self, catalog: &DirectiveCatalog<N>, name: &str) -> Result<Self, RegistryError> {
        let directive = catalog.create(name)?;
        Ok(self.add_boxed(directive))
    }

    /// Number of directives registered so far.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Build the registry.
    pub fn build(self) -> Registry<N> {
        let mut registry = Registry::new();
        for directive in self.directives {
            registry.add_shared(directive);
        }
        registry
    }
}
