//! Name-keyed directive catalog.
//!
//! A catalog is the configuration side of registration: it knows how to build
//! each directive by name, and [`RegistryBuilder::from_names`] turns a
//! configured list of names into an ordered registry. Nothing is registered
//! implicitly.
//!
//! [`RegistryBuilder::from_names`]: crate::RegistryBuilder::from_names

use crate::directives::{REF_DIRECTIVE, RefDirective};
use sigil_core::{Directive, Node, RegistryError};
use std::{collections::HashMap, fmt};

type Factory<N> = dyn Fn() -> Box<dyn Directive<N>> + Send + Sync;

/// A set of named directive factories.
pub struct DirectiveCatalog<N: Node> {
    factories: HashMap<String, Box<Factory<N>>>,
}

impl<N: Node> Default for DirectiveCatalog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> DirectiveCatalog<N> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a catalog holding the standard directives.
    ///
    /// | name  | directive         |
    /// |-------|-------------------|
    /// | `ref` | [`RefDirective`]  |
    pub fn with_standard() -> Self {
        let mut catalog = Self::new();
        catalog.factories.insert(
            REF_DIRECTIVE.to_string(),
            Box::new(|| Box::new(RefDirective) as Box<dyn Directive<N>>),
        );
        catalog
    }

    /// Register a factory under `name`.
    ///
    /// Fails with [`RegistryError::DuplicateName`] if the name is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Directive<N>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        self.factories.insert(name, Box::new(factory));
        Ok(())
    }

    /// Build a fresh instance of the directive called `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Directive<N>>, RegistryError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::UnknownDirective(name.to_string()))
    }

    /// Whether a directive is known under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Known names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<N: Node> fmt::Debug for DirectiveCatalog<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectiveCatalog")
            .field("names", &self.names())
            .finish()
    }
}
