//! # sigil - Directive Dispatch Core
//!
//! `sigil` is the part of a declarative-UI templating engine that decides what
//! an attribute *does*. The engine parses markup and renders nodes; for each
//! attribute occurrence it asks the dispatch core to apply the matching
//! directive, and keeps the returned update hook for later refresh cycles.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigil::{
//!     Attribute, DirectiveCatalog, DirectiveProcessor, NodeRef, RegistryBuilder, Scope,
//! };
//!
//! // Explicit, configuration-driven registration.
//! let catalog = DirectiveCatalog::with_standard();
//! let registry = RegistryBuilder::from_names(&catalog, ["ref"])?.build();
//! let processor = DirectiveProcessor::new(registry);
//!
//! // The engine hands over one attribute occurrence.
//! let target = NodeRef::new("input".to_string());
//! let mut scope = Scope::new();
//! let binding = processor.dispatch(&Attribute::new("#ref", "field"), &target, &mut scope)?;
//!
//! assert!(binding.is_some());
//! assert_eq!(scope.node("field"), Some(&target));
//! # Ok::<(), sigil::SigilError>(())
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use sigil_core::{
    // Values
    Attribute,
    // Error types
    BoxError,
    // Directive contract
    Directive,
    DispatchError,
    // Update hooks
    FnUpdate,
    Node,
    NodeRef,
    ProcessingContext,
    RegistryError,
    Scope,
    ScopeError,
    ScopeValue,
    SigilError,
    UpdateHandle,
    UpdateHook,
};

// Registry and dispatch
pub use sigil_std::{
    Binding, BindingSet, DirectiveCatalog, DirectiveProcessor, Registry, RegistryBuilder,
    TracedDirective,
};

/// Standard directive implementations.
pub mod directives {
    pub use sigil_std::directives::{
        FnDirective, REF_ATTRIBUTE, REF_DIRECTIVE, RefDirective,
    };
}

/// Attribute name predicates.
pub mod matchers {
    pub use sigil_std::matchers::{any_of, exact, prefix};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use sigil_std::testing::*;
}

/// Prelude module - common imports for Sigil.
///
/// # Usage
///
/// ```rust,ignore
/// use sigil::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Attribute, BoxError, Directive, DirectiveProcessor, DispatchError, NodeRef,
        ProcessingContext, RegistryBuilder, Scope, ScopeValue, UpdateHandle, UpdateHook,
        directives::{FnDirective, RefDirective},
    };
}

#[cfg(feature = "macros")]
pub use sigil_macros::directive;
