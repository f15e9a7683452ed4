//! # sigil-std
//!
//! Standard implementations for the Sigil directive dispatch core.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], [`RegistryBuilder`] and the name-keyed
//!   [`DirectiveCatalog`] for configuration-driven setup
//! - **Dispatch**: [`DirectiveProcessor`], [`Binding`], [`BindingSet`]
//! - **Standard directives**: [`RefDirective`], [`FnDirective`]
//! - **Matchers**: ready-made attribute name predicates
//! - **Instrumentation**: [`TracedDirective`]
//! - **Testing**: mocks and recorders in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use sigil_core;

// Modules
pub mod catalog;
pub mod directives;
pub mod instrument;
pub mod matchers;
pub mod processor;
pub mod registry;
pub mod testing;

pub use catalog::DirectiveCatalog;
pub use directives::{FnDirective, RefDirective};
pub use instrument::TracedDirective;
pub use processor::{Binding, BindingSet, DirectiveProcessor};
pub use registry::{Registry, RegistryBuilder};
