//! # sigil-core
//!
//! Core traits for the Sigil directive dispatch core.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! directive authors that don't need the full `sigil-std` implementation.
//!
//! # Model
//!
//! A templating engine renders nodes and hands every attribute occurrence to
//! the dispatch core as an `(attribute, target, scope)` triple. The core picks
//! the first registered [`Directive`] whose predicate accepts the attribute
//! name, runs its one-time processing step, and keeps the [`UpdateHandle`] it
//! returns for later refresh cycles.
//!
//! ## Values
//!
//! - [`Node`] / [`NodeRef`] - the engine's node type and an identity handle to it
//! - [`Attribute`] - an already-parsed attribute occurrence
//! - [`Scope`] - the namespace attributes resolve against
//! - [`ProcessingContext`] - the per-invocation bundle of the three
//!
//! ## Contracts
//!
//! - [`Directive`] - match predicate plus processing step
//! - [`UpdateHook`] - reactive refresh callback, shared through [`UpdateHandle`]
//!
//! # Error Types
//!
//! - [`SigilError`] - Top-level error type
//! - [`DispatchError`] - Faults raised by directives during dispatch or refresh
//! - [`RegistryError`] - Registry construction errors
//! - [`ScopeError`] - Scope binding errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod attribute;
mod context;
mod directive;
mod error;
mod node;
mod scope;
mod update;

// Re-exports
pub use attribute::Attribute;
pub use context::ProcessingContext;
pub use directive::Directive;
pub use error::{BoxError, DispatchError, RegistryError, ScopeError, SigilError};
pub use node::{Node, NodeRef};
pub use scope::{Scope, ScopeValue};
pub use update::{FnUpdate, UpdateHandle, UpdateHook};
