//! Error types for Sigil.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`SigilError`] - Top-level error type for all Sigil operations
//! - [`DispatchError`] - Faults raised by a directive while processing or refreshing
//! - [`RegistryError`] - Errors while building a registry from configuration
//! - [`ScopeError`] - Errors from scope bindings

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Sigil operations.
#[derive(Error, Debug)]
pub enum SigilError {
    /// A directive raised a fault during dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The registry could not be built.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A scope binding was rejected.
    #[error("scope error: {0}")]
    Scope(#[from] ScopeError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Faults raised by a matched directive.
///
/// The directive's own error is kept untouched as the `source`, so callers
/// can downcast it or take it back with [`DispatchError::into_source`].
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The one-time processing step failed.
    #[error("directive `{directive}` failed to process attribute `{attribute}`")]
    Process {
        /// Name of the directive that raised the fault.
        directive: String,
        /// Name of the attribute being processed.
        attribute: String,
        /// The error returned by the directive.
        #[source]
        source: BoxError,
    },

    /// An update hook failed during a refresh cycle.
    #[error("update hook of directive `{directive}` failed for attribute `{attribute}`")]
    Update {
        /// Name of the directive that produced the hook.
        directive: String,
        /// Name of the attribute the hook is bound to.
        attribute: String,
        /// The error returned by the hook.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Name of the directive that raised the fault.
    pub fn directive(&self) -> &str {
        match self {
            Self::Process { directive, .. } | Self::Update { directive, .. } => directive,
        }
    }

    /// Name of the attribute the fault was raised for.
    pub fn attribute(&self) -> &str {
        match self {
            Self::Process { attribute, .. } | Self::Update { attribute, .. } => attribute,
        }
    }

    /// Returns the directive's original error.
    pub fn into_source(self) -> BoxError {
        match self {
            Self::Process { source, .. } | Self::Update { source, .. } => source,
        }
    }
}

/// Errors that can occur while building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A configured directive name has no entry in the catalog.
    #[error("unknown directive: {0}")]
    UnknownDirective(String),

    /// A catalog entry with this name already exists.
    #[error("directive already registered under name: {0}")]
    DuplicateName(String),
}

/// Errors that can occur when binding names in a [`Scope`](crate::Scope).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// Normal assignment to a read-only binding.
    #[error("binding `{0}` is read-only")]
    ReadOnly(String),
}

// Convenience conversions
impl From<BoxError> for SigilError {
    fn from(err: BoxError) -> Self {
        SigilError::Custom(err)
    }
}
