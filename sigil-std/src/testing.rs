//! Testing utilities for Sigil.
//!
//! This module provides utilities to make testing directives and dispatch easier.
//!
//! # Features
//!
//! - [`MockElement`]: A node type with interior-mutable properties
//! - [`RecordingDirective`]: A directive that records what it is asked to do
//! - [`CountingUpdate`]: An update hook that counts its invocations
//! - [`FailingDirective`]: A directive whose processing or update step fails

use sigil_core::{
    Attribute, BoxError, Directive, Node, ProcessingContext, UpdateHandle, UpdateHook,
};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};
use thiserror::Error;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Mock Element
// ============================================================================

/// A rendered element stand-in for tests.
///
/// Properties live behind a mutex so directives can mutate the target
/// through a shared [`NodeRef`](sigil_core::NodeRef).
#[derive(Debug, Default)]
pub struct MockElement {
    tag: String,
    properties: Mutex<HashMap<String, String>>,
}

impl MockElement {
    /// Create an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            properties: Mutex::new(HashMap::new()),
        }
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set a property.
    pub fn set_property(&self, name: impl Into<String>, value: impl Into<String>) {
        lock(&self.properties).insert(name.into(), value.into());
    }

    /// Read a property.
    pub fn property(&self, name: &str) -> Option<String> {
        lock(&self.properties).get(name).cloned()
    }

    /// Number of properties set.
    pub fn property_count(&self) -> usize {
        lock(&self.properties).len()
    }
}

// ============================================================================
// Recording Directive
// ============================================================================

type Matcher = dyn Fn(&str) -> bool + Send + Sync;

/// A directive that records every call it receives.
///
/// Clones share their records, so keep a clone before handing the directive
/// to a registry.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingDirective::new("text", ":text");
/// let registry = RegistryBuilder::new().add(recorder.clone()).build();
///
/// // Dispatch...
///
/// assert_eq!(recorder.process_calls(), 1);
/// ```
#[derive(Clone)]
pub struct RecordingDirective {
    name: String,
    matcher: Arc<Matcher>,
    matches_calls: Arc<AtomicUsize>,
    processed: Arc<Mutex<Vec<Attribute>>>,
    updates: Option<CountingUpdate>,
}

impl RecordingDirective {
    /// A recorder claiming exactly `attribute`.
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self::with_matcher(name, move |candidate: &str| candidate == attribute)
    }

    /// A recorder claiming whatever `matcher` accepts.
    pub fn with_matcher<F>(name: impl Into<String>, matcher: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            matcher: Arc::new(matcher),
            matches_calls: Arc::new(AtomicUsize::new(0)),
            processed: Arc::new(Mutex::new(Vec::new())),
            updates: None,
        }
    }

    /// Return a counting update hook instead of the no-op one.
    pub fn with_update(mut self) -> Self {
        self.updates = Some(CountingUpdate::new());
        self
    }

    /// How often `matches` was called.
    pub fn matches_calls(&self) -> usize {
        self.matches_calls.load(Ordering::SeqCst)
    }

    /// How often `process` was called.
    pub fn process_calls(&self) -> usize {
        lock(&self.processed).len()
    }

    /// Attributes passed to `process`, in call order.
    pub fn processed(&self) -> Vec<Attribute> {
        lock(&self.processed).clone()
    }

    /// How often the returned update hook ran.
    pub fn update_calls(&self) -> usize {
        self.updates.as_ref().map_or(0, CountingUpdate::count)
    }
}

impl<N: Node> Directive<N> for RecordingDirective {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, attribute: &str) -> bool {
        self.matches_calls.fetch_add(1, Ordering::SeqCst);
        (self.matcher)(attribute)
    }

    fn process(&self, ctx: ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError> {
        lock(&self.processed).push(ctx.attribute.clone());
        Ok(match &self.updates {
            Some(counter) => UpdateHandle::new(counter.clone()),
            None => UpdateHandle::noop(),
        })
    }
}

// ============================================================================
// Counting Update
// ============================================================================

/// An update hook that counts its invocations.
#[derive(Clone, Debug, Default)]
pub struct CountingUpdate {
    calls: Arc<AtomicUsize>,
}

impl CountingUpdate {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<N: Node> UpdateHook<N> for CountingUpdate {
    fn update(&self, _ctx: ProcessingContext<'_, N>) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Directive
// ============================================================================

/// The error raised by [`FailingDirective`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("test fault: {0}")]
pub struct TestFault(pub String);

/// A directive that fails on purpose.
#[derive(Debug, Clone)]
pub struct FailingDirective {
    attribute: String,
    message: String,
    on_update: bool,
}

impl FailingDirective {
    /// Fails while processing `attribute`.
    pub fn new(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            message: message.into(),
            on_update: false,
        }
    }

    /// Processes `attribute` successfully, then fails on every refresh.
    pub fn on_update(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            on_update: true,
            ..Self::new(attribute, message)
        }
    }
}

impl<N: Node> Directive<N> for FailingDirective {
    fn name(&self) -> &str {
        "failing"
    }

    fn matches(&self, attribute: &str) -> bool {
        attribute == self.attribute
    }

    fn process(&self, _ctx: ProcessingContext<'_, N>) -> Result<UpdateHandle<N>, BoxError> {
        let fault = TestFault(self.message.clone());
        if !self.on_update {
            return Err(Box::new(fault));
        }
        Ok(UpdateHandle::from_fn(move |_ctx| Err(Box::new(fault.clone()) as BoxError)))
    }
}
