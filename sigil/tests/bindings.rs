//! Retained update hooks and refresh cycles.

use sigil::{
    DispatchError, ProcessingContext, RegistryBuilder, UpdateHandle,
    directives::{FnDirective, RefDirective},
    matchers,
    testing::{FailingDirective, MockElement, RecordingDirective, TestFault},
};
use std::sync::{Arc, Mutex};

mod common;
use common::{attr, element, empty_scope, processor, property_directive};

#[test]
fn test_refresh_reapplies_reactive_effect() {
    let processor = processor(RegistryBuilder::new().add(property_directive()).build());
    let target = element("h1");
    let mut scope = empty_scope();
    scope.assign("title", "Draft").unwrap();

    let binding = processor
        .dispatch(&attr(":prop", "title"), &target, &mut scope)
        .unwrap()
        .unwrap();
    assert_eq!(target.property("title").as_deref(), Some("Draft"));

    scope.assign("title", "Published").unwrap();
    binding.update(&target, &mut scope).unwrap();
    assert_eq!(target.property("title").as_deref(), Some("Published"));
}

#[test]
fn test_update_with_refreshed_attribute() {
    let processor = processor(RegistryBuilder::new().add(property_directive()).build());
    let target = element("h1");
    let mut scope = empty_scope();
    scope.assign("title", "Hello").unwrap();
    scope.assign("subtitle", "World").unwrap();

    let binding = processor
        .dispatch(&attr(":prop", "title"), &target, &mut scope)
        .unwrap()
        .unwrap();
    binding
        .update_with(&attr(":prop", "subtitle"), &target, &mut scope)
        .unwrap();

    assert_eq!(target.property("subtitle").as_deref(), Some("World"));
    assert_eq!(binding.attribute().value, "title", "the binding keeps its original attribute");
}

#[test]
fn test_binding_set_runs_in_dispatch_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let recorder = |label: &'static str, attribute: &'static str| {
        let order = order.clone();
        FnDirective::new(
            label,
            matchers::exact(attribute),
            move |_ctx: ProcessingContext<'_, MockElement>| {
                let order = order.clone();
                Ok(UpdateHandle::from_fn(move |_ctx: ProcessingContext<'_, MockElement>| {
                    order.lock().unwrap().push(label);
                    Ok(())
                }))
            },
        )
    };

    let processor = processor(
        RegistryBuilder::new()
            .add(recorder("first", ":a"))
            .add(RefDirective)
            .add(recorder("second", ":b"))
            .build(),
    );

    let attributes = [attr(":b", ""), attr("#ref", "el"), attr(":a", "")];
    let target = element("div");
    let mut scope = empty_scope();
    let bindings = processor
        .process_element(&attributes, &target, &mut scope)
        .unwrap();

    assert_eq!(bindings.len(), 3);
    assert_eq!(bindings.active(), 2);
    let directives: Vec<&str> = bindings.iter().map(|b| b.directive()).collect();
    assert_eq!(directives, vec!["second", "ref", "first"]);

    bindings.update(&target, &mut scope).unwrap();
    assert_eq!(*order.lock().unwrap(), vec!["second", "first"]);
}

#[test]
fn test_update_fault_reaches_caller() {
    let processor = processor(
        RegistryBuilder::new()
            .add(FailingDirective::on_update(":flaky", "refresh failed"))
            .build(),
    );
    let target = element("div");
    let mut scope = empty_scope();

    let binding = processor
        .dispatch(&attr(":flaky", ""), &target, &mut scope)
        .unwrap()
        .unwrap();
    let err = binding.update(&target, &mut scope).unwrap_err();

    assert!(matches!(err, DispatchError::Update { .. }));
    assert_eq!(err.directive(), "failing");
    assert_eq!(
        err.into_source().downcast_ref::<TestFault>(),
        Some(&TestFault("refresh failed".to_string()))
    );
}

#[test]
fn test_binding_set_stops_at_first_update_fault() {
    let after = RecordingDirective::new("after", ":after").with_update();
    let processor = processor(
        RegistryBuilder::new()
            .add(FailingDirective::on_update(":flaky", "down"))
            .add(after.clone())
            .build(),
    );
    let attributes = [attr(":flaky", ""), attr(":after", "")];
    let target = element("div");
    let mut scope = empty_scope();

    let bindings = processor
        .process_element(&attributes, &target, &mut scope)
        .unwrap();
    assert!(bindings.update(&target, &mut scope).is_err());
    assert_eq!(after.update_calls(), 0);
}

#[test]
fn test_hooks_survive_processor_clones() {
    let text = RecordingDirective::new("text", ":text").with_update();
    let processor = processor(RegistryBuilder::new().add(text.clone()).build());
    let renderer = processor.clone();

    let target = element("span");
    let mut scope = empty_scope();
    let binding = renderer
        .dispatch(&attr(":text", "label"), &target, &mut scope)
        .unwrap()
        .unwrap();
    drop(processor);
    drop(renderer);

    binding.update(&target, &mut scope).unwrap();
    binding.clone().update(&target, &mut scope).unwrap();
    assert_eq!(text.update_calls(), 2);
}
