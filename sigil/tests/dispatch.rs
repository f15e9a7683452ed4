//! Dispatch tests: lookup order, process-once, and fault propagation.

use sigil::{
    DispatchError, Registry, RegistryBuilder,
    directives::RefDirective,
    matchers,
    testing::{FailingDirective, MockElement, RecordingDirective, TestFault},
};

mod common;
use common::{attr, element, empty_scope, processor};

#[test]
fn test_find_match_returns_earliest_matching() {
    let hash = RecordingDirective::with_matcher("hash", matchers::prefix("#"));
    let exact = RecordingDirective::new("exact", "#model");
    let colon = RecordingDirective::with_matcher("colon", matchers::prefix(":"));

    let registry: Registry<MockElement> = RegistryBuilder::new()
        .add(colon.clone())
        .add(hash.clone())
        .add(exact.clone())
        .build();

    let cases = [
        ("#model", Some("hash")),
        ("#ref", Some("hash")),
        (":text", Some("colon")),
        ("class", None),
        ("", None),
    ];
    for (name, expected) in cases {
        assert_eq!(
            registry.find_match(name).map(|d| d.name()),
            expected,
            "lookup of {name:?}"
        );
    }
    assert_eq!(exact.matches_calls(), 2, "only consulted for names nothing earlier claimed");
}

#[test]
fn test_shadowed_directive_is_never_invoked() {
    let first = RecordingDirective::new("first", ":text");
    let second = RecordingDirective::new("second", ":text");
    let processor = processor(
        RegistryBuilder::new()
            .add(first.clone())
            .add(second.clone())
            .build(),
    );

    let target = element("p");
    let mut scope = empty_scope();
    for _ in 0..3 {
        let binding = processor
            .dispatch(&attr(":text", "body"), &target, &mut scope)
            .unwrap()
            .unwrap();
        assert_eq!(binding.directive(), "first");
    }

    assert_eq!(first.process_calls(), 3);
    assert_eq!(second.process_calls(), 0);
    assert_eq!(second.matches_calls(), 0);
}

#[test]
fn test_process_called_exactly_once_per_occurrence() {
    let text = RecordingDirective::new("text", ":text");
    let processor = processor(RegistryBuilder::new().add(text.clone()).build());

    let target = element("p");
    let mut scope = empty_scope();
    processor
        .dispatch(&attr(":text", "a"), &target, &mut scope)
        .unwrap();
    processor
        .dispatch(&attr(":text", "b"), &target, &mut scope)
        .unwrap();

    assert_eq!(text.processed(), vec![attr(":text", "a"), attr(":text", "b")]);
}

#[test]
fn test_unmatched_leaves_target_and_scope_untouched() {
    let text = RecordingDirective::new("text", ":text");
    let processor = processor(
        RegistryBuilder::new()
            .add(RefDirective)
            .add(text.clone())
            .build(),
    );

    let target = element("div");
    let mut scope = empty_scope();
    scope.assign("existing", "value").unwrap();

    let result = processor
        .dispatch(&attr("class", "wide"), &target, &mut scope)
        .unwrap();

    assert!(result.is_none());
    assert_eq!(scope.len(), 1);
    assert_eq!(scope.get("existing").and_then(|v| v.as_text()), Some("value"));
    assert_eq!(target.property_count(), 0);
    assert_eq!(text.process_calls(), 0);
}

#[test]
fn test_empty_registry_matches_nothing() {
    let processor = processor(RegistryBuilder::new().build());
    let target = element("div");
    let mut scope = empty_scope();

    assert!(processor.registry().is_empty());
    assert!(processor
        .dispatch(&attr("#ref", "el"), &target, &mut scope)
        .unwrap()
        .is_none());
    assert!(scope.is_empty());
}

#[test]
fn test_directive_fault_reaches_caller() {
    let after = RecordingDirective::new("after", ":after");
    let processor = processor(
        RegistryBuilder::new()
            .add(FailingDirective::new(":boom", "bad input"))
            .add(after.clone())
            .build(),
    );

    let target = element("div");
    let mut scope = empty_scope();
    let err = processor
        .dispatch(&attr(":boom", "x"), &target, &mut scope)
        .unwrap_err();

    match &err {
        DispatchError::Process {
            directive,
            attribute,
            source,
        } => {
            assert_eq!(directive, "failing");
            assert_eq!(attribute, ":boom");
            assert_eq!(
                source.downcast_ref::<TestFault>(),
                Some(&TestFault("bad input".to_string()))
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(after.matches_calls(), 0, "no fallback to later directives");
}

#[test]
fn test_process_element_stops_at_first_fault() {
    let text = RecordingDirective::new("text", ":text");
    let processor = processor(
        RegistryBuilder::new()
            .add(RefDirective)
            .add(FailingDirective::new(":boom", "stop"))
            .add(text.clone())
            .build(),
    );

    let attributes = [attr("#ref", "el"), attr(":boom", ""), attr(":text", "t")];
    let target = element("div");
    let mut scope = empty_scope();
    let err = processor
        .process_element(&attributes, &target, &mut scope)
        .unwrap_err();

    assert_eq!(err.attribute(), ":boom");
    assert!(scope.node("el").is_some(), "earlier effects are kept");
    assert_eq!(text.process_calls(), 0);
}
