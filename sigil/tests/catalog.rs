//! Configuration-driven registry construction.

use sigil::{
    BoxError, DirectiveCatalog, ProcessingContext, RegistryBuilder, RegistryError,
    TracedDirective, UpdateHandle,
    directives::{FnDirective, RefDirective},
    matchers,
    testing::{MockElement, RecordingDirective},
};

mod common;
use common::{attr, element, empty_scope, processor};

fn catalog() -> DirectiveCatalog<MockElement> {
    let mut catalog = DirectiveCatalog::with_standard();
    catalog
        .register("traced-ref", || Box::new(TracedDirective::new(RefDirective)))
        .unwrap();
    catalog
        .register("any-hash", || {
            Box::new(FnDirective::new(
                "any-hash",
                matchers::prefix("#"),
                |ctx: ProcessingContext<'_, MockElement>| -> Result<UpdateHandle<MockElement>, BoxError> {
                    ctx.target.set_property(ctx.attribute.name.clone(), ctx.attribute.value.clone());
                    Ok(UpdateHandle::noop())
                },
            ))
        })
        .unwrap();
    catalog
}

#[test]
fn test_configured_order_decides_first_match() {
    let catalog = catalog();
    let target = element("div");

    let ref_first = processor(
        RegistryBuilder::from_names(&catalog, ["ref", "any-hash"])
            .unwrap()
            .build(),
    );
    let mut scope = empty_scope();
    ref_first
        .dispatch(&attr("#ref", "el"), &target, &mut scope)
        .unwrap();
    assert!(scope.node("el").is_some());
    assert_eq!(target.property_count(), 0);

    let hash_first = processor(
        RegistryBuilder::from_names(&catalog, ["any-hash", "ref"])
            .unwrap()
            .build(),
    );
    let mut scope = empty_scope();
    hash_first
        .dispatch(&attr("#ref", "el"), &target, &mut scope)
        .unwrap();
    assert!(scope.is_empty());
    assert_eq!(target.property("#ref").as_deref(), Some("el"));
}

#[test]
fn test_catalog_builds_fresh_instances() {
    let catalog = catalog();
    let registry = RegistryBuilder::from_names(&catalog, ["traced-ref", "ref"])
        .unwrap()
        .build();

    assert_eq!(registry.names(), vec!["ref", "ref"]);
    assert_eq!(catalog.names(), vec!["any-hash", "ref", "traced-ref"]);
}

#[test]
fn test_unknown_configured_name() {
    let result = RegistryBuilder::from_names(&catalog(), ["ref", "bind"]);
    assert!(matches!(result, Err(RegistryError::UnknownDirective(ref name)) if name == "bind"));
}

#[test]
fn test_mixing_configured_and_explicit_directives() {
    let text = RecordingDirective::new("text", ":text");
    let registry = RegistryBuilder::from_names(&catalog(), ["ref"])
        .unwrap()
        .add(text.clone())
        .build();
    let processor = processor(registry);

    let target = element("p");
    let mut scope = empty_scope();
    let bindings = processor
        .process_element(&[attr("#ref", "p"), attr(":text", "body")], &target, &mut scope)
        .unwrap();

    assert_eq!(bindings.len(), 2);
    assert_eq!(text.process_calls(), 1);
}
