#![allow(dead_code)]

use sigil::{
    Attribute, BoxError, DirectiveProcessor, NodeRef, ProcessingContext, Registry, Scope,
    UpdateHandle,
    directives::FnDirective,
    matchers,
    testing::MockElement,
};

// ============================================================================
// Fixtures
// ============================================================================

pub type Element = NodeRef<MockElement>;

pub fn element(tag: &str) -> Element {
    NodeRef::new(MockElement::new(tag))
}

pub fn processor(registry: Registry<MockElement>) -> DirectiveProcessor<MockElement> {
    DirectiveProcessor::new(registry)
}

pub fn attr(name: &str, value: &str) -> Attribute {
    Attribute::new(name, value)
}

// ============================================================================
// Test Directives
// ============================================================================

/// `:prop="name"` copies the scope's text binding `name` into the target's
/// `name` property, and does it again on every refresh.
pub fn property_directive() -> impl sigil::Directive<MockElement> {
    FnDirective::new(
        "prop",
        matchers::exact(":prop"),
        |ctx: ProcessingContext<'_, MockElement>| {
            apply_property(&ctx)?;
            Ok(UpdateHandle::from_fn(|ctx: ProcessingContext<'_, MockElement>| {
                apply_property(&ctx)
            }))
        },
    )
}

fn apply_property(ctx: &ProcessingContext<'_, MockElement>) -> Result<(), BoxError> {
    let key = &ctx.attribute.value;
    let value = ctx
        .scope
        .get(key)
        .and_then(|value| value.as_text())
        .ok_or_else(|| format!("no text binding named `{key}`"))?;
    ctx.target.set_property(key.clone(), value);
    Ok(())
}

pub fn empty_scope() -> Scope<MockElement> {
    Scope::new()
}
