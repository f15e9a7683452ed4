//! Attribute name predicates.
//!
//! Convenience constructors for the `matches` side of a directive. A
//! directive's predicate can be any function of the attribute name; these
//! just cover the common shapes.

/// Matches one attribute name exactly.
pub fn exact(name: impl Into<String>) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static {
    let name = name.into();
    move |attribute: &str| attribute == name
}

/// Matches attribute names starting with `prefix`.
///
/// The bare prefix itself does not match.
pub fn prefix(prefix: impl Into<String>) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static {
    let prefix = prefix.into();
    move |attribute: &str| attribute.len() > prefix.len() && attribute.starts_with(prefix.as_str())
}

/// Matches any of the given attribute names exactly.
pub fn any_of<I, S>(names: I) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    move |attribute: &str| names.iter().any(|name| name == attribute)
}
