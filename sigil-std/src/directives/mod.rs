//! Standard directive implementations.
//!
//! - [`RefDirective`] - binds the target node to a read-only scope name (`#ref="name"`)
//! - [`FnDirective`] - a directive assembled from closures

pub mod func;
pub mod reference;

pub use func::FnDirective;
pub use reference::{REF_ATTRIBUTE, REF_DIRECTIVE, RefDirective};
