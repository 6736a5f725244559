//! Template rendering
//!
//! This module provides:
//! - `TemplateKind`: the five generated file kinds, in write order
//! - Pure render functions for view components and the state slice
//!
//! Rendering is plain string interpolation: it never fails and never escapes.

pub mod component;
pub mod kind;
pub mod slice;

pub use component::component_template;
pub use kind::TemplateKind;
pub use slice::slice_template;

/// Render the file body for `kind`, given the bare module name
///
/// View kinds append their suffix to `name` before rendering.
pub fn render(kind: TemplateKind, name: &str) -> String {
    match kind.view_suffix() {
        Some(suffix) => component_template(&format!("{}{}", name, suffix)),
        None => slice_template(name),
    }
}
