//! Built-in lints for schema validation.

mod dangling_reference;
mod duplicate_method;
mod duplicate_property;
mod empty_description;
mod field_shape;
mod unknown_group;

pub use dangling_reference::DanglingReferenceLint;
pub use duplicate_method::DuplicateMethodLint;
pub use duplicate_property::DuplicatePropertyLint;
pub use empty_description::EmptyDescriptionLint;
pub use field_shape::FieldShapeLint;
pub use unknown_group::{GroupPolicy, UnknownGroupLint};
