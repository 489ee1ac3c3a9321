/// Opaque host values.
///
/// Defines the `Object` handle, which lets embedding code pass arbitrary
/// Rust values through an expression. Objects can be stored, returned and
/// compared by identity, but no operator looks inside them.
pub mod object;

/// The dynamically typed `Variant` and its type tags.
pub mod core;
