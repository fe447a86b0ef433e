/// Core value representation.
///
/// Defines the runtime [`core::Value`] type, conversions from literals, type
/// names for diagnostics and the formatting used by `жаз`.
pub mod core;

/// Runtime type checks.
///
/// Zero values of declared types, the deep declared-type check used when a
/// value is stored, and the shallow same-variant check used by operators.
pub mod types;

/// Array and struct access.
///
/// Bounds-checked indexing and field selection, and the type-preserving
/// element and field updates used by assignment.
pub mod container;
