/// Operator dispatch and concatenation.
pub mod core;

/// Integer arithmetic: `+`, `-`, `*`, `/` and `%`.
pub mod scalar;

/// Relational and equality operators.
pub mod comparison;

/// Logical `and` and `or`.
pub mod logic;
