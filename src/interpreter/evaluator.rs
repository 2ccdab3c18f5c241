/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: integer
/// arithmetic, concatenation, comparisons and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric pass-through, arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, statement
/// execution and the block-level control flow rules.
pub mod core;

/// Process-wide tables and per-call frames.
///
/// Holds the enum, struct and function registries shared by every call and
/// thread, and the variable frame each function call creates.
pub mod registry;

/// Enums, struct instances and arrays.
///
/// Evaluates enum ordinals, struct field reads and writes, array literals and
/// indexing.
pub mod composite;

/// Background threadloops.
///
/// Spawns threadloop bodies on their own threads and reports their failures
/// back to the main loop.
pub mod threadloop;

/// The `setup` and `main` driver.
///
/// Runs `setup` once and then `main` repeatedly.
pub mod program;

/// Utility functions for evaluation.
///
/// Provides lock helpers shared by the context and the registries.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
