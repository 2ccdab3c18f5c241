//! # hrl
//!
//! hrl is a tree-walking interpreter for HRL, a small scripting language for
//! looping behaviour programs. A program has a `setup` block that runs once
//! and a `main` block that runs over and over; `threadloop` blocks run
//! alongside it on background threads.
//!
//! ```
//! use hrl::{interpreter::console::Console, run_source};
//!
//! let (console, output) = Console::captured("");
//! run_source("setup { enum Color { RED, GREEN } } main { print(Color::GREEN); }",
//!            console,
//!            Some(1)).unwrap();
//! assert_eq!(output.lock().unwrap().as_slice(), b"1\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{console::Console, evaluator::core::Context, parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches metadata (such as source locations) to AST nodes for error
///   reporting.
/// - Shares function and threadloop bodies by reference counting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the public
/// API for interpreting and executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and text formatting.
///
/// This module provides reusable helpers that are used throughout the
/// interpreter and evaluator: truncating doubles to integers, checking array
/// indices, and formatting doubles the way HRL prints them.
///
/// # Responsibilities
/// - Convert between `f64`, `i64` and `usize` without silent data loss.
/// - Provide the canonical text form of doubles.
pub mod util;

/// Parses HRL source into a [`Program`].
///
/// Lexical failures are reported as [`Error::Lex`] and grammar failures as
/// [`Error::Parse`].
///
/// # Errors
/// Returns the first lexical or syntax error in the source.
///
/// # Examples
/// ```
/// use hrl::{error::Error, parse_program};
///
/// assert!(parse_program("setup { } main { print(1); }").is_ok());
/// assert!(matches!(parse_program(""), Err(Error::Lex(_))));
/// assert!(matches!(parse_program("setup { } main { print(1) }"), Err(Error::Parse(_))));
/// ```
pub fn parse_program(source: &str) -> Result<Program, Error> {
    parser::core::parse_program(source).map_err(|e| match e {
                                           ParseError::Lexical(lex) => Error::Lex(lex),
                                           other => Error::Parse(other),
                                       })
}

/// Parses and runs HRL source against `console`.
///
/// `iterations` bounds the number of `main` iterations; `None` runs until an
/// error occurs.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs, in the
/// main thread or in a threadloop.
///
/// # Examples
/// ```
/// use hrl::{interpreter::console::Console, run_source};
///
/// let (console, _) = Console::captured("");
/// let source = "setup { x : int = 1; } main { x = x / 0; }";
/// assert!(run_source(source, console, Some(3)).is_err());
/// ```
pub fn run_source(source: &str, console: Console, iterations: Option<u64>) -> Result<(), Error> {
    let program = parse_program(source)?;
    Context::new(console).run_program(&program, iterations)?;
    Ok(())
}
