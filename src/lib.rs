//! # doppio
//!
//! doppio is an arithmetic expression engine written in Rust.
//! It scans source text into tokens, parses them into an expression tree by
//! precedence climbing while folding constant sub-expressions, and evaluates
//! the tree against an environment of variables and native functions.

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
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{environment::Environment, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the `Number` literal type that
/// represent an expression as a tree. The tree is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the node types for literals, names, operators and calls.
/// - Defines the integer/float literal type and its conversions.
/// - Renders trees back to infix text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating an expression. Each error carries the offending token or name,
/// and parse errors carry the source line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the token model, lexer, parser, environment and
/// evaluator.
pub mod interpreter;
/// General numeric utilities.
///
/// Conversions between `i64` and `f64`, and the integer and floating-point
/// helpers shared by constant folding and evaluation.
pub mod util;

/// Parses `source` as a single expression.
///
/// The whole input must form one expression; anything after it is an error.
///
/// # Errors
/// Returns a [`ParseError`] describing the first syntax error.
///
/// # Examples
/// ```
/// use doppio::{
///     ast::{Expr, Number},
///     parse,
/// };
///
/// // Constant sub-expressions are folded while parsing.
/// assert_eq!(parse("(2 + 3) * 4").unwrap(), Expr::Number(Number::Integer(20)));
/// assert_eq!(parse("5!").unwrap(), Expr::Number(Number::Integer(120)));
///
/// // A dangling exponent marker is rejected.
/// assert!(parse("1e").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source).parse_complete()
}

/// Returns the value of the expression in `source`, evaluated against `env`.
///
/// # Errors
/// Returns [`Error::Parse`] if the source is not a valid expression and
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use doppio::{get_result, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
/// env.set_variable("x", 4.0);
///
/// assert_eq!(get_result("x! / 2", &env).unwrap(), 12.0);
///
/// // Example with an intentional error (unknown variable).
/// assert!(get_result("y + 1", &env).is_err());
/// ```
pub fn get_result(source: &str, env: &Environment) -> Result<f64, Error> {
    let expr = parse(source)?;
    Ok(env.eval(&expr)?)
}
