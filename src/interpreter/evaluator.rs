/// Core evaluation logic.
///
/// Contains the recursive tree walker, the variable lookup and the result
/// type shared by the evaluator.
pub mod core;

/// Operator evaluation logic.
///
/// Implements the floating-point semantics of the binary operators and the
/// deferred factorial.
pub mod operator;

/// Function call evaluation.
///
/// Resolves the callee, checks the argument count against its arity, and
/// invokes the native entry point.
pub mod function;
