/// Core parsing logic.
///
/// Contains the `Parser` type, the expression entry point, and the token
/// expectation helpers shared by the other parser modules.
pub mod core;

/// Binary expression parsing.
///
/// Implements precedence climbing over the binary operators, folding constant
/// operands as it goes.
pub mod binary;

/// Postfix and primary expression parsing.
///
/// Handles literals, identifiers, parenthesized expressions, function call
/// argument lists and the factorial operator.
pub mod postfix;

/// Constant folding.
///
/// Computes operations on literal operands at parse time, following the
/// integer/float promotion rules of numeric literals.
pub mod fold;
