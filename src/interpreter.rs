/// The token module defines the vocabulary of the lexer.
///
/// It declares every token kind together with its printable name, its fixed
/// spelling and its binding precedence, and the `Token` type that locates a
/// scanned token in the source buffer.
///
/// # Responsibilities
/// - Enumerates punctuation, operators, literals, keywords and identifiers.
/// - Provides the precedence table the parser climbs over.
/// - Classifies kinds into keywords and assignment, binary and unary operators.
pub mod token;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads a fixed source buffer and produces tokens one at a time,
/// keeping one token of lookahead. Input it cannot classify is returned as an
/// illegal token rather than an error.
///
/// # Responsibilities
/// - Skips whitespace and tracks line numbers.
/// - Separates identifiers from reserved keywords.
/// - Scans integer, fixed-point and exponent-form numeric literals.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser consumes the lexer's token stream by recursive descent with
/// precedence climbing for binary operators, and folds operations on constant
/// operands into literals while it builds the tree.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Folds constant sub-expressions and constant factorials.
/// - Reports the first syntax error with the offending token and line.
pub mod parser;
/// The environment module holds the bindings expressions are evaluated
/// against.
///
/// An environment maps names to variable values and to native functions of a
/// fixed arity. It is populated by the host before evaluation and only read
/// by the evaluator.
///
/// # Responsibilities
/// - Registers and resolves variables and functions.
/// - Enforces the maximum function arity.
/// - Provides an optional library of standard math functions and constants.
pub mod environment;
/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree recursively, resolving names in an
/// environment and applying floating-point arithmetic.
///
/// # Responsibilities
/// - Evaluates literals, variables, operators and function calls.
/// - Checks function arities at call time.
/// - Reports unresolved names instead of substituting a default.
pub mod evaluator;
