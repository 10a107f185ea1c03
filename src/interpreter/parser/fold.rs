use log::debug;

use crate::{
    ast::{BinaryOperator, Expr, Number, UnaryOperator},
    error::ParseError,
    interpreter::parser::core::{Node, ParseResult, Parser},
    util::num::{checked_factorial, floored_mod},
};

impl Parser<'_> {
    /// Combines two operands with a binary operator.
    ///
    /// Two literals are folded into one; anything else becomes an
    /// `Expr::BinaryOp` node.
    pub(in crate::interpreter::parser) fn combine(op: BinaryOperator,
                                                  left: Node,
                                                  right: Node,
                                                  line: usize)
                                                  -> ParseResult<Node> {
        if let (Some(l), Some(r)) = (left.expr.as_number(), right.expr.as_number()) {
            let folded = fold_binary(op, l, r, line)?;
            debug!("folded {l} {op} {r} into {folded}");
            return Ok(Node::leaf(Expr::Number(folded)));
        }
        let height = left.height.max(right.height);
        Node::branch(Expr::BinaryOp { op,
                                      left: Box::new(left.expr),
                                      right: Box::new(right.expr) },
                     height,
                     line)
    }

    /// Applies the factorial to an operand.
    ///
    /// A literal is folded immediately; anything else is deferred to
    /// evaluation as an `Expr::UnaryOp` node.
    pub(in crate::interpreter::parser) fn factorial(operand: Node, line: usize) -> ParseResult<Node> {
        if let Some(n) = operand.expr.as_number() {
            let folded = fold_factorial(n, line)?;
            debug!("folded {n}! into {folded}");
            return Ok(Node::leaf(Expr::Number(folded)));
        }
        Node::branch(Expr::UnaryOp { op:      UnaryOperator::Factorial,
                                     operand: Box::new(operand.expr), },
                     operand.height,
                     line)
    }
}

/// Computes a binary operation on two literals.
///
/// When both operands are integers, `+`, `-`, `*` and `%` are computed in
/// `i64` (`%` truncates like Rust's `%`), while `/` and `^` always produce a
/// float. As soon as one operand is a float, the operation is done in `f64`
/// and `%` is the floored modulo `x - n * floor(x / n)`.
///
/// # Errors
/// - [`ParseError::Overflow`] if integer arithmetic overflows.
/// - [`ParseError::DivisionByZero`] for an integer `%` by zero.
///
/// # Example
/// ```
/// use doppio::{
///     ast::{BinaryOperator, Number},
///     interpreter::parser::fold::fold_binary,
/// };
///
/// let seven = Number::Integer(7);
/// let two = Number::Integer(2);
///
/// assert_eq!(fold_binary(BinaryOperator::Mul, seven, two, 1), Ok(Number::Integer(14)));
/// assert_eq!(fold_binary(BinaryOperator::Div, seven, two, 1), Ok(Number::Float(3.5)));
/// assert_eq!(fold_binary(BinaryOperator::Mod, Number::Integer(-7), two, 1),
///            Ok(Number::Integer(-1)));
/// assert_eq!(fold_binary(BinaryOperator::Mod, Number::Float(-7.0), two, 1),
///            Ok(Number::Float(1.0)));
/// ```
pub fn fold_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   line: usize)
                   -> ParseResult<Number> {
    if let (Number::Integer(a), Number::Integer(b)) = (left, right) {
        let result = match op {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Mod => {
                if b == 0 {
                    return Err(ParseError::DivisionByZero { line });
                }
                a.checked_rem(b)
            },
            BinaryOperator::Div | BinaryOperator::Pow => {
                return Ok(Number::Float(fold_float(op, left.as_f64(), right.as_f64())));
            },
        };
        return result.map(Number::Integer)
                     .ok_or(ParseError::Overflow { line });
    }

    Ok(Number::Float(fold_float(op, left.as_f64(), right.as_f64())))
}

/// Computes the factorial of a literal.
///
/// # Errors
/// - [`ParseError::FactorialOfNonInteger`] if `n` is a float, even one with no
///   fractional part.
/// - [`ParseError::Overflow`] if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use doppio::{ast::Number, error::ParseError, interpreter::parser::fold::fold_factorial};
///
/// assert_eq!(fold_factorial(Number::Integer(5), 1), Ok(Number::Integer(120)));
/// assert_eq!(fold_factorial(Number::Float(5.0), 1),
///            Err(ParseError::FactorialOfNonInteger { line: 1 }));
/// ```
pub fn fold_factorial(n: Number, line: usize) -> ParseResult<Number> {
    match n {
        Number::Integer(k) => checked_factorial(k).map(Number::Integer)
                                                  .ok_or(ParseError::Overflow { line }),
        Number::Float(_) => Err(ParseError::FactorialOfNonInteger { line }),
    }
}

fn fold_float(op: BinaryOperator, x: f64, y: f64) -> f64 {
    match op {
        BinaryOperator::Add => x + y,
        BinaryOperator::Sub => x - y,
        BinaryOperator::Mul => x * y,
        BinaryOperator::Div => x / y,
        BinaryOperator::Pow => x.powf(y),
        BinaryOperator::Mod => floored_mod(x, y),
    }
}
