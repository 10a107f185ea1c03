use log::debug;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::environment::Environment,
    util::num::{float_factorial, floored_mod},
};

impl Environment {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// All arithmetic is done in `f64`:
    /// - `^` is `powf`,
    /// - `%` is the floored modulo `x - n * floor(x / n)`, so the result takes
    ///   the sign of the divisor,
    /// - division by zero is not an error and yields an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use doppio::{ast::BinaryOperator, interpreter::environment::Environment};
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Mod, -1.0, 3.0), 2.0);
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
            BinaryOperator::Mod => floored_mod(left, right),
        }
    }

    /// Applies a unary operator to an evaluated operand.
    ///
    /// The factorial treats its operand as a count: it multiplies `2, 3, ...`
    /// up to the operand, ignoring any fractional part.
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Factorial => {
                let result = float_factorial(value);
                debug!("evaluated deferred factorial {value}! = {result}");
                result
            },
        }
    }
}
