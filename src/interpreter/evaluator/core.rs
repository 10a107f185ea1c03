use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates `expr` against `env`.
///
/// This is a convenience wrapper around [`Environment::eval`].
///
/// # Errors
/// Returns a [`RuntimeError`] if a variable or function cannot be resolved or
/// a function is called with the wrong number of arguments.
///
/// # Example
/// ```
/// use doppio::{
///     interpreter::{environment::Environment, evaluator::core::evaluate, parser::core::Parser},
/// };
///
/// let expr = Parser::new("x!").parse_expression().unwrap();
///
/// let mut env = Environment::new();
/// env.set_variable("x", 4.0);
///
/// assert_eq!(evaluate(&expr, &env).unwrap(), 24.0);
/// ```
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult<f64> {
    env.eval(expr)
}

impl Environment {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant:
    ///
    /// - numbers evaluate to themselves, integers widened to `f64`,
    /// - identifiers are looked up as variables,
    /// - unary and binary operations evaluate their operands first,
    /// - function calls evaluate their arguments left to right and invoke the
    ///   registered function.
    ///
    /// The environment is never modified, so evaluating the same tree twice
    /// gives the same result.
    ///
    /// Recursion follows the height of the tree. Trees from the parser are
    /// bounded by [`MAX_HEIGHT`](crate::interpreter::parser::core::MAX_HEIGHT).
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] if a variable or function cannot be resolved
    /// or a function is called with the wrong number of arguments.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(n) => Ok(n.as_f64()),
            Expr::Identifier(name) => self.eval_variable(name),
            Expr::UnaryOp { op, operand } => {
                let value = self.eval(operand)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
        }
    }

    /// Resolves a variable.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if `name` is not bound.
    ///
    /// # Example
    /// ```
    /// use doppio::{error::RuntimeError, interpreter::environment::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("x", 10.0);
    ///
    /// assert_eq!(env.eval_variable("x"), Ok(10.0));
    /// assert_eq!(env.eval_variable("y"),
    ///            Err(RuntimeError::UnknownVariable { name: "y".to_string() }));
    /// ```
    pub fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.variable(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_owned() })
    }
}
