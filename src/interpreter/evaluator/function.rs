use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

impl Environment {
    /// Evaluates a function call.
    ///
    /// The callee is resolved first. The number of argument expressions must
    /// equal the arity it was registered with; then each argument is evaluated
    /// exactly once, left to right, and the native entry point is invoked with
    /// the results.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if `name` is not registered.
    /// - [`RuntimeError::ArgumentCountMismatch`] if the call has the wrong
    ///   number of arguments.
    /// - Any error raised while evaluating an argument.
    ///
    /// # Example
    /// ```
    /// use doppio::{
    ///     ast::{Expr, Number},
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set_function("sub", 2, |args| args[0] - args[1]).unwrap();
    ///
    /// let args = vec![Expr::Number(Number::Integer(10)), Expr::Number(Number::Float(0.5))];
    /// assert_eq!(env.eval_function_call("sub", &args).unwrap(), 9.5);
    /// assert!(env.eval_function_call("sub", &args[..1]).is_err());
    /// ```
    pub fn eval_function_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let function = self.function(name)
                           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_owned() })?;

        if arguments.len() != function.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_owned(),
                                                             expected: function.arity(),
                                                             found:    arguments.len(), });
        }

        let mut args = Vec::with_capacity(arguments.len());
        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        let result = function.call(&args);
        debug!("called {name}{args:?} = {result}");
        Ok(result)
    }
}
