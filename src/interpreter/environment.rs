use std::{collections::HashMap, fmt, sync::Arc};

use crate::error::RuntimeError;

/// Standard math functions and constants a host can opt into.
pub mod builtin;

/// Largest number of parameters a registered function may take.
pub const MAX_ARITY: usize = 9;

/// The native entry point of a function.
///
/// It receives exactly as many evaluated arguments as the function's arity,
/// in call order, and returns the call's value.
pub type NativeFn = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// A callable registered in an [`Environment`].
#[derive(Clone)]
pub struct Function {
    name:  String,
    arity: usize,
    entry: NativeFn,
}

impl Function {
    /// Creates a function descriptor.
    ///
    /// # Errors
    /// Returns [`RuntimeError::InvalidArity`] if `arity` exceeds
    /// [`MAX_ARITY`].
    pub fn new<F>(name: impl Into<String>, arity: usize, entry: F) -> Result<Self, RuntimeError>
        where F: Fn(&[f64]) -> f64 + Send + Sync + 'static
    {
        let name = name.into();
        if arity > MAX_ARITY {
            return Err(RuntimeError::InvalidArity { name, arity });
        }
        Ok(Self { name,
                  arity,
                  entry: Arc::new(entry) })
    }

    /// The name the function was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the native entry point.
    ///
    /// The caller is responsible for passing exactly [`Function::arity`]
    /// arguments; the evaluator checks this before calling.
    #[must_use]
    pub fn call(&self, args: &[f64]) -> f64 {
        (self.entry)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Stores the bindings an expression is evaluated against.
///
/// An environment maps variable names to values and function names to
/// [`Function`]s. Both maps are case-sensitive and independent of each other,
/// so a variable and a function may share a name. The evaluator only ever
/// reads from an environment; it is `Send + Sync`, so one environment can
/// serve evaluations on several threads.
///
/// ## Usage
/// ```
/// use doppio::{get_result, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
/// env.set_variable("x", 4.0);
/// env.set_function("twice", 1, |args| 2.0 * args[0]).unwrap();
///
/// assert_eq!(get_result("twice(x) + 1", &env).unwrap(), 9.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, f64>,
    functions: HashMap<String, Function>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment pre-loaded with the [`builtin`] functions and
    /// constants.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        builtin::install(&mut env);
        env
    }

    /// Binds `name` to `value`, returning the value it replaced, if any.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.variables.insert(name.into(), value)
    }

    /// Removes the variable `name`, returning its value.
    pub fn remove_variable(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    /// Looks up the variable `name`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Iterates over all variable bindings in arbitrary order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Registers `entry` as the function `name` taking `arity` arguments,
    /// replacing any function previously registered under that name.
    ///
    /// # Errors
    /// Returns [`RuntimeError::InvalidArity`] if `arity` exceeds
    /// [`MAX_ARITY`]; the environment is left unchanged.
    pub fn set_function<F>(&mut self,
                           name: impl Into<String>,
                           arity: usize,
                           entry: F)
                           -> Result<(), RuntimeError>
        where F: Fn(&[f64]) -> f64 + Send + Sync + 'static
    {
        let function = Function::new(name, arity, entry)?;
        self.functions.insert(function.name.clone(), function);
        Ok(())
    }

    /// Looks up the function `name`.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Iterates over all registered functions in arbitrary order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }
}
