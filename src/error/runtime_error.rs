#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and while
/// registering bindings.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The arity the function was registered with.
        expected: usize,
        /// The number of arguments in the call.
        found:    usize,
    },
    /// A function was registered with more parameters than supported.
    InvalidArity {
        /// The name of the function.
        name:  String,
        /// The rejected arity.
        arity: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Error: Unknown variable '{name}'."),
            Self::UnknownFunction { name } => write!(f, "Error: Unknown function '{name}'."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Error: Function '{name}' takes {expected} arguments but {found} were supplied."),
            Self::InvalidArity { name, arity } => write!(f,
                                                         "Error: Function '{name}' cannot take {arity} arguments, the maximum is 9."),
        }
    }
}

impl std::error::Error for RuntimeError {}
