/// Parsing errors.
///
/// Defines all error types that can occur while parsing source text. Lexing
/// never fails on its own: unclassifiable input becomes an illegal token,
/// which is reported here once the parser runs into it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation or while a
/// host populates an environment: unresolved names, argument count mismatches
/// and invalid function arities.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced by the parse-then-evaluate pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source text could not be parsed.
    Parse(ParseError),
    /// The parsed expression could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
