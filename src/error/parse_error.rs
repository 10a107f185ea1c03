#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    UnexpectedToken {
        /// Printable name of the token encountered (e.g. `RPAREN`).
        token:    &'static str,
        /// Printable name of the token that was required, if a specific one
        /// was.
        expected: Option<&'static str>,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// Printable name of the first extra token.
        token: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The factorial operator was applied to a floating-point literal.
    FactorialOfNonInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An argument list followed something other than a function name.
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call passed more arguments than any function can accept.
    TooManyArguments {
        /// The number of arguments found.
        count: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal could not be converted to a number.
    InvalidLiteral {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer constant folding overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer constant folding divided by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Parentheses or calls nest too deeply, or the expression tree grows too
    /// tall.
    NestingTooDeep {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::ExpectedClosingParen { line }
            | Self::FactorialOfNonInteger { line }
            | Self::NotCallable { line }
            | Self::TooManyArguments { line, .. }
            | Self::LiteralTooLarge { line }
            | Self::InvalidLiteral { line, .. }
            | Self::Overflow { line }
            | Self::DivisionByZero { line }
            | Self::NestingTooDeep { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token,
                                    expected: None,
                                    line, } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::UnexpectedToken { token,
                                    expected: Some(expected),
                                    line, } => write!(f,
                                                      "Error on line {line}: Unexpected token: {token}, expected {expected}."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression, starting with {token}."),

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::FactorialOfNonInteger { line } => write!(f,
                                                           "Error on line {line}: Factorial can be calculated only for integers."),

            Self::NotCallable { line } => {
                write!(f, "Error on line {line}: Only a function name can be called.")
            },

            Self::TooManyArguments { count, line } => write!(f,
                                                             "Error on line {line}: {count} arguments is too many, functions take at most 9."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::InvalidLiteral { literal, line } => {
                write!(f, "Error on line {line}: Invalid numeric literal '{literal}'.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while folding constants."),
            Self::DivisionByZero { line } => write!(f,
                                                    "Error on line {line}: Integer division by zero while folding constants."),
            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
