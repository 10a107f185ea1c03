use crate::{interpreter::token::TokenKind, util::num::i64_to_f64};

/// A numeric literal: either a 64-bit signed integer or a double.
///
/// The variant records how the literal was written (or how it was computed
/// during constant folding). Both views of the value are always available:
///
/// - [`Number::as_f64`] widens an integer to the nearest double. Integers
///   beyond `2^53` in magnitude lose precision.
/// - [`Number::as_i64`] narrows a double by truncating toward zero. Values
///   outside the `i64` range saturate at its bounds and NaN becomes `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
}

impl Number {
    /// Returns the value as a double, widening integers.
    ///
    /// # Example
    /// ```
    /// use doppio::ast::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_f64(), 3.0);
    /// assert_eq!(Number::Float(2.5).as_f64(), 2.5);
    /// ```
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Float(x) => x,
        }
    }

    /// Returns the value as an integer, truncating doubles toward zero.
    ///
    /// # Example
    /// ```
    /// use doppio::ast::Number;
    ///
    /// assert_eq!(Number::Float(-2.9).as_i64(), -2);
    /// assert_eq!(Number::Float(f64::INFINITY).as_i64(), i64::MAX);
    /// assert_eq!(Number::Integer(7).as_i64(), 7);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Integer(n) => n,
            Self::Float(x) => x as i64,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Keep a fractional part so the literal reads back as a float.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            },
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// A node of the expression tree.
///
/// Every child is owned by its parent, so a tree is released as a whole when
/// its root is dropped. Trees are built by the parser and are not modified
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, either written in the source or produced by constant
    /// folding.
    Number(Number),
    /// Reference to a variable by name.
    Identifier(String),
    /// A postfix unary operation whose operand was not constant at parse time.
    UnaryOp {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation with at least one non-constant operand.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `hypot(x, 4)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Returns `true` if the node is a compile-time constant.
    ///
    /// Only numeric literals are constant; any operation on constants has
    /// already been folded into a literal by the parser.
    ///
    /// # Example
    /// ```
    /// use doppio::ast::{Expr, Number};
    ///
    /// assert!(Expr::Number(Number::Integer(1)).is_constant());
    /// assert!(!Expr::Identifier("x".to_string()).is_constant());
    /// ```
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns the literal value of a constant node.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Renders the tree back to infix notation.
///
/// Binary operations are fully parenthesized so the printed form shows how
/// the tree is associated.
///
/// # Example
/// ```
/// use doppio::parse;
///
/// let expr = parse("a + b * c - 2 ^ 3").unwrap();
/// assert_eq!(expr.to_string(), "((a + (b * c)) - 8.0)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::UnaryOp { op, operand } => write!(f, "{operand}{op}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            },
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Maps an operator token to the operator it denotes.
    ///
    /// Returns `None` for every kind that is not an arithmetic operator,
    /// including the comma.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Mod => Some(Self::Mod),
            TokenKind::Pow => Some(Self::Pow),
            _ => None,
        }
    }

    /// Returns the token kind spelling this operator.
    #[must_use]
    pub const fn token(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Add,
            Self::Sub => TokenKind::Sub,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::Mod => TokenKind::Mod,
            Self::Pow => TokenKind::Pow,
        }
    }
}

/// Writes the operator's source spelling.
///
/// # Example
/// ```
/// use doppio::ast::BinaryOperator;
///
/// assert_eq!(BinaryOperator::Pow.to_string(), "^");
/// assert_eq!(BinaryOperator::Mod.to_string(), "%");
/// ```
impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token().spelling().unwrap_or_default())
    }
}

/// Represents a postfix unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Factorial (`x!`).
    Factorial,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Factorial => TokenKind::Factorial,
        };
        f.write_str(kind.spelling().unwrap_or_default())
    }
}
