use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parenthesized groups and argument lists the parser
/// accepts.
pub const MAX_NESTING: usize = 256;

/// Greatest height of an expression tree the parser builds.
///
/// Left-associative chains such as `x + x + ... + x` grow the tree without
/// any nesting in the source, so the height is bounded separately.
pub const MAX_HEIGHT: usize = 1024;

/// An expression under construction, together with the height of its tree.
pub(in crate::interpreter::parser) struct Node {
    pub(in crate::interpreter::parser) expr:   Expr,
    pub(in crate::interpreter::parser) height: usize,
}

impl Node {
    /// Wraps a literal or a name.
    pub(in crate::interpreter::parser) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    /// Wraps an operation or a call whose tallest operand has height
    /// `child_height`.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] if the tree would exceed
    /// [`MAX_HEIGHT`].
    pub(in crate::interpreter::parser) fn branch(expr: Expr,
                                                 child_height: usize,
                                                 line: usize)
                                                 -> ParseResult<Self> {
        let height = child_height + 1;
        if height > MAX_HEIGHT {
            return Err(ParseError::NestingTooDeep { line });
        }
        Ok(Self { expr, height })
    }
}

/// A recursive-descent parser over a source buffer.
///
/// The parser pulls tokens from a [`Lexer`] one at a time and builds an
/// expression tree, folding operations on constant operands into literals as
/// soon as both operands are known. It does not recover from errors: the first
/// error ends the parse.
///
/// Nesting is bounded by [`MAX_NESTING`] and the height of the tree by
/// [`MAX_HEIGHT`], so neither parsing nor evaluating a parsed tree can exhaust
/// the stack.
///
/// # Example
/// ```
/// use doppio::{
///     ast::{Expr, Number},
///     interpreter::parser::core::Parser,
/// };
///
/// let mut parser = Parser::new("2 + 3 * 4");
/// assert_eq!(parser.parse_expression().unwrap(), Expr::Number(Number::Integer(14)));
/// ```
pub struct Parser<'source> {
    lexer: Lexer<'source>,
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Creates a parser over `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer: Lexer::new(source),
               depth: 0, }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing.
    ///
    /// Grammar: `expression := additive`
    ///
    /// Parsing stops at the first token that cannot continue the expression;
    /// that token is left unconsumed (see [`Parser::peek`]). Use
    /// [`Parser::parse_complete`] to require the whole input to be consumed.
    ///
    /// # Errors
    /// Returns a [`ParseError`] on the first syntax error.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive().map(|node| node.expr)
    }

    /// Parses a full expression and requires the input to end after it.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedTrailingTokens`] if anything follows the
    /// expression, or any error from [`Parser::parse_expression`].
    ///
    /// # Example
    /// ```
    /// use doppio::{error::ParseError, interpreter::parser::core::Parser};
    ///
    /// assert!(Parser::new("1 + 2").parse_complete().is_ok());
    /// assert_eq!(Parser::new("1 2").parse_complete(),
    ///            Err(ParseError::UnexpectedTrailingTokens { token: "NUMBER_INTEGER",
    ///                                                      line:  1, }));
    /// ```
    pub fn parse_complete(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        if self.peek() != TokenKind::Eos {
            let token = self.lexer.peek_token();
            return Err(ParseError::UnexpectedTrailingTokens { token: token.kind.name(),
                                                              line:  token.line, });
        }
        Ok(expr)
    }

    /// Returns the kind of the next unconsumed token.
    #[must_use]
    pub const fn peek(&self) -> TokenKind {
        self.lexer.peek()
    }

    /// Consumes the next token and returns its kind.
    pub(in crate::interpreter::parser) fn next(&mut self) -> TokenKind {
        self.lexer.next()
    }

    /// Returns the most recently consumed token.
    pub(in crate::interpreter::parser) const fn current_token(&self) -> Token {
        self.lexer.current_token()
    }

    /// Returns the source text of the most recently consumed token.
    pub(in crate::interpreter::parser) fn current_text(&self) -> &'source str {
        self.lexer.slice(self.lexer.current_token())
    }

    /// Returns the line of the next unconsumed token.
    pub(in crate::interpreter::parser) const fn line(&self) -> usize {
        self.lexer.peek_token().line
    }

    /// Consumes the next token and checks that it is of kind `expected`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming both the token found and
    /// the one expected.
    pub(in crate::interpreter::parser) fn expect(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.next() == expected {
            Ok(())
        } else {
            Err(self.unexpected_token(Some(expected)))
        }
    }

    /// Enters a parenthesized group or an argument list opened on `line`.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] past [`MAX_NESTING`] levels.
    pub(in crate::interpreter::parser) const fn enter(&mut self, line: usize) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { line });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves the innermost group or argument list.
    pub(in crate::interpreter::parser) const fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Builds the error for the most recently consumed token.
    pub(in crate::interpreter::parser) fn unexpected_token(&self,
                                                           expected: Option<TokenKind>)
                                                           -> ParseError {
        let token = self.current_token();
        ParseError::UnexpectedToken { token:    token.kind.name(),
                                      expected: expected.map(TokenKind::name),
                                      line:     token.line, }
    }
}
