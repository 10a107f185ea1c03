use std::num::IntErrorKind;

use crate::{
    ast::{Expr, Number},
    error::ParseError,
    interpreter::{
        environment::MAX_ARITY,
        parser::core::{Node, ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a primary expression followed by any number of postfix
    /// operators.
    ///
    /// Grammar:
    /// ```text
    ///     postfix := primary ( arguments | "!" )*
    /// ```
    /// An argument list turns the function name before it into an
    /// `Expr::FunctionCall`. A factorial is folded when its operand is a
    /// literal and deferred to evaluation otherwise.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an argument list follows something other than an identifier,
    /// - the factorial is applied to a float literal or overflows,
    /// - the tree grows taller than the parser allows,
    /// - the primary expression or an argument fails to parse.
    pub(in crate::interpreter::parser) fn parse_postfix(&mut self) -> ParseResult<Node> {
        let mut node = self.parse_primary()?;
        loop {
            match self.peek() {
                TokenKind::LParen => {
                    let line = self.line();
                    let Expr::Identifier(name) = node.expr else {
                        return Err(ParseError::NotCallable { line });
                    };
                    let (arguments, height) = self.parse_arguments()?;
                    node = Node::branch(Expr::FunctionCall { name, arguments }, height, line)?;
                },
                TokenKind::Factorial => {
                    let line = self.line();
                    self.next();
                    node = Self::factorial(node, line)?;
                },
                _ => return Ok(node),
            }
        }
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := IDENTIFIER | NUMBER_INTEGER | NUMBER_FLOAT | "(" expression ")"
    /// ```
    /// Exactly one token is consumed before dispatching. Identifiers keep
    /// their source text verbatim, and literals are converted from their source
    /// text.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the token cannot start an expression (this includes illegal tokens,
    ///   keywords and the end of input),
    /// - an integer literal does not fit in an `i64`,
    /// - a parenthesized expression is not closed.
    fn parse_primary(&mut self) -> ParseResult<Node> {
        match self.next() {
            TokenKind::Identifier => {
                Ok(Node::leaf(Expr::Identifier(self.current_text().to_owned())))
            },
            TokenKind::NumberInteger => self.parse_integer().map(Node::leaf),
            TokenKind::NumberFloat => self.parse_float().map(Node::leaf),
            TokenKind::LParen => self.parse_grouping(),
            _ => Err(self.unexpected_token(None)),
        }
    }

    /// Converts the integer literal just consumed.
    fn parse_integer(&self) -> ParseResult<Expr> {
        let text = self.current_text();
        let line = self.current_token().line;
        match text.parse::<i64>() {
            Ok(n) => Ok(Expr::Number(Number::Integer(n))),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                Err(ParseError::LiteralTooLarge { line })
            },
            Err(_) => Err(ParseError::InvalidLiteral { literal: text.to_owned(),
                                                       line }),
        }
    }

    /// Converts the float literal just consumed.
    ///
    /// A mantissa made of the point alone (`.`, `.e5`) has no digits to read
    /// and converts to zero.
    fn parse_float(&self) -> ParseResult<Expr> {
        let text = self.current_text();
        if text.split(['e', 'E']).next() == Some(".") {
            return Ok(Expr::Number(Number::Float(0.0)));
        }
        text.parse::<f64>()
            .map(|x| Expr::Number(Number::Float(x)))
            .map_err(|_| ParseError::InvalidLiteral { literal: text.to_owned(),
                                                      line:    self.current_token().line, })
    }

    /// Parses a parenthesized expression; the `(` has been consumed.
    ///
    /// Grammar `grouping := "(" expression ")"`
    ///
    /// The inner expression is returned as-is (no wrapper node).
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] when groups and argument lists
    /// nest too deeply, and [`ParseError::ExpectedClosingParen`] when the
    /// group is not closed.
    fn parse_grouping(&mut self) -> ParseResult<Node> {
        let line = self.current_token().line;
        self.enter(line)?;
        let node = self.parse_additive()?;
        if self.peek() != TokenKind::RParen {
            return Err(ParseError::ExpectedClosingParen { line });
        }
        self.next();
        self.leave();
        Ok(node)
    }

    /// Parses a function call argument list.
    ///
    /// Grammar:
    /// ```text
    ///     arguments := "(" ")" | "(" additive ("," additive)* ")"
    /// ```
    /// Each argument is an additive expression, so a comma always separates
    /// arguments. The arguments are returned with the height of the tallest
    /// one (`0` for an empty list).
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - two arguments are not separated by a comma,
    /// - the list is not closed,
    /// - there are more arguments than any function can take,
    /// - argument lists and groups nest too deeply.
    fn parse_arguments(&mut self) -> ParseResult<(Vec<Expr>, usize)> {
        let line = self.line();
        self.expect(TokenKind::LParen)?;
        self.enter(line)?;

        let mut arguments = Vec::new();
        let mut height = 0;
        if self.peek() != TokenKind::RParen {
            loop {
                let argument = self.parse_additive()?;
                height = height.max(argument.height);
                arguments.push(argument.expr);
                if self.peek() == TokenKind::RParen {
                    break;
                }
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::RParen)?;
        self.leave();

        if arguments.len() > MAX_ARITY {
            return Err(ParseError::TooManyArguments { count: arguments.len(),
                                                      line });
        }
        Ok((arguments, height))
    }
}
