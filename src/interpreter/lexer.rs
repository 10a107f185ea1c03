use log::trace;
use logos::Logos;

use crate::interpreter::token::{Token, TokenKind};

/// A scanner over a fixed source buffer with one token of lookahead.
///
/// The lexer always holds two tokens: the *current* one, which was consumed
/// by the last call to [`Lexer::next`], and the pending lookahead, visible
/// through [`Lexer::peek`]. Scanning never backtracks past that pair.
///
/// Characters that cannot start a token, and numbers with a dangling exponent
/// marker, are returned as [`TokenKind::Illegal`] instead of failing here; the
/// parser reports them when it runs into them.
///
/// # Example
/// ```
/// use doppio::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("sqrt(2) + 1");
///
/// assert_eq!(lexer.peek(), TokenKind::Identifier);
/// assert_eq!(lexer.next(), TokenKind::Identifier);
/// assert_eq!(lexer.slice(lexer.current_token()), "sqrt");
/// assert_eq!(lexer.peek(), TokenKind::LParen);
/// ```
pub struct Lexer<'source> {
    inner:   logos::Lexer<'source, TokenKind>,
    current: Token,
    next:    Token,
    line:    usize,
    offset:  usize,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source` and scans the first lookahead token.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        let mut lexer = Self { inner:   TokenKind::lexer(source),
                               current: Token { kind:  TokenKind::Eos,
                                                start: 0,
                                                end:   0,
                                                line:  1, },
                               next:    Token { kind:  TokenKind::Eos,
                                                start: 0,
                                                end:   0,
                                                line:  1, },
                               line:    1,
                               offset:  0, };
        lexer.next = lexer.scan();
        lexer
    }

    /// Consumes the lookahead token and returns its kind.
    ///
    /// Once the end of the buffer is reached, every further call returns
    /// [`TokenKind::Eos`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> TokenKind {
        self.current = self.next;
        self.next = self.scan();
        self.current.kind
    }

    /// Returns the kind of the lookahead token without consuming it.
    #[must_use]
    pub const fn peek(&self) -> TokenKind {
        self.next.kind
    }

    /// Returns the full lookahead token without consuming it.
    #[must_use]
    pub const fn peek_token(&self) -> Token {
        self.next
    }

    /// Returns the kind of the most recently consumed token.
    #[must_use]
    pub const fn current(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the most recently consumed token.
    #[must_use]
    pub const fn current_token(&self) -> Token {
        self.current
    }

    /// Returns the source buffer being scanned.
    #[must_use]
    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    /// Returns the text of `token` in the source buffer.
    #[must_use]
    pub fn slice(&self, token: Token) -> &'source str {
        token.text(self.inner.source())
    }

    /// Scans the next token from the buffer.
    ///
    /// The line counter is advanced by the newlines found in the whitespace
    /// skipped between the previous token and this one.
    fn scan(&mut self) -> Token {
        let source = self.inner.source();
        let kind = match self.inner.next() {
            Some(Ok(kind)) => kind,
            Some(Err(())) => TokenKind::Illegal,
            None => TokenKind::Eos,
        };
        let (start, end) = if kind == TokenKind::Eos {
            (source.len(), source.len())
        } else {
            let span = self.inner.span();
            (span.start, span.end)
        };

        self.line += source.get(self.offset..start)
                           .map_or(0, |gap| gap.matches('\n').count());
        self.offset = end;

        let token = Token { kind,
                            start,
                            end,
                            line: self.line };
        trace!("scanned {} {:?} on line {}", kind, token.text(source), token.line);
        token
    }
}

/// Scans the whole of `source` and returns every token up to and including
/// the terminating [`TokenKind::Eos`].
///
/// # Example
/// ```
/// use doppio::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = tokenize("1.5e3 ^ x").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::NumberFloat, TokenKind::Pow, TokenKind::Identifier, TokenKind::Eos]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = lexer.next();
        tokens.push(lexer.current_token());
        if kind == TokenKind::Eos {
            break;
        }
    }
    tokens
}
