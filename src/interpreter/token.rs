use logos::Logos;

/// The kind of a lexical token.
///
/// The declaration order is significant: the operator kinds of each class
/// (assignment, binary, unary) are declared next to each other so that class
/// membership can be tested with a range check (see
/// [`TokenKind::is_binary_op`]). Keep new kinds out of the middle of those
/// blocks.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
pub enum TokenKind {
    /// End of the source buffer.
    Eos,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Variable initialization marker. Never produced by the lexer.
    InitVar,
    /// Constant initialization marker. Never produced by the lexer.
    InitConst,
    /// `=`
    #[token("=")]
    Assign,

    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Mod,
    /// `^`
    #[token("^")]
    Pow,

    /// `!`
    #[token("!")]
    Factorial,

    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    NumberInteger,
    /// Floating-point literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    ///
    /// The digits on either side of the point are optional, so a lone `.`
    /// is a float literal too; it reads as zero.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    NumberFloat,

    /// `int`
    #[token("int")]
    Int,
    /// `long`
    #[token("long")]
    Long,
    /// `float`
    #[token("float")]
    Float,
    /// `double`
    #[token("double")]
    Double,
    /// `const`
    #[token("const")]
    Const,

    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    /// Anything the lexer cannot classify.
    ///
    /// Unknown characters end up here, and so does a number whose exponent
    /// marker is not followed by a digit (`1e`, `2.5E+`).
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?")]
    #[regex(r"\.[0-9]*[eE][+-]?")]
    Illegal,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 24] = [Self::Eos,
                                 Self::LParen,
                                 Self::RParen,
                                 Self::Semicolon,
                                 Self::InitVar,
                                 Self::InitConst,
                                 Self::Assign,
                                 Self::Comma,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Mod,
                                 Self::Pow,
                                 Self::Factorial,
                                 Self::NumberInteger,
                                 Self::NumberFloat,
                                 Self::Int,
                                 Self::Long,
                                 Self::Float,
                                 Self::Double,
                                 Self::Const,
                                 Self::Identifier,
                                 Self::Illegal];

    /// Returns the printable name of the kind, as used in diagnostics.
    ///
    /// # Example
    /// ```
    /// use doppio::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::RParen.name(), "RPAREN");
    /// assert_eq!(TokenKind::NumberFloat.name(), "NUMBER_FLOAT");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eos => "EOS",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Semicolon => "SEMICOLON",
            Self::InitVar => "INIT_VAR",
            Self::InitConst => "INIT_CONST",
            Self::Assign => "ASSIGN",
            Self::Comma => "COMMA",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Pow => "POW",
            Self::Factorial => "FACTORIAL",
            Self::NumberInteger => "NUMBER_INTEGER",
            Self::NumberFloat => "NUMBER_FLOAT",
            Self::Int => "INT",
            Self::Long => "LONG",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Const => "CONST",
            Self::Identifier => "IDENTIFIER",
            Self::Illegal => "ILLEGAL",
        }
    }

    /// Returns the fixed source spelling of the kind, or `None` for kinds
    /// whose text varies (literals, identifiers) or that have no text at all.
    ///
    /// # Example
    /// ```
    /// use doppio::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::Pow.spelling(), Some("^"));
    /// assert_eq!(TokenKind::Identifier.spelling(), None);
    /// ```
    #[must_use]
    pub const fn spelling(self) -> Option<&'static str> {
        match self {
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::Semicolon => Some(";"),
            Self::InitVar => Some("=init_var"),
            Self::InitConst => Some("=init_const"),
            Self::Assign => Some("="),
            Self::Comma => Some(","),
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("*"),
            Self::Div => Some("/"),
            Self::Mod => Some("%"),
            Self::Pow => Some("^"),
            Self::Factorial => Some("!"),
            Self::Int => Some("int"),
            Self::Long => Some("long"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            Self::Const => Some("const"),
            Self::Eos
            | Self::NumberInteger
            | Self::NumberFloat
            | Self::Identifier
            | Self::Illegal => None,
        }
    }

    /// Returns the binding precedence of the kind.
    ///
    /// Binary operators have a precedence greater than zero (higher binds
    /// tighter), assignment markers have `2`, everything else has `0`.
    ///
    /// # Example
    /// ```
    /// use doppio::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::Add.precedence(), 12);
    /// assert_eq!(TokenKind::Pow.precedence(), 13);
    /// assert_eq!(TokenKind::Comma.precedence(), 1);
    /// assert_eq!(TokenKind::RParen.precedence(), 0);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::InitVar | Self::InitConst | Self::Assign => 2,
            Self::Comma => 1,
            Self::Add | Self::Sub => 12,
            Self::Mul | Self::Div | Self::Mod | Self::Pow => 13,
            _ => 0,
        }
    }

    /// Returns `true` for the reserved type keywords.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        (Self::Int..=Self::Const).contains(&self)
    }

    /// Returns `true` for `=` and the two initialization markers.
    #[must_use]
    pub fn is_assignment_op(self) -> bool {
        (Self::InitVar..=Self::Assign).contains(&self)
    }

    /// Returns `true` for the binary operators, comma included.
    #[must_use]
    pub fn is_binary_op(self) -> bool {
        (Self::Comma..=Self::Pow).contains(&self)
    }

    /// Returns `true` for the postfix unary operators.
    #[must_use]
    pub const fn is_unary_op(self) -> bool {
        matches!(self, Self::Factorial)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, located lexical unit.
///
/// `start` and `end` delimit a half-open byte range of the source buffer the
/// token was scanned from; `line` is the 1-based line the token starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind:  TokenKind,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end:   usize,
    /// Source line the token starts on.
    pub line:  usize,
}

impl Token {
    /// Returns the text of the token within `source`.
    ///
    /// `source` must be the buffer the token was scanned from; an empty string
    /// is returned when the range does not fit it.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or_default()
    }

    /// Returns `true` when the token spans no characters (only `EOS`).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
