use doppio::interpreter::{
    lexer::{Lexer, tokenize},
    token::TokenKind,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).iter().map(|t| t.kind).collect()
}

fn texts(src: &str) -> Vec<&str> {
    tokenize(src).iter().map(|t| t.text(src)).collect()
}

#[test]
fn punctuation_and_operators() {
    assert_eq!(kinds("( ) ; = , + - * / % ^ !"),
               [TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Assign,
                TokenKind::Comma,
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Mod,
                TokenKind::Pow,
                TokenKind::Factorial,
                TokenKind::Eos]);
}

#[test]
fn numeric_literals() {
    assert_eq!(kinds("42"), [TokenKind::NumberInteger, TokenKind::Eos]);
    for src in ["3.14", ".5", "2.", "2.1e-10", "1e5", "1E+5", ".5e3"] {
        assert_eq!(kinds(src), [TokenKind::NumberFloat, TokenKind::Eos], "{src}");
        assert_eq!(texts(src)[0], src);
    }
}

#[test]
fn dangling_exponent_is_illegal() {
    for src in ["1e", "2.5E+", "3e-", ".5e"] {
        assert_eq!(kinds(src), [TokenKind::Illegal, TokenKind::Eos], "{src}");
    }
    // The exponent marker swallows the letter, so this is not `1` followed by `ex`.
    assert_eq!(kinds("1ex"), [TokenKind::Illegal, TokenKind::Identifier, TokenKind::Eos]);
}

#[test]
fn unknown_characters_are_illegal() {
    assert_eq!(kinds("1 $ 2"),
               [TokenKind::NumberInteger, TokenKind::Illegal, TokenKind::NumberInteger, TokenKind::Eos]);
}

#[test]
fn a_lone_point_is_a_float() {
    assert_eq!(kinds("."), [TokenKind::NumberFloat, TokenKind::Eos]);
    assert_eq!(kinds(".e5"), [TokenKind::NumberFloat, TokenKind::Eos]);
    assert_eq!(kinds(". + 1"),
               [TokenKind::NumberFloat, TokenKind::Add, TokenKind::NumberInteger, TokenKind::Eos]);
    assert_eq!(kinds(".e"), [TokenKind::Illegal, TokenKind::Eos]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("int long float double const"),
               [TokenKind::Int,
                TokenKind::Long,
                TokenKind::Float,
                TokenKind::Double,
                TokenKind::Const,
                TokenKind::Eos]);
    assert_eq!(kinds("integer _x x1 Const"),
               [TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eos]);
    assert!(TokenKind::ALL.iter().filter(|k| k.is_keyword()).count() == 5);
}

#[test]
fn identifiers_run_until_a_non_word_character() {
    assert_eq!(texts("sqrt(x_2)+y"), ["sqrt", "(", "x_2", ")", "+", "y", ""]);
}

#[test]
fn lines_are_counted() {
    let tokens = tokenize("1 +\n\n  x\r\n* 2");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 1, 3, 4, 4, 4]);
}

#[test]
fn spans_locate_tokens() {
    let src = "  ab + 12";
    let tokens = tokenize(src);
    assert_eq!((tokens[0].start, tokens[0].end), (2, 4));
    assert_eq!((tokens[2].start, tokens[2].end), (7, 9));
    let eos = tokens[3];
    assert_eq!(eos.kind, TokenKind::Eos);
    assert!(eos.is_empty());
    assert_eq!(eos.start, src.len());
}

#[test]
fn lexer_keeps_one_token_of_lookahead() {
    let mut lexer = Lexer::new("a * 2");
    assert_eq!(lexer.current(), TokenKind::Eos);
    assert_eq!(lexer.peek(), TokenKind::Identifier);

    assert_eq!(lexer.next(), TokenKind::Identifier);
    assert_eq!(lexer.current(), TokenKind::Identifier);
    assert_eq!(lexer.peek(), TokenKind::Mul);

    lexer.next();
    lexer.next();
    assert_eq!(lexer.slice(lexer.current_token()), "2");
    assert_eq!(lexer.peek(), TokenKind::Eos);

    // Past the end, the lexer keeps returning EOS.
    assert_eq!(lexer.next(), TokenKind::Eos);
    assert_eq!(lexer.next(), TokenKind::Eos);
    assert_eq!(lexer.source(), "a * 2");
}

#[test]
fn empty_and_blank_sources() {
    assert_eq!(kinds(""), [TokenKind::Eos]);
    assert_eq!(kinds(" \t\n "), [TokenKind::Eos]);
}

#[test]
fn every_whitespace_character_is_skipped() {
    assert_eq!(kinds("1\x0B+\x0C2\r\t"),
               [TokenKind::NumberInteger, TokenKind::Add, TokenKind::NumberInteger, TokenKind::Eos]);
}

#[test]
fn token_classes() {
    let binary: Vec<TokenKind> = TokenKind::ALL.into_iter().filter(|k| k.is_binary_op()).collect();
    assert_eq!(binary,
               [TokenKind::Comma,
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Mod,
                TokenKind::Pow]);

    let assignment: Vec<TokenKind> =
        TokenKind::ALL.into_iter().filter(|k| k.is_assignment_op()).collect();
    assert_eq!(assignment, [TokenKind::InitVar, TokenKind::InitConst, TokenKind::Assign]);
    assert!(assignment.iter().all(|k| k.precedence() == 2));

    let unary: Vec<TokenKind> = TokenKind::ALL.into_iter().filter(|k| k.is_unary_op()).collect();
    assert_eq!(unary, [TokenKind::Factorial]);
    assert_eq!(TokenKind::Factorial.precedence(), 0);
}

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TokenKind::ALL.len());
    assert_eq!(TokenKind::NumberInteger.to_string(), "NUMBER_INTEGER");
}
