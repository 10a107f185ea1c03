use doppio::{
    ast::{BinaryOperator, Expr, Number, UnaryOperator},
    error::ParseError,
    interpreter::{
        environment::Environment,
        parser::core::{MAX_HEIGHT, MAX_NESTING, Parser},
        token::TokenKind,
    },
    get_result, parse,
};

fn int(n: i64) -> Expr {
    Expr::Number(Number::Integer(n))
}

fn float(x: f64) -> Expr {
    Expr::Number(Number::Float(x))
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(name.to_string())
}

fn tree(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"))
              .to_string()
}

fn parse_err(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("'{src}' parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn integer_folding_stays_integral() {
    assert_eq!(parse("1 + 2 * 3").unwrap(), int(7));
    assert_eq!(parse("10 - 20").unwrap(), int(-10));
    assert_eq!(parse("-7").map(|_| ()), Err(ParseError::UnexpectedToken { token:    "SUB",
                                                                          expected: None,
                                                                          line:     1, }));
    assert_eq!(parse("17 % 5").unwrap(), int(2));
    assert_eq!(parse("4!").unwrap(), int(24));
    assert_eq!(parse("20!").unwrap(), int(2_432_902_008_176_640_000));
}

#[test]
fn division_and_power_fold_to_float() {
    assert_eq!(parse("6 / 3").unwrap(), float(2.0));
    assert_eq!(parse("2 ^ 10").unwrap(), float(1024.0));
    assert_eq!(parse("2.5 * 2").unwrap(), float(5.0));
    assert_eq!(parse("1e3").unwrap(), float(1000.0));
}

#[test]
fn folding_errors() {
    assert_eq!(parse_err("2.0!"), ParseError::FactorialOfNonInteger { line: 1 });
    assert_eq!(parse_err("21!"), ParseError::Overflow { line: 1 });
    assert_eq!(parse_err("9223372036854775807 + 1"), ParseError::Overflow { line: 1 });
    assert_eq!(parse_err("5 % 0"), ParseError::DivisionByZero { line: 1 });
    assert_eq!(parse_err("99999999999999999999"), ParseError::LiteralTooLarge { line: 1 });
}

#[test]
fn non_constant_operands_build_nodes() {
    assert_eq!(parse("x * 2").unwrap(),
               Expr::BinaryOp { op:    BinaryOperator::Mul,
                                left:  Box::new(ident("x")),
                                right: Box::new(int(2)), });
    assert_eq!(parse("x!").unwrap(),
               Expr::UnaryOp { op:      UnaryOperator::Factorial,
                               operand: Box::new(ident("x")), });
}

#[test]
fn folding_does_not_reassociate() {
    assert_eq!(tree("x + 1 + 2"), "((x + 1) + 2)");
    assert_eq!(tree("1 + 2 + x"), "(3 + x)");
    assert_eq!(tree("x * (1 + 2)"), "(x * 3)");
}

#[test]
fn operators_associate_left() {
    assert_eq!(tree("a - b - c"), "((a - b) - c)");
    assert_eq!(tree("a / b * c"), "((a / b) * c)");
    assert_eq!(tree("a ^ b ^ c"), "((a ^ b) ^ c)");
    assert_eq!(tree("a + b * c"), "(a + (b * c))");
    assert_eq!(tree("a * b + c"), "((a * b) + c)");
    assert_eq!(tree("a + b * c + d"), "((a + (b * c)) + d)");
    assert_eq!(tree("a % b ^ c * d"), "(((a % b) ^ c) * d)");
}

#[test]
fn postfix_binds_tightest() {
    assert_eq!(tree("a * b!"), "(a * b!)");
    assert_eq!(tree("a!!"), "a!!");
    assert_eq!(tree("(a + b)!"), "(a + b)!");
    assert_eq!(tree("f(a)!"), "f(a)!");
}

#[test]
fn function_calls() {
    assert_eq!(parse("f()").unwrap(),
               Expr::FunctionCall { name:      "f".to_string(),
                                    arguments: vec![], });
    assert_eq!(tree("max(a, 1 + 2, b * c)"), "max(a, 3, (b * c))");
    assert_eq!(tree("f(g(x), h())"), "f(g(x), h())");
    assert!(parse("f(1, 2, 3, 4, 5, 6, 7, 8, 9)").is_ok());
    assert_eq!(parse_err("f(1, 2, 3, 4, 5, 6, 7, 8, 9, 10)"),
               ParseError::TooManyArguments { count: 10,
                                              line:  1, });
}

#[test]
fn malformed_calls() {
    assert_eq!(parse_err("2(3)"), ParseError::NotCallable { line: 1 });
    assert_eq!(parse_err("f(1 2)"),
               ParseError::UnexpectedToken { token:    "NUMBER_INTEGER",
                                             expected: Some("COMMA"),
                                             line:     1, });
    assert_eq!(parse_err("f(1,)"),
               ParseError::UnexpectedToken { token:    "RPAREN",
                                             expected: None,
                                             line:     1, });
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse_err("(1 + x"), ParseError::ExpectedClosingParen { line: 1 });
    assert_eq!(parse_err("(\n1 + x"), ParseError::ExpectedClosingParen { line: 1 });
    assert_eq!(parse_err("1 + x)"),
               ParseError::UnexpectedTrailingTokens { token: "RPAREN",
                                                      line:  1, });
}

#[test]
fn keywords_cannot_be_used_as_names() {
    for src in ["int", "x + const", "float(2)"] {
        assert!(matches!(parse_err(src), ParseError::UnexpectedToken { .. }), "{src}");
    }
}

#[test]
fn errors_report_their_line() {
    let err = parse_err("1 +\n2 *\n$");
    assert_eq!(err,
               ParseError::UnexpectedToken { token:    "ILLEGAL",
                                             expected: None,
                                             line:     3, });
    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(), "Error on line 3: Unexpected token: ILLEGAL.");

    assert_eq!(parse_err("x +\n\n").line(), 3);
}

#[test]
fn parse_expression_leaves_trailing_tokens() {
    let mut parser = Parser::new("2 3");
    assert_eq!(parser.parse_expression().unwrap(), int(2));
    assert_eq!(parser.peek(), TokenKind::NumberInteger);

    assert_eq!(Parser::new("2 3").parse_complete(),
               Err(ParseError::UnexpectedTrailingTokens { token: "NUMBER_INTEGER",
                                                          line:  1, }));
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(parse_err(""),
               ParseError::UnexpectedToken { token:    "EOS",
                                             expected: None,
                                             line:     1, });
}

#[test]
fn point_literals_read_as_zero() {
    assert_eq!(parse(".").unwrap(), float(0.0));
    assert_eq!(parse(".e5").unwrap(), float(0.0));
    assert_eq!(parse(". + 1").unwrap(), float(1.0));
    assert_eq!(parse(".25").unwrap(), float(0.25));
}

#[test]
fn nesting_is_bounded() {
    let allowed = format!("{}x{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_eq!(tree(&allowed), "x");

    let groups = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(parse_err(&groups), ParseError::NestingTooDeep { line: 1 });

    let calls = format!("{}x{}", "f(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
    assert_eq!(parse_err(&calls), ParseError::NestingTooDeep { line: 1 });

    let err = parse_err(&format!("1 +\n{}", "(".repeat(100_000)));
    assert_eq!(err, ParseError::NestingTooDeep { line: 2 });
    assert_eq!(err.to_string(), "Error on line 2: Expression is nested too deeply.");
}

#[test]
fn tree_height_is_bounded() {
    let mut env = Environment::new();
    env.set_variable("x", 1.0);

    let tallest = vec!["x"; MAX_HEIGHT].join(" + ");
    assert_eq!(get_result(&tallest, &env).unwrap(), 1024.0);

    let too_tall = vec!["x"; MAX_HEIGHT + 1].join(" + ");
    assert_eq!(parse_err(&too_tall), ParseError::NestingTooDeep { line: 1 });

    let factorials = format!("x{}", "!".repeat(MAX_HEIGHT));
    assert_eq!(parse_err(&factorials), ParseError::NestingTooDeep { line: 1 });

    // Folded literals do not add height.
    let constants = vec!["1"; 10 * MAX_HEIGHT].join(" + ");
    assert_eq!(parse(&constants).unwrap(), int(10_240));
}
