use crate::{
    ast::BinaryOperator,
    interpreter::parser::core::{Node, ParseResult, Parser},
};

/// The lowest operator precedence the expression grammar accepts.
///
/// The comma (`1`) and the assignment markers (`2`) rank below it, so an
/// expression stops in front of them. This is what lets argument lists use
/// the comma as a separator.
pub const MIN_PRECEDENCE: u8 = 4;

impl Parser<'_> {
    /// Parses additive expressions and everything binding tighter.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    /// with `multiplicative := postfix (("*" | "/" | "%" | "^") postfix)*`.
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Node> {
        self.parse_binary(MIN_PRECEDENCE)
    }

    /// Parses a chain of binary operators of at least `precedence` by
    /// precedence climbing.
    ///
    /// After the first operand, the tiers from the lookahead operator's
    /// precedence down to `precedence` are visited in turn. Within a tier,
    /// every operator of exactly that precedence is consumed left to right and
    /// its right operand is parsed one tier higher, which makes all operators
    /// left-associative: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    ///
    /// Whenever both operands are literals, the operation is folded right away
    /// instead of building a node.
    fn parse_binary(&mut self, precedence: u8) -> ParseResult<Node> {
        debug_assert!(precedence >= MIN_PRECEDENCE);

        let mut left = self.parse_postfix()?;
        let mut tier = self.peek().precedence();
        while tier >= precedence {
            while self.peek().precedence() == tier {
                let line = self.line();
                let kind = self.next();
                let Some(op) = BinaryOperator::from_token(kind) else {
                    return Err(self.unexpected_token(None));
                };
                let right = self.parse_binary(tier + 1)?;
                left = Self::combine(op, left, right, line)?;
            }
            tier -= 1;
        }
        Ok(left)
    }
}
