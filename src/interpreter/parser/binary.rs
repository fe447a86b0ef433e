use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary},
        token::{Token, TokenKind},
    },
};

/// Parses binary expressions by precedence climbing.
///
/// Operators bind from `||` (weakest) through `&&`, comparisons, additive and
/// multiplicative operators; unary operators bind tighter than all of them.
/// Every tier is left-associative: after an operator of precedence `p` the
/// right operand is parsed at `p + 1`, so `a - b - c` is `(a - b) - c`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the left operand.
/// - `min_precedence`: The weakest operator this call may consume.
///
/// # Returns
/// An `Expr::Binary` tree, or the single operand when no operator follows.
pub fn parse_binary<I>(tokens: &mut Peekable<I>, min_precedence: u8) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let mut left = parse_unary(tokens)?;

    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && op.precedence() >= min_precedence
    {
        let line = token.pos.line;
        tokens.next();

        let right = parse_binary(tokens, op.precedence() + 1)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Converts a token kind into its corresponding binary operator, if any.
///
/// # Parameters
/// - `kind`: The token kind to inspect.
///
/// # Returns
/// `Some(BinaryOperator)` if the token is a binary operator, `None` otherwise.
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Add => Some(BinaryOperator::Add),
        TokenKind::Sub => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        TokenKind::Mod => Some(BinaryOperator::Mod),
        TokenKind::LogicalAnd => Some(BinaryOperator::And),
        TokenKind::LogicalOr => Some(BinaryOperator::Or),
        TokenKind::Equal => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
