use std::iter::Peekable;

use crate::{
    ast::{CallExpr, Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                Nested, expect, next_token, parse_comma_separated, parse_identifier, unexpected,
            },
        },
        token::{Token, TokenKind},
    },
};

/// Parses prefix unary operators.
///
/// Supports arithmetic negation `-x` and logical negation `!x`. Unary
/// operators nest, so `--x` and `!!b` are accepted.
///
/// Grammar: `unary := ("-" | "!") unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the operator or operand.
///
/// # Returns
/// An `Expr::Unary` node, or the primary expression when no operator is
/// present.
pub fn parse_unary<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let op = match tokens.peek().map(|token| (token.kind, token.pos.line)) {
        Some((TokenKind::Sub, line)) => Some((UnaryOperator::Negate, line)),
        Some((TokenKind::Not, line)) => Some((UnaryOperator::Not, line)),
        _ => None,
    };

    if let Some((op, line)) = op {
        tokens.next();
        let _nested = Nested::enter(tokens)?;
        let expr = parse_unary(tokens)?;

        return Ok(Expr::Unary { op,
                                expr: Box::new(expr),
                                line });
    }

    parse_primary(tokens)
}

/// Parses a primary expression: a literal, a parenthesized expression, an
/// array literal, or an identifier-led chain.
///
/// # Errors
/// Returns a `ParseError` if the next token cannot start an expression or a
/// numeric literal does not fit its type.
pub fn parse_primary<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    match tokens.peek().map(|token| token.kind) {
        Some(TokenKind::Ident) => parse_name_chain(tokens),
        Some(TokenKind::LParen) => parse_grouping(tokens),
        Some(TokenKind::LBrace) => parse_array_literal(tokens),
        _ => parse_literal(tokens),
    }
}

/// Parses a literal token into an `Expr::Literal`.
///
/// Integer literals must fit in `i64`; float literals must be finite as
/// `f32`.
fn parse_literal<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let token = next_token(tokens, "an expression")?;
    let line = token.pos.line;

    let value = match token.kind {
        TokenKind::Int => LiteralValue::Int(token.lexeme.parse().map_err(|_| too_large(&token))?),
        TokenKind::Float => {
            let value: f32 = token.lexeme.parse().map_err(|_| too_large(&token))?;
            if !value.is_finite() {
                return Err(too_large(&token));
            }
            LiteralValue::Float(value)
        },
        TokenKind::String => LiteralValue::String(token.lexeme),
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::False => LiteralValue::Bool(false),
        _ => return Err(unexpected(token, "an expression")),
    };

    Ok(Expr::Literal { value, line })
}

fn too_large(token: &Token) -> ParseError {
    ParseError::LiteralTooLarge { lexeme: token.lexeme.clone(),
                                  pos:    token.pos, }
}

/// Parses a parenthesized expression `( expr )`.
fn parse_grouping<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    expect(tokens, TokenKind::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;

    Ok(expr)
}

/// Parses an array literal of the form `{ expr1, expr2, ..., exprN }`.
///
/// An empty array `{}` and a trailing comma are accepted.
///
/// Grammar: `array := "{" (expression ("," expression)* ","?)? "}"`
fn parse_array_literal<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let open = expect(tokens, TokenKind::LBrace)?;
    let elements = parse_comma_separated(tokens, parse_expression, TokenKind::RBrace)?;

    Ok(Expr::Array { elements,
                     line: open.pos.line })
}

/// Parses an identifier followed by an optional call and any number of
/// `.field` and `[index]` suffixes, applied left to right.
///
/// Only a bare name can be called: a `(` after a selector, an index or another
/// call is rejected.
///
/// Grammar: `chain := name ("(" args ")")? ("." name | "[" expression "]")*`
///
/// # Errors
/// Returns `ParseError::NotCallable` for calls on anything but a name, and
/// propagates errors from arguments and indexes.
pub fn parse_name_chain<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let (name, pos) = parse_identifier(tokens)?;
    let line = pos.line;

    let mut expr = if tokens.next_if(|token| token.kind == TokenKind::LParen).is_some() {
        let args = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;
        Expr::Call(CallExpr { name, args, line })
    } else {
        Expr::Name { name, line }
    };

    loop {
        let Some(token) = tokens.peek() else { break };
        let (kind, pos) = (token.kind, token.pos);

        expr = match kind {
            TokenKind::Period => {
                tokens.next();
                let (field, _) = parse_identifier(tokens)?;
                Expr::Selector { expr: Box::new(expr),
                                 field,
                                 line: pos.line }
            },
            TokenKind::LBracket => {
                tokens.next();
                let index = parse_expression(tokens)?;
                expect(tokens, TokenKind::RBracket)?;
                Expr::Index { array: Box::new(expr),
                              index: Box::new(index),
                              line:  pos.line, }
            },
            TokenKind::LParen => return Err(ParseError::NotCallable { pos }),
            _ => break,
        };
    }

    Ok(expr)
}
