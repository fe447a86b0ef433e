use std::iter::Peekable;

use crate::{
    ast::Stmt,
    interpreter::{
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{Nested, expect, peek_kind, skip_semicolons},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a block of statements enclosed in braces.
///
/// Empty statements (stray `;` or blank lines) are skipped.
///
/// Grammar: `block := "{" (";" | statement)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `{`.
///
/// # Returns
/// The statements of the block, in order.
///
/// # Errors
/// Returns a `ParseError` if the braces are missing or a statement fails to
/// parse.
pub fn parse_block<I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = Token>
{
    let _nested = Nested::enter(tokens)?;
    expect(tokens, TokenKind::LBrace)?;

    let mut statements = Vec::new();
    loop {
        skip_semicolons(tokens);
        if peek_kind(tokens) == TokenKind::RBrace {
            tokens.next();
            return Ok(statements);
        }
        statements.push(parse_statement(tokens)?);
    }
}
