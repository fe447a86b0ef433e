use std::iter::Peekable;

use crate::{
    ast::{Decl, Expr},
    error::ParseError,
    interpreter::{
        parser::{
            binary::parse_binary,
            decl::parse_declaration,
            utils::{Nested, peek_kind, skip_semicolons},
        },
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply expressions and blocks may nest before parsing gives up.
pub const MAX_NESTING: usize = 128;

/// Parses a whole source file into its top-level declarations.
///
/// Grammar: `file := ";"* (decl ";"*)* EOF`
///
/// # Parameters
/// - `tokens`: The scanner's token stream.
///
/// # Returns
/// The declarations in source order.
///
/// # Errors
/// Returns the first `ParseError` encountered; there is no recovery.
pub fn parse_program<I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Decl>>
    where I: Iterator<Item = Token>
{
    let mut decls = Vec::new();
    loop {
        skip_semicolons(tokens);
        if peek_kind(tokens) == TokenKind::Eof {
            return Ok(decls);
        }
        decls.push(parse_declaration(tokens)?);
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and climbs through the precedence
/// table.
///
/// Grammar: `expression := binary(1)`
///
/// # Parameters
/// - `tokens`: The token stream positioned at the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let _nested = Nested::enter(tokens)?;
    parse_binary(tokens, 1)
}
