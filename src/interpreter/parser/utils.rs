use std::{cell::Cell, iter::Peekable};

use crate::{
    ast::{Field, Kind, TypeDesc},
    error::ParseError,
    interpreter::{
        parser::core::{MAX_NESTING, ParseResult},
        token::{Pos, Token, TokenKind},
    },
};

thread_local! {
    static NESTING: Cell<usize> = const { Cell::new(0) };
}

/// One level of expression or block nesting, left again when dropped.
///
/// The parser recurses once per level, so the depth is capped at
/// [`MAX_NESTING`] to turn absurdly nested input into an error.
pub(in crate::interpreter::parser) struct Nested(());

impl Nested {
    /// Enters a nesting level at the next token.
    ///
    /// # Errors
    /// `ParseError::TooDeeplyNested` at the next token's position once
    /// [`MAX_NESTING`] levels are open.
    pub(in crate::interpreter::parser) fn enter<I>(tokens: &mut Peekable<I>) -> ParseResult<Self>
        where I: Iterator<Item = Token>
    {
        let depth = NESTING.get();
        if depth >= MAX_NESTING {
            let pos = tokens.peek().map_or_else(Pos::default, |token| token.pos);
            return Err(ParseError::TooDeeplyNested { limit: MAX_NESTING,
                                                     pos });
        }

        NESTING.set(depth + 1);
        Ok(Self(()))
    }
}

impl Drop for Nested {
    fn drop(&mut self) {
        NESTING.set(NESTING.get() - 1);
    }
}

/// Builds the error for a token the grammar did not expect here.
///
/// `ҚАТЕ` tokens turn into their lexical diagnostic and `EOF` into an
/// unexpected end of input; everything else is an unexpected token.
pub(in crate::interpreter::parser) fn unexpected(token: Token, expected: &str) -> ParseError {
    if let Some(error) = token.error {
        return error.into();
    }
    match token.kind {
        TokenKind::Eof => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                             pos:      token.pos, },
        _ => ParseError::UnexpectedToken { expected: expected.to_string(),
                                           found:    token.lexeme,
                                           pos:      token.pos, },
    }
}

/// Consumes the next token.
///
/// # Errors
/// Returns the lexical diagnostic for a `ҚАТЕ` token, or an unexpected end of
/// input once the stream is exhausted.
pub(in crate::interpreter::parser) fn next_token<I>(tokens: &mut Peekable<I>,
                                                    expected: &str)
                                                    -> ParseResult<Token>
    where I: Iterator<Item = Token>
{
    match tokens.next() {
        Some(token) if token.kind == TokenKind::Illegal => Err(unexpected(token, expected)),
        Some(token) => Ok(token),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       pos:      Pos::default(), }),
    }
}

/// Returns the kind of the next token without consuming it. An exhausted
/// stream looks like `EOF`.
pub(in crate::interpreter::parser) fn peek_kind<I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = Token>
{
    tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
}

/// Consumes the next token and checks that it has the given kind.
///
/// # Errors
/// Returns a `ParseError` if the token has another kind.
pub(in crate::interpreter::parser) fn expect<I>(tokens: &mut Peekable<I>,
                                                kind: TokenKind)
                                                -> ParseResult<Token>
    where I: Iterator<Item = Token>
{
    let expected = format!("'{kind}'");
    let token = next_token(tokens, &expected)?;
    if token.kind == kind { Ok(token) } else { Err(unexpected(token, &expected)) }
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<(String, Pos)>
    where I: Iterator<Item = Token>
{
    let token = next_token(tokens, "a name")?;
    match token.kind {
        TokenKind::Ident => Ok((token.lexeme, token.pos)),
        _ => Err(unexpected(token, "a name")),
    }
}

/// Parses a type descriptor: an optional `[N]` array prefix followed by a type
/// name.
///
/// Grammar: `type := ("[" INT "]")? name`
///
/// # Errors
/// Returns a `ParseError` if the array length is not an integer literal, does
/// not fit in `usize`, or the type name is missing.
pub(in crate::interpreter::parser) fn parse_type<I>(tokens: &mut Peekable<I>)
                                                    -> ParseResult<TypeDesc>
    where I: Iterator<Item = Token>
{
    let array_len = if peek_kind(tokens) == TokenKind::LBracket {
        tokens.next();
        let token = next_token(tokens, "an array length")?;
        if token.kind != TokenKind::Int {
            return Err(unexpected(token, "an array length"));
        }
        let len = token.lexeme
                       .parse::<usize>()
                       .map_err(|_| ParseError::LiteralTooLarge { lexeme: token.lexeme.clone(),
                                                                  pos:    token.pos, })?;
        expect(tokens, TokenKind::RBracket)?;
        Some(len)
    } else {
        None
    };

    let token = next_token(tokens, "a type")?;
    if token.kind != TokenKind::Ident {
        return Err(unexpected(token, "a type"));
    }

    Ok(TypeDesc { kind: Kind::from_name(&token.lexeme),
                  array_len })
}

/// Parses `name type` pairs, used by parameters and struct fields.
pub(in crate::interpreter::parser) fn parse_field<I>(tokens: &mut Peekable<I>)
                                                     -> ParseResult<Field>
    where I: Iterator<Item = Token>
{
    let (name, _) = parse_identifier(tokens)?;
    let ty = parse_type(tokens)?;

    Ok(Field { name, ty })
}

/// Consumes semicolons produced by line breaks.
///
/// Used inside bracketed lists, where a line break after an element is not a
/// statement separator.
pub(in crate::interpreter::parser) fn skip_newlines<I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = Token>
{
    while tokens.next_if(|token| token.kind == TokenKind::Semicolon && token.lexeme == "newline")
                .is_some()
    {}
}

/// Consumes every `;` at the current position.
pub(in crate::interpreter::parser) fn skip_semicolons<I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = Token>
{
    while tokens.next_if(|token| token.kind == TokenKind::Semicolon).is_some() {}
}

/// Ends a statement or declaration: a `;` (or line break) is consumed, while a
/// following `}` or end of input is left in place.
///
/// # Errors
/// Returns a `ParseError` for any other token.
pub(in crate::interpreter::parser) fn expect_terminator<I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    match peek_kind(tokens) {
        TokenKind::Semicolon => {
            tokens.next();
            Ok(())
        },
        TokenKind::RBrace | TokenKind::Eof => Ok(()),
        _ => Err(unexpected(next_token(tokens, "';' or a new line")?, "';' or a new line")),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, argument lists and parameter
/// lists. An immediately encountered closing token produces an empty list, and
/// a trailing comma before the closing token is accepted. Line breaks between
/// items are ignored.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list (e.g. `)` or `}`).
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = Token>
{
    let mut items = Vec::new();
    loop {
        skip_newlines(tokens);
        if peek_kind(tokens) == closing {
            tokens.next();
            return Ok(items);
        }

        items.push(parse_item(tokens)?);
        skip_newlines(tokens);

        let expected = format!("',' or '{closing}'");
        let token = next_token(tokens, &expected)?;
        match token.kind {
            TokenKind::Comma => {},
            kind if kind == closing => return Ok(items),
            _ => return Err(unexpected(token, &expected)),
        }
    }
}
