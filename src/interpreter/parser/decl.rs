use std::iter::Peekable;

use crate::{
    ast::{Decl, FuncDecl, Kind, StructDecl, TypeDesc, VarDecl},
    error::{DeclKind, ParseError},
    interpreter::{
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{
                expect, expect_terminator, next_token, parse_comma_separated, parse_field,
                parse_identifier, parse_type, peek_kind, skip_semicolons, unexpected,
            },
        },
        token::{Token, TokenKind},
    },
};

/// Parses one top-level declaration.
///
/// Dispatches on the leading keyword. Errors raised inside a declaration are
/// wrapped in `ParseError::InvalidDeclaration` so the diagnostic can point to
/// the matching documentation page.
///
/// # Errors
/// Returns `ParseError::UnknownDeclaration` if the token does not start a
/// declaration.
pub fn parse_declaration<I>(tokens: &mut Peekable<I>) -> ParseResult<Decl>
    where I: Iterator<Item = Token>
{
    let token = next_token(tokens, "a declaration")?;
    let line = token.pos.line;

    let (kind, decl) = match token.kind {
        TokenKind::Func => (DeclKind::Function, parse_function(tokens, line).map(Decl::Func)),
        TokenKind::Struct => (DeclKind::Struct, parse_struct(tokens, line).map(Decl::Struct)),
        TokenKind::Var => {
            let decl = parse_var_decl(tokens, line).and_then(|decl| {
                                                       expect_terminator(tokens)?;
                                                       Ok(decl)
                                                   });
            (DeclKind::Variable, decl.map(Decl::Var))
        },
        _ => {
            return Err(ParseError::UnknownDeclaration { found: token.lexeme,
                                                        pos:   token.pos, });
        },
    };

    let decl = decl.map_err(|source| ParseError::InvalidDeclaration { kind,
                                                                      source: Box::new(source) })?;
    log::trace!("parsed {kind} '{}' on line {line}", decl.name());

    Ok(decl)
}

/// Parses a function declaration after the `функция` keyword.
///
/// Two layouts are accepted:
///
/// ```text
///     функция name(params) type { ... }
///     функция type name(params) { ... }
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned after `функция`.
/// - `line`: Line number of the keyword.
fn parse_function<I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<FuncDecl>
    where I: Iterator<Item = Token>
{
    let leading_type = if peek_kind(tokens) == TokenKind::LBracket {
        Some(parse_type(tokens)?)
    } else {
        None
    };

    let (first, _) = parse_identifier(tokens)?;
    let (name, leading_type) = match leading_type {
        Some(ty) => (first, Some(ty)),
        None if peek_kind(tokens) == TokenKind::LParen => (first, None),
        None => (parse_identifier(tokens)?.0, Some(TypeDesc::scalar(Kind::from_name(&first)))),
    };

    expect(tokens, TokenKind::LParen)?;
    let args = parse_comma_separated(tokens, parse_field, TokenKind::RParen)?;

    let return_type = match leading_type {
        Some(ty) => ty,
        None => parse_type(tokens)?,
    };
    let body = parse_block(tokens)?;

    Ok(FuncDecl { name,
                  args,
                  return_type,
                  body,
                  line })
}

/// Parses a struct declaration after the `құрылым` keyword.
///
/// Fields are `name type` pairs ended by `;`, a line break, or the closing
/// brace.
///
/// Grammar: `struct := name "{" (name type (";" | before "}"))* "}"`
fn parse_struct<I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<StructDecl>
    where I: Iterator<Item = Token>
{
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::LBrace)?;

    let mut fields = Vec::new();
    loop {
        skip_semicolons(tokens);
        match peek_kind(tokens) {
            TokenKind::RBrace => {
                tokens.next();
                break;
            },
            TokenKind::Ident => {
                fields.push(parse_field(tokens)?);
                expect_terminator(tokens)?;
            },
            _ => return Err(unexpected(next_token(tokens, "a field or '}'")?, "a field or '}'")),
        }
    }

    Ok(StructDecl { name, fields, line })
}

/// Parses a variable declaration after the `айнымалы` keyword, without its
/// terminator.
///
/// Grammar: `var := name type ("=" expression)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned after `айнымалы`.
/// - `line`: Line number of the keyword.
pub(in crate::interpreter::parser) fn parse_var_decl<I>(tokens: &mut Peekable<I>,
                                                        line: usize)
                                                        -> ParseResult<VarDecl>
    where I: Iterator<Item = Token>
{
    let (name, _) = parse_identifier(tokens)?;
    let ty = parse_type(tokens)?;

    let value = if tokens.next_if(|token| token.kind == TokenKind::Assign).is_some() {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(VarDecl { name,
                 ty,
                 value,
                 line })
}
