use std::iter::Peekable;

use crate::{
    ast::{AssignStmt, ElseBranch, Expr, ForStmt, IfStmt, Stmt},
    error::ParseError,
    interpreter::{
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            decl::parse_var_decl,
            unary::parse_name_chain,
            utils::{Nested, expect, expect_terminator, next_token, peek_kind, unexpected},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement inside a block.
///
/// A statement may be one of:
/// - a variable declaration (`айнымалы`),
/// - a conditional (`егер`),
/// - a loop (`қайтала`),
/// - a return (`қайтар`), with or without a value,
/// - `тоқта` or `өткіз`,
/// - an assignment or a call, both starting with a name.
///
/// # Errors
/// Returns `ParseError::UnknownStatement` if the token cannot start a
/// statement.
pub fn parse_statement<I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = Token>
{
    let (kind, line) = match tokens.peek() {
        Some(token) => (token.kind, token.pos.line),
        None => (TokenKind::Eof, 0),
    };

    let statement = match kind {
        TokenKind::Ident => return parse_simple_statement(tokens),
        TokenKind::If => {
            tokens.next();
            return Ok(Stmt::If(parse_if(tokens, line)?));
        },
        TokenKind::For => {
            tokens.next();
            return Ok(Stmt::For(parse_for(tokens, line)?));
        },
        TokenKind::Var => {
            tokens.next();
            Stmt::Var(parse_var_decl(tokens, line)?)
        },
        TokenKind::Return => {
            tokens.next();
            let value = match peek_kind(tokens) {
                TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
                _ => Some(parse_expression(tokens)?),
            };
            Stmt::Return { value, line }
        },
        TokenKind::Break => {
            tokens.next();
            Stmt::Break { line }
        },
        TokenKind::Continue => {
            tokens.next();
            Stmt::Continue { line }
        },
        TokenKind::Illegal | TokenKind::Eof => {
            return Err(unexpected(next_token(tokens, "a statement")?, "a statement"));
        },
        _ => {
            let token = next_token(tokens, "a statement")?;
            return Err(ParseError::UnknownStatement { found: token.lexeme,
                                                      pos:   token.pos, });
        },
    };

    expect_terminator(tokens)?;
    Ok(statement)
}

/// Parses an assignment or a call statement.
///
/// Both start with a name chain; an `=` after the chain makes it an
/// assignment, otherwise the chain must be a plain call.
fn parse_simple_statement<I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = Token>
{
    let pos = tokens.peek().map(|token| token.pos).unwrap_or_default();
    let target = parse_name_chain(tokens)?;

    let statement = if let Some(assign) = tokens.next_if(|token| token.kind == TokenKind::Assign)
    {
        Stmt::Assign(finish_assignment(tokens, target, assign.pos.line)?)
    } else {
        match target {
            Expr::Call(call) => Stmt::Call(call),
            _ => return Err(ParseError::ExpressionStatement { pos }),
        }
    };

    expect_terminator(tokens)?;
    Ok(statement)
}

/// Parses `target = value`, as used by the post-step of a loop.
fn parse_assignment<I>(tokens: &mut Peekable<I>) -> ParseResult<AssignStmt>
    where I: Iterator<Item = Token>
{
    let target = parse_name_chain(tokens)?;
    let assign = expect(tokens, TokenKind::Assign)?;

    finish_assignment(tokens, target, assign.pos.line)
}

fn finish_assignment<I>(tokens: &mut Peekable<I>,
                        target: Expr,
                        line: usize)
                        -> ParseResult<AssignStmt>
    where I: Iterator<Item = Token>
{
    if !is_assignable(&target) {
        return Err(ParseError::InvalidAssignmentTarget { pos: tokens.peek()
                                                                    .map(|token| token.pos)
                                                                    .unwrap_or_default() });
    }
    let value = parse_expression(tokens)?;

    Ok(AssignStmt { target, value, line })
}

/// A name, or a chain of selections and indexes rooted at a name.
fn is_assignable(expr: &Expr) -> bool {
    match expr {
        Expr::Name { .. } => true,
        Expr::Selector { expr, .. } => is_assignable(expr),
        Expr::Index { array, .. } => is_assignable(array),
        _ => false,
    }
}

/// Parses an `егер` statement with optional `әйтпесе` and chained
/// `әйтпесе егер`.
///
/// Syntax:
/// ```text
///     егер (condition) { ... }
///     әйтпесе егер (condition) { ... }
///     әйтпесе { ... }
/// ```
/// `әйтпесе` has to follow the closing brace on the same line.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `егер` keyword.
/// - `line`: Line number of the `егер` token.
pub fn parse_if<I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<IfStmt>
    where I: Iterator<Item = Token>
{
    expect(tokens, TokenKind::LParen)?;
    let cond = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;
    let then_block = parse_block(tokens)?;

    let else_branch = if tokens.next_if(|token| token.kind == TokenKind::Else).is_some() {
        match tokens.peek().map(|token| (token.kind, token.pos.line)) {
            // The nested `егер` consumes the terminator.
            Some((TokenKind::If, if_line)) => {
                tokens.next();
                let _nested = Nested::enter(tokens)?;
                Some(ElseBranch::If(Box::new(parse_if(tokens, if_line)?)))
            },
            _ => {
                let block = parse_block(tokens)?;
                expect_terminator(tokens)?;
                Some(ElseBranch::Block(block))
            },
        }
    } else {
        expect_terminator(tokens)?;
        None
    };

    Ok(IfStmt { cond,
                then_block,
                else_branch,
                line })
}

/// Parses a `қайтала` loop.
///
/// Grammar: `for := "(" var ";" expression ";" assignment ")" block`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `қайтала` keyword.
/// - `line`: Line number of the `қайтала` token.
pub fn parse_for<I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ForStmt>
    where I: Iterator<Item = Token>
{
    expect(tokens, TokenKind::LParen)?;

    let var = expect(tokens, TokenKind::Var)?;
    let init = parse_var_decl(tokens, var.pos.line)?;
    expect(tokens, TokenKind::Semicolon)?;

    let cond = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    let post = parse_assignment(tokens)?;
    expect(tokens, TokenKind::RParen)?;

    let body = parse_block(tokens)?;
    expect_terminator(tokens)?;

    Ok(ForStmt { init,
                 cond,
                 post,
                 body,
                 line })
}
