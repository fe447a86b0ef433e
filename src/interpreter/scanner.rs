use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        lexer::RawToken,
        token::{self, Pos, Token, TokenKind},
    },
};

/// Turns source text into [`Token`]s, one per call to [`Scanner::scan`].
///
/// The scanner sits on top of the logos-generated [`RawToken`] lexer and adds
/// what the raw lexer does not know about:
///
/// - line and column tracking (columns count code points),
/// - keyword classification through the keyword table,
/// - the newline policy: a newline becomes a `;` token (lexeme `newline`) only
///   directly after a token that can end a statement,
/// - lexical diagnostics, reported as `ҚАТЕ` tokens instead of failures.
///
/// After the end of input every call to `scan` returns another `EOF` token.
/// [`Scanner::into_tokens`] turns the scanner into an iterator that yields the
/// first `EOF` and then stops.
///
/// # Example
/// ```
/// use qurt::interpreter::{scanner::Scanner, token::TokenKind};
///
/// let mut scanner = Scanner::new("main.qurt", "x = 1\n");
/// assert_eq!(scanner.scan().kind, TokenKind::Ident);
///
/// let kinds: Vec<TokenKind> = scanner.into_tokens().map(|token| token.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Assign,
///             TokenKind::Int,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub struct Scanner<'src> {
    lexer:       logos::Lexer<'src, RawToken>,
    source_name: String,
    source:      &'src str,
    line:        usize,
    line_start:  usize,
    pos:         Pos,
    last_kind:   Option<TokenKind>,
    last_error:  Option<LexError>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `source`, reporting positions against
    /// `source_name`.
    #[must_use]
    pub fn new(source_name: &str, source: &'src str) -> Self {
        Self { lexer: RawToken::lexer(source),
               source_name: source_name.to_string(),
               source,
               line: 1,
               line_start: 0,
               pos: Pos { line: 1, column: 1 },
               last_kind: None,
               last_error: None }
    }

    /// Scans the next token.
    ///
    /// Each call consumes exactly one token's worth of input. Lexical problems
    /// produce an `Illegal` token carrying the diagnostic, which is also kept
    /// for [`Scanner::last_error`].
    pub fn scan(&mut self) -> Token {
        loop {
            let Some(raw) = self.lexer.next() else {
                self.pos = self.position_of(self.source.len());
                return self.emit(TokenKind::Eof, String::new(), None);
            };

            let start = self.lexer.span().start;
            let pos = self.position_of(start);
            self.pos = pos;

            let raw = match raw {
                Ok(RawToken::NewLine) => {
                    self.advance_line(self.lexer.span().end);

                    if self.last_kind.is_some_and(TokenKind::ends_statement) {
                        return self.emit(TokenKind::Semicolon, "newline".to_string(), None);
                    }
                    continue;
                },
                Ok(raw) => raw,
                Err(()) => {
                    let character = self.source[start..].chars()
                                                        .next()
                                                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    let end = start + character.len_utf8();
                    if self.lexer.span().end < end {
                        self.lexer.bump(end - self.lexer.span().end);
                    }
                    let error = classify_error(character, pos);
                    return self.emit(TokenKind::Illegal, character.to_string(), Some(error));
                },
            };

            let slice = self.lexer.slice();
            let (kind, lexeme, error) = match raw {
                RawToken::Word => {
                    (token::lookup(slice).unwrap_or(TokenKind::Ident), slice.to_string(), None)
                },
                RawToken::String => {
                    let lexeme = slice[1..slice.len() - 1].to_string();
                    self.skip_embedded_lines(start, slice);
                    (TokenKind::String, lexeme, None)
                },
                RawToken::UnterminatedString => {
                    let lexeme = slice.to_string();
                    self.skip_embedded_lines(start, slice);
                    (TokenKind::Illegal, lexeme, Some(LexError::UnterminatedString { pos }))
                },
                other => (raw_kind(other), slice.to_string(), None),
            };

            return self.emit(kind, lexeme, error);
        }
    }

    /// Returns the source name together with the start position of the most
    /// recently scanned token.
    #[must_use]
    pub fn position(&self) -> (&str, Pos) {
        (&self.source_name, self.pos)
    }

    /// Returns the diagnostic of the most recent `Illegal` token, if any.
    #[must_use]
    pub const fn last_error(&self) -> Option<&LexError> {
        self.last_error.as_ref()
    }

    /// Turns the scanner into an iterator over the remaining tokens, ending
    /// with a single `EOF`.
    #[must_use]
    pub fn into_tokens(self) -> Tokens<'src> {
        Tokens { scanner:  self,
                 finished: false, }
    }

    fn emit(&mut self, kind: TokenKind, lexeme: String, error: Option<LexError>) -> Token {
        self.last_kind = Some(kind);
        if error.is_some() {
            self.last_error.clone_from(&error);
        }
        Token { kind,
                lexeme,
                pos: self.pos,
                error }
    }

    fn position_of(&self, offset: usize) -> Pos {
        let column = self.source[self.line_start..offset].chars().count() + 1;
        Pos { line: self.line,
              column }
    }

    fn advance_line(&mut self, next_line_start: usize) {
        self.line += 1;
        self.line_start = next_line_start;
    }

    fn skip_embedded_lines(&mut self, start: usize, slice: &str) {
        for (offset, _) in slice.match_indices('\n') {
            self.advance_line(start + offset + 1);
        }
    }
}

fn classify_error(character: char, pos: Pos) -> LexError {
    match character {
        '&' => LexError::LoneAmpersand { pos },
        '|' => LexError::LonePipe { pos },
        _ => LexError::InvalidCharacter { character, pos },
    }
}

/// The tokens of a [`Scanner`], up to and including the first `EOF`.
pub struct Tokens<'src> {
    scanner:  Scanner<'src>,
    finished: bool,
}

impl<'src> Tokens<'src> {
    /// Returns the underlying scanner, for its position and last diagnostic.
    #[must_use]
    pub const fn scanner(&self) -> &Scanner<'src> {
        &self.scanner
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.scanner.scan();
        self.finished = token.kind == TokenKind::Eof;
        Some(token)
    }
}

/// Maps the fixed-text raw tokens onto their token kinds.
const fn raw_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Word => TokenKind::Ident,
        RawToken::Int => TokenKind::Int,
        RawToken::Float => TokenKind::Float,
        RawToken::String => TokenKind::String,
        RawToken::UnterminatedString
        | RawToken::Comment
        | RawToken::NewLine
        | RawToken::Ignored => TokenKind::Illegal,
        RawToken::Plus => TokenKind::Add,
        RawToken::Minus => TokenKind::Sub,
        RawToken::Star => TokenKind::Mul,
        RawToken::Slash => TokenKind::Div,
        RawToken::Percent => TokenKind::Mod,
        RawToken::DoubleAmpersand => TokenKind::LogicalAnd,
        RawToken::DoublePipe => TokenKind::LogicalOr,
        RawToken::EqualEqual => TokenKind::Equal,
        RawToken::Less => TokenKind::Less,
        RawToken::Greater => TokenKind::Greater,
        RawToken::Equals => TokenKind::Assign,
        RawToken::Bang => TokenKind::Not,
        RawToken::BangEqual => TokenKind::NotEqual,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::LParen => TokenKind::LParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Period => TokenKind::Period,
        RawToken::RParen => TokenKind::RParen,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
    }
}
