use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A lexical category produced by the scanner.
///
/// The variants are declared in the canonical order of the language's token
/// table: sentinels, literals, operators, punctuation and keywords. The
/// derived ordering follows that declaration order, so every group occupies a
/// contiguous range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// An unrecognized or malformed piece of input. Always carries a
    /// diagnostic.
    Illegal,
    /// End of input.
    Eof,

    /// Identifier, such as `негізгі` or `x1`.
    Ident,
    /// Integer literal, such as `42`.
    Int,
    /// Float literal, such as `3.14` or `12.`.
    Float,
    /// String literal; the lexeme excludes the quotes.
    String,
    /// `иә`
    True,
    /// `жоқ`
    False,

    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `==`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Assign,
    /// `!`
    Not,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,

    /// `(`
    LParen,
    /// `[`
    LBracket,
    /// `{`
    LBrace,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `)`
    RParen,
    /// `]`
    RBracket,
    /// `}`
    RBrace,
    /// `;` or a statement-ending newline.
    Semicolon,

    /// `тоқта`
    Break,
    /// `өткіз`
    Continue,
    /// `әйтпесе`
    Else,
    /// `қайтала`
    For,
    /// `функция`
    Func,
    /// `егер`
    If,
    /// `қайтар`
    Return,
    /// `құрылым`
    Struct,
    /// `айнымалы`
    Var,
}

impl TokenKind {
    /// Every token kind, in canonical order.
    pub const ALL: [Self; 41] = [Self::Illegal,
                                 Self::Eof,
                                 Self::Ident,
                                 Self::Int,
                                 Self::Float,
                                 Self::String,
                                 Self::True,
                                 Self::False,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Mod,
                                 Self::LogicalAnd,
                                 Self::LogicalOr,
                                 Self::Equal,
                                 Self::Less,
                                 Self::Greater,
                                 Self::Assign,
                                 Self::Not,
                                 Self::NotEqual,
                                 Self::LessEqual,
                                 Self::GreaterEqual,
                                 Self::LParen,
                                 Self::LBracket,
                                 Self::LBrace,
                                 Self::Comma,
                                 Self::Period,
                                 Self::RParen,
                                 Self::RBracket,
                                 Self::RBrace,
                                 Self::Semicolon,
                                 Self::Break,
                                 Self::Continue,
                                 Self::Else,
                                 Self::For,
                                 Self::Func,
                                 Self::If,
                                 Self::Return,
                                 Self::Struct,
                                 Self::Var];

    /// Returns the canonical display string of the token kind.
    ///
    /// For operators, punctuation and keywords this is the exact source text.
    /// For the remaining kinds it is the language's name for the category.
    ///
    /// # Example
    /// ```
    /// use qurt::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::Func.as_str(), "функция");
    /// assert_eq!(TokenKind::LessEqual.as_str(), "<=");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "ҚАТЕ",
            Self::Eof => "EOF",
            Self::Ident => "АТАУ",
            Self::Int => "БҮТІН",
            Self::Float => "БӨЛШЕК",
            Self::String => "ЖОЛ",
            Self::True => "иә",
            Self::False => "жоқ",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Equal => "==",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Assign => "=",
            Self::Not => "!",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::LParen => "(",
            Self::LBracket => "[",
            Self::LBrace => "{",
            Self::Comma => ",",
            Self::Period => ".",
            Self::RParen => ")",
            Self::RBracket => "]",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Break => "тоқта",
            Self::Continue => "өткіз",
            Self::Else => "әйтпесе",
            Self::For => "қайтала",
            Self::Func => "функция",
            Self::If => "егер",
            Self::Return => "қайтар",
            Self::Struct => "құрылым",
            Self::Var => "айнымалы",
        }
    }

    /// Returns `true` for identifier and literal kinds, including the boolean
    /// literals.
    #[must_use]
    pub fn is_literal(self) -> bool {
        (Self::Ident..=Self::False).contains(&self)
    }

    /// Returns `true` for arithmetic, comparison, logical and assignment
    /// operators.
    #[must_use]
    pub fn is_operator(self) -> bool {
        (Self::Add..=Self::GreaterEqual).contains(&self)
    }

    /// Returns `true` for the control-flow and declaration keywords.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        (Self::Break..=Self::Var).contains(&self)
    }

    /// Returns `true` if a newline directly after this token terminates a
    /// statement.
    #[must_use]
    pub const fn ends_statement(self) -> bool {
        matches!(self,
                 Self::Ident
                 | Self::Int
                 | Self::Float
                 | Self::String
                 | Self::True
                 | Self::False
                 | Self::RParen
                 | Self::RBracket
                 | Self::RBrace
                 | Self::Return
                 | Self::Break
                 | Self::Continue)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Words that the scanner turns into dedicated tokens instead of identifiers.
///
/// Built once from the canonical table: every keyword plus the two boolean
/// literals.
static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    TokenKind::ALL.iter()
                  .copied()
                  .filter(|kind| {
                      kind.is_keyword() || matches!(kind, TokenKind::True | TokenKind::False)
                  })
                  .map(|kind| (kind.as_str(), kind))
                  .collect()
});

/// Looks up a word in the keyword table.
///
/// # Example
/// ```
/// use qurt::interpreter::token::{TokenKind, lookup};
///
/// assert_eq!(lookup("егер"), Some(TokenKind::If));
/// assert_eq!(lookup("иә"), Some(TokenKind::True));
/// assert_eq!(lookup("егерсіз"), None);
/// ```
#[must_use]
pub fn lookup(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word).copied()
}

/// Source position of a token: 1-based line and column (in code points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

/// A scanned token: its kind, its literal text and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Lexical category.
    pub kind:   TokenKind,
    /// Literal text. String tokens exclude the surrounding quotes.
    pub lexeme: String,
    /// Start position.
    pub pos:    Pos,
    /// Diagnostic attached to `Illegal` tokens.
    pub error:  Option<crate::error::LexError>,
}
