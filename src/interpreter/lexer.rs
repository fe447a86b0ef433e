use logos::Logos;

/// Raw lexemes recognized by the logos state machine.
///
/// This is the layer below [`crate::interpreter::scanner::Scanner`]: it knows
/// nothing about positions, keywords or statement-ending newlines. Words are
/// matched as [`RawToken::Word`] and only classified into keywords by the
/// scanner, through the keyword table.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// A Unicode letter followed by letters or decimal digits.
    #[regex(r"\p{L}[\p{L}\p{Nd}]*")]
    Word,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// Float literal tokens, such as `3.14` or `12.`. At most one period is
    /// consumed.
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,
    /// String literal tokens, including the quotes. Escapes are kept
    /// verbatim and newlines are allowed.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, allow_greedy = true)]
    String,
    /// A string literal with no closing quote before the end of input.
    #[regex(r#""([^"\\]|\\(.|\n))*\\?"#, allow_greedy = true)]
    UnterminatedString,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `(`
    #[token("(")]
    LParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Period,
    /// `)`
    #[token(")")]
    RParen,
    /// `]`
    #[token("]")]
    RBracket,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Line breaks. The scanner decides whether they end a statement.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}
