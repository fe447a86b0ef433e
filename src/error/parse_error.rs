use crate::interpreter::token::Pos;

/// Diagnostics produced by the scanner. They travel inside `ҚАТЕ` tokens and
/// become fatal once the parser reaches them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unrecognized character '{character}'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it appears.
        pos:       Pos,
    },
    /// A single `&`. There is no bitwise and.
    #[error("unexpected '&', did you mean '&&'?")]
    LoneAmpersand {
        /// Where it appears.
        pos: Pos,
    },
    /// A single `|`. There is no bitwise or.
    #[error("unexpected '|', did you mean '||'?")]
    LonePipe {
        /// Where it appears.
        pos: Pos,
    },
    /// A string literal that runs to the end of input.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// Where the string starts.
        pos: Pos,
    },
}

impl LexError {
    /// Where the offending input starts.
    #[must_use]
    pub const fn pos(&self) -> Pos {
        match self {
            Self::InvalidCharacter { pos, .. }
            | Self::LoneAmpersand { pos }
            | Self::LonePipe { pos }
            | Self::UnterminatedString { pos } => *pos,
        }
    }
}

/// The kind of top-level declaration an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `функция`
    Function,
    /// `құрылым`
    Struct,
    /// `айнымалы`
    Variable,
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
                        Self::Function => "function",
                        Self::Struct => "struct",
                        Self::Variable => "variable",
                    })
    }
}

/// Identifies the documentation page that explains a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    /// Lexical structure: characters, literals, comments.
    Tour,
    /// Overall program shape.
    Syntax,
    /// Function declarations and calls.
    Functions,
    /// Struct declarations.
    Structs,
    /// Variable declarations.
    Variables,
}

impl DocTopic {
    /// Returns the page identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tour => "tour",
            Self::Syntax => "syntax",
            Self::Functions => "functions",
            Self::Structs => "structs",
            Self::Variables => "variables",
        }
    }
}

impl std::fmt::Display for DocTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The scanner produced a `ҚАТЕ` token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Found a token that does not fit the grammar at this point.
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The lexeme encountered.
        found:    String,
        /// Where the token starts.
        pos:      Pos,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("expected {expected}, found end of input")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Position of the end of input.
        pos:      Pos,
    },
    /// A top-level token that does not start a declaration.
    #[error("unknown declaration starting with '{found}', expected функция, құрылым or айнымалы")]
    UnknownDeclaration {
        /// The lexeme encountered.
        found: String,
        /// Where the token starts.
        pos:   Pos,
    },
    /// A token inside a block that does not start a statement.
    #[error("unknown statement starting with '{found}'")]
    UnknownStatement {
        /// The lexeme encountered.
        found: String,
        /// Where the token starts.
        pos:   Pos,
    },
    /// An expression other than a call used as a statement.
    #[error("only function calls can be used as statements")]
    ExpressionStatement {
        /// Where the expression starts.
        pos: Pos,
    },
    /// The left side of `=` is not a name, field or element.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget {
        /// Where the target starts.
        pos: Pos,
    },
    /// A call whose callee is not a plain function name.
    #[error("only named functions can be called")]
    NotCallable {
        /// Position of the `(`.
        pos: Pos,
    },
    /// A numeric literal that does not fit its type.
    #[error("literal '{lexeme}' is too large")]
    LiteralTooLarge {
        /// The literal text.
        lexeme: String,
        /// Where the literal starts.
        pos:    Pos,
    },
    /// Expressions or blocks nested deeper than the parser follows.
    #[error("nesting is deeper than {limit} levels")]
    TooDeeplyNested {
        /// The deepest nesting accepted.
        limit: usize,
        /// Where the level that went too deep starts.
        pos:   Pos,
    },
    /// An error inside a declaration, tagged with the declaration kind.
    #[error("invalid {kind} declaration: {source}")]
    InvalidDeclaration {
        /// The declaration being parsed.
        kind:   DeclKind,
        /// The underlying error.
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Returns the position the error refers to.
    #[must_use]
    pub fn pos(&self) -> Pos {
        match self {
            Self::Lex(error) => error.pos(),
            Self::UnexpectedToken { pos, .. }
            | Self::UnexpectedEndOfInput { pos, .. }
            | Self::UnknownDeclaration { pos, .. }
            | Self::UnknownStatement { pos, .. }
            | Self::ExpressionStatement { pos }
            | Self::InvalidAssignmentTarget { pos }
            | Self::NotCallable { pos }
            | Self::LiteralTooLarge { pos, .. }
            | Self::TooDeeplyNested { pos, .. } => *pos,
            Self::InvalidDeclaration { source, .. } => source.pos(),
        }
    }

    /// Returns the documentation topic that explains the error.
    ///
    /// Lexical errors point to the language tour wherever they occur; other
    /// errors inside a declaration point to the page of that declaration kind.
    #[must_use]
    pub fn help(&self) -> DocTopic {
        match self {
            Self::Lex(_) => DocTopic::Tour,
            Self::InvalidDeclaration { kind, source } => match source.help() {
                DocTopic::Tour => DocTopic::Tour,
                _ => match kind {
                    DeclKind::Function => DocTopic::Functions,
                    DeclKind::Struct => DocTopic::Structs,
                    DeclKind::Variable => DocTopic::Variables,
                },
            },
            _ => DocTopic::Syntax,
        }
    }
}

/// A syntax error pinned to a source file and position.
///
/// # Example
/// ```
/// use qurt::{error::DocTopic, parse};
///
/// let diagnostic = parse("bad.qurt", "функция негізгі() ештеңе { & }".as_bytes()).unwrap_err();
///
/// assert_eq!(diagnostic.line, 1);
/// assert_eq!(diagnostic.column, 28);
/// assert_eq!(diagnostic.help(), DocTopic::Tour);
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{source_name}:{line}:{column}: {error} (see: {topic})", topic = .error.help())]
pub struct Diagnostic {
    /// Name of the source, usually a file path.
    pub source_name: String,
    /// Line, starting at 1.
    pub line:        usize,
    /// Column in code points, starting at 1.
    pub column:      usize,
    /// What went wrong.
    pub error:       ParseError,
}

impl Diagnostic {
    /// Pins `error` to `source_name` at the position the error refers to.
    #[must_use]
    pub fn new(source_name: &str, error: ParseError) -> Self {
        let pos = error.pos();
        Self { source_name: source_name.to_string(),
               line: pos.line,
               column: pos.column,
               error }
    }

    /// Renders the error without position information.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Returns the documentation topic that explains the error.
    #[must_use]
    pub fn help(&self) -> DocTopic {
        self.error.help()
    }
}
