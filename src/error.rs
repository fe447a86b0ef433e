/// Lexing and parsing errors.
///
/// Defines the scanner diagnostics carried by `ҚАТЕ` tokens, the syntax errors
/// raised by the parser, and the [`Diagnostic`] that pins a syntax error to a
/// file, line and column together with a documentation topic.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the machine is built from
/// declarations and while it executes them: duplicate declarations, type
/// mismatches, bad indexes, misplaced control flow and so on.
pub mod runtime_error;

pub use parse_error::{DeclKind, Diagnostic, DocTopic, LexError, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of [`crate::run`]: either the program did not parse, or it
/// failed while running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be parsed.
    #[error(transparent)]
    Syntax(#[from] Diagnostic),
    /// The program was rejected by the machine or failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The thread the program runs on could not be started.
    #[error("failed to start the interpreter thread: {0}")]
    Thread(#[source] std::io::Error),
}
