//! # qurt
//!
//! qurt is an interpreter for Qurt, a small statically-shaped language with
//! Kazakh keywords. Programs declare structs, functions and global variables;
//! execution starts in the function `негізгі`.
//!
//! The pipeline is scanner → parser → machine: [`parse`] turns source bytes
//! into declarations, and [`run`] parses a program and executes it, writing
//! everything it prints to the given sink.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{io::Write, panic, thread};

use crate::{
    ast::Decl,
    error::{Diagnostic, Error},
    interpreter::{
        machine::core::{MACHINE_STACK_SIZE, Machine},
        parser::core::parse_program,
        scanner::Scanner,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the declarations, statements and expressions that
/// represent a program as a tree, along with the type descriptors used in
/// declarations. The AST is built by the parser and walked by the machine.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or running a program. Syntax errors are wrapped in a [`error::Diagnostic`]
/// carrying the source name, position and a documentation topic.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (scanner, parser, machine).
/// - Attaches line numbers, and columns where known, to every error.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, values and the machine to
/// provide a complete runtime for Qurt programs.
pub mod interpreter;

/// Parses a program into its top-level declarations.
///
/// Invalid UTF-8 in `source` is replaced with `U+FFFD` before scanning.
///
/// # Errors
/// The first syntax error, as a [`Diagnostic`] positioned in `source_name`.
///
/// # Examples
/// ```
/// use qurt::{error::DocTopic, parse};
///
/// let decls = parse("main.qurt", "айнымалы x бүтін = 5".as_bytes()).unwrap();
/// assert_eq!(decls.len(), 1);
///
/// let err = parse("main.qurt", "құрылым Нүкте { x }".as_bytes()).unwrap_err();
/// assert_eq!(err.help(), DocTopic::Structs);
/// ```
pub fn parse(source_name: &str, source: &[u8]) -> Result<Vec<Decl>, Diagnostic> {
    let text = String::from_utf8_lossy(source);
    let mut tokens = Scanner::new(source_name, &text).into_tokens().peekable();

    parse_program(&mut tokens).map_err(|error| Diagnostic::new(source_name, error))
}

/// Parses and runs a program, writing its output to `out`.
///
/// Parsing happens on the calling thread. The machine runs on a scoped thread
/// with [`MACHINE_STACK_SIZE`] bytes of stack, so runaway recursion ends in
/// `RuntimeError::CallStackExhausted` whatever the caller's stack size.
///
/// # Errors
/// A syntax error from [`parse`], the first runtime error raised while
/// building the machine or executing the program, or `Error::Thread` if the
/// machine thread cannot be spawned.
///
/// # Examples
/// ```
/// use qurt::run;
///
/// let source = "
/// функция негізгі() ештеңе {
///     жаз(\"иә\", 1 + 2)
/// }
/// ";
/// let mut out = Vec::new();
/// run(&mut out, "main.qurt", source.as_bytes()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "иә 3\n");
/// ```
pub fn run<W>(out: W, source_name: &str, source: &[u8]) -> Result<(), Error>
    where W: Write + Send
{
    let decls = parse(source_name, source)?;
    log::debug!("parsed {} declaration(s) from '{source_name}'", decls.len());

    thread::scope(|scope| {
        let handle = thread::Builder::new().name("qurt-machine".to_string())
                                          .stack_size(MACHINE_STACK_SIZE)
                                          .spawn_scoped(scope, move || -> Result<(), Error> {
                                              let mut machine = Machine::new(decls, out)?;
                                              machine.run()?;
                                              Ok(())
                                          })
                                          .map_err(Error::Thread)?;

        handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload))
    })
}
