/// The token model shared by the scanner and the parser.
///
/// Declares every token kind with its canonical display string, the keyword
/// table and source positions.
pub mod token;
/// The raw lexer generated by logos.
///
/// Recognizes words, numbers, strings, comments, operators and punctuation.
/// Keyword classification and line tracking happen in the scanner.
pub mod lexer;
/// The scanner turns source text into positioned tokens.
///
/// # Responsibilities
/// - Tracks lines and columns in code points.
/// - Classifies words as keywords or identifiers.
/// - Applies the newline policy, turning a newline into a statement
///   terminator only after a token that can end a statement.
/// - Reports lexical problems as `ҚАТЕ` tokens.
pub mod scanner;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the scanner and
/// constructs the program's declarations: structs, functions and global
/// variables, together with the statements and expressions inside them.
///
/// # Responsibilities
/// - Converts tokens into AST nodes using recursive descent for declarations
///   and statements and precedence climbing for binary expressions.
/// - Validates grammar, reporting the first error with its position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, floats, strings, booleans, fixed-length arrays and struct
/// values, plus the type checks and container access the machine relies on.
pub mod value;
/// The machine executes a parsed program.
///
/// # Responsibilities
/// - Builds the struct and function tables and validates the entry point.
/// - Executes statements and evaluates expressions by walking the tree.
/// - Manages lexical scopes, function calls and control-flow signals.
/// - Reports runtime errors such as type mismatches and division by zero.
pub mod machine;
