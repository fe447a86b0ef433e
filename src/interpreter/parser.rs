/// Core parsing entry points.
///
/// Defines the result alias shared by every parser function, the top-level
/// program loop and the expression entry point.
pub mod core;

/// Declaration parsing.
///
/// Parses `функция`, `құрылым` and `айнымалы` declarations and tags their
/// errors with the declaration kind.
pub mod decl;

/// Block parsing.
///
/// Parses `{ ... }` statement sequences.
pub mod block;

/// Statement parsing.
///
/// Parses variable declarations, assignments, calls, conditionals, loops and
/// control-flow keywords inside function bodies.
pub mod statement;

/// Binary expression parsing.
///
/// Implements precedence climbing over the operator table.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, grouping, array literals and
/// identifier-led chains of calls, field selections and indexes.
pub mod unary;

/// Utility functions for the parser.
///
/// Token expectations, identifiers, type descriptors, comma-separated lists and
/// statement terminators.
pub mod utils;
