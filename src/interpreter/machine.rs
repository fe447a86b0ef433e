/// Core machine state and entry points.
///
/// Contains the machine itself, its declaration tables, the control-flow
/// signal and the result alias shared by every evaluation function.
pub mod core;

/// Lexical scopes.
///
/// An arena of scopes linked to their parents by index.
pub mod scope;

/// Statement execution.
///
/// Runs blocks and the statements inside them, propagating control-flow
/// signals.
pub mod statement;

/// Evaluation of `қайтала` loops.
pub mod for_loop;

/// Assignment.
///
/// Stores values into variables, struct fields and array elements.
pub mod assign;

/// Expression evaluation.
///
/// Literals, names, array literals, field selections and indexes.
pub mod expression;

/// Binary operator evaluation.
///
/// Arithmetic, comparison, equality and logical operators, dispatched on the
/// shared operand type.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Function calls.
///
/// Argument binding and checking, return value checking and the call depth
/// limit.
pub mod function;

/// Built-in functions.
///
/// The table of host-implemented functions, starting with `жаз`.
pub mod builtin;
