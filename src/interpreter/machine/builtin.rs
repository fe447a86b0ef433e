use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{machine::core::EvalResult, value::core::Value},
};

/// Name of the print builtin.
pub const PRINT: &str = "жаз";

/// Signature shared by every builtin: the output sink, the evaluated
/// arguments and the line of the call.
type BuiltinFn = fn(&mut dyn Write, &[Value], usize) -> EvalResult<Option<Value>>;

/// Defines the builtin table.
///
/// Generates:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:expr => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    PRINT => print,
}

/// Returns `true` if `name` is reserved by a builtin.
///
/// # Example
/// ```
/// use qurt::interpreter::machine::builtin::is_builtin;
///
/// assert!(is_builtin("жаз"));
/// assert!(!is_builtin("қосу"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Invokes the builtin called `name`, if there is one.
///
/// # Returns
/// `None` if no builtin has that name, otherwise the builtin's result.
pub(crate) fn call_builtin(out: &mut dyn Write,
                           name: &str,
                           args: &[Value],
                           line: usize)
                           -> Option<EvalResult<Option<Value>>> {
    BUILTIN_TABLE.iter()
                 .find(|def| def.name == name)
                 .map(|def| (def.func)(out, args, line))
}

/// Writes the arguments joined by single spaces, then a newline.
///
/// Accepts any number of arguments of any type and returns no value.
///
/// # Errors
/// `Output` if the sink rejects the write.
fn print(out: &mut dyn Write, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let text = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    writeln!(out, "{text}").map_err(|source| RuntimeError::Output { source, line })?;

    Ok(None)
}
