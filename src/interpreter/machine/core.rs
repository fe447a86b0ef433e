use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::{Decl, FuncDecl, VarDecl},
    error::RuntimeError,
    interpreter::{
        machine::{
            builtin::is_builtin,
            scope::{GLOBAL_SCOPE, Scopes},
        },
        value::{core::Value, types::StructTable},
    },
};

/// Result type used by the machine.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name of the function a program starts in.
pub const ENTRY_POINT: &str = "негізгі";

/// How deep user function calls may nest before the machine gives up.
pub const MAX_CALL_DEPTH: usize = 200;

/// Stack size of the thread [`crate::run`] executes programs on. It leaves
/// room for [`MAX_CALL_DEPTH`] calls, each with expressions and blocks nested
/// as deeply as the parser accepts.
pub const MACHINE_STACK_SIZE: usize = 256 * 1024 * 1024;

/// The control-flow outcome of executing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Continue with the next statement.
    Normal,
    /// Leave the current function, with an optional value.
    Return(Option<Value>),
    /// Leave the nearest loop.
    Break,
    /// Skip to the post-step of the nearest loop.
    Continue,
}

/// A tree-walking interpreter for one program.
///
/// The machine is built once from the program's declarations. It owns the
/// struct and function tables, the scope arena and the sink that `жаз`
/// writes to.
///
/// ## Usage
///
/// Build it with [`Machine::new`], which validates the declarations, then
/// start the program with [`Machine::run`]. Individual functions can also be
/// invoked through [`Machine::call`].
///
/// The machine recurses on the calling thread's stack. [`crate::run`] gives it
/// a thread with [`MACHINE_STACK_SIZE`] bytes of stack; callers that drive a
/// machine themselves need a similar stack for [`MAX_CALL_DEPTH`] to be the
/// limit that is reached first.
///
/// # Example
/// ```
/// use qurt::{interpreter::machine::core::Machine, parse};
///
/// let source = "функция негізгі() ештеңе { жаз(\"сәлем\", 42) }";
/// let decls = parse("main.qurt", source.as_bytes()).unwrap();
///
/// let mut machine = Machine::new(decls, Vec::new()).unwrap();
/// machine.run().unwrap();
///
/// assert_eq!(machine.into_output(), "сәлем 42\n".as_bytes());
/// ```
pub struct Machine<W: Write> {
    /// Declared structs by name.
    pub(crate) structs:   StructTable,
    /// Declared user functions by name.
    pub(crate) functions: HashMap<String, Rc<FuncDecl>>,
    /// Global variable declarations, in source order.
    globals:              Rc<[VarDecl]>,
    /// Live scopes.
    pub(crate) scopes:    Scopes,
    /// Whether the globals have been initialized.
    started:              bool,
    /// Current user call nesting.
    pub(crate) depth:     usize,
    /// Where `жаз` writes.
    pub(crate) out:       W,
}

impl<W: Write> Machine<W> {
    /// Builds a machine from a program's declarations.
    ///
    /// Structs and functions are collected into their tables and the entry
    /// point is validated. Global variables are only evaluated when the
    /// program starts.
    ///
    /// # Errors
    /// - `DuplicateStruct` / `DuplicateFunction` for repeated names.
    /// - `BuiltinFunctionRedefinition` if a function reuses a builtin name.
    /// - `MissingEntryPoint` if there is no `негізгі`.
    /// - `InvalidEntryPoint` if `негізгі` takes arguments or returns a value.
    pub fn new(decls: Vec<Decl>, out: W) -> EvalResult<Self> {
        let mut structs = StructTable::new();
        let mut functions = HashMap::new();
        let mut globals = Vec::new();

        for decl in decls {
            match decl {
                Decl::Struct(decl) => {
                    if structs.contains_key(&decl.name) {
                        return Err(RuntimeError::DuplicateStruct { name: decl.name,
                                                                   line: decl.line, });
                    }
                    structs.insert(decl.name.clone(), decl);
                },
                Decl::Func(decl) => {
                    if is_builtin(&decl.name) {
                        return Err(RuntimeError::BuiltinFunctionRedefinition { name: decl.name,
                                                                               line: decl.line, });
                    }
                    if functions.contains_key(&decl.name) {
                        return Err(RuntimeError::DuplicateFunction { name: decl.name,
                                                                     line: decl.line, });
                    }
                    functions.insert(decl.name.clone(), Rc::new(decl));
                },
                Decl::Var(decl) => globals.push(decl),
            }
        }
        log::debug!("loaded {} struct(s), {} function(s), {} global(s)",
                    structs.len(),
                    functions.len(),
                    globals.len());

        let entry: &Rc<FuncDecl> =
            functions.get(ENTRY_POINT)
                     .ok_or(RuntimeError::MissingEntryPoint { name: ENTRY_POINT })?;
        if !entry.args.is_empty() || !entry.return_type.is_void() {
            return Err(RuntimeError::InvalidEntryPoint { name: ENTRY_POINT,
                                                         line: entry.line, });
        }
        log::debug!("entry point '{ENTRY_POINT}' found on line {}", entry.line);

        Ok(Self { structs,
                  functions,
                  globals: globals.into(),
                  scopes: Scopes::new(),
                  started: false,
                  depth: 0,
                  out })
    }

    /// Runs the program: initializes the globals afresh, then calls the entry
    /// point.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a global initializer or by the
    /// program itself.
    pub fn run(&mut self) -> EvalResult<()> {
        self.init_globals()?;
        self.call(ENTRY_POINT, Vec::new())?;
        self.out.flush().map_err(|source| RuntimeError::Output { source, line: 0 })
    }

    /// Calls a user function or builtin by name with already evaluated
    /// arguments.
    ///
    /// Globals are initialized first if the program has not started yet.
    ///
    /// # Returns
    /// The returned value, or `None` for functions that return nothing.
    ///
    /// # Errors
    /// `UnknownFunction`, argument errors, and anything the callee raises.
    pub fn call(&mut self, name: &str, args: Vec<Value>) -> EvalResult<Option<Value>> {
        if !self.started {
            self.init_globals()?;
        }
        self.call_function(name, args, 0)
    }

    /// Returns the current value of a global variable.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.scopes.lookup(GLOBAL_SCOPE, name)
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the machine and returns the output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    fn init_globals(&mut self) -> EvalResult<()> {
        self.scopes = Scopes::new();
        self.started = true;
        self.depth = 0;

        let globals = Rc::clone(&self.globals);
        for decl in globals.iter() {
            self.declare_variable(decl, GLOBAL_SCOPE)?;
        }
        Ok(())
    }
}
