use std::{io::Write, rc::Rc};

use crate::{
    ast::{CallExpr, FuncDecl, VOID_TYPE},
    error::RuntimeError,
    interpreter::{
        machine::{
            builtin::call_builtin,
            core::{EvalResult, MAX_CALL_DEPTH, Machine, Signal},
            scope::{GLOBAL_SCOPE, ScopeId},
        },
        value::{core::Value, types::is_of_type},
    },
};

impl<W: Write> Machine<W> {
    /// Evaluates a call expression.
    ///
    /// Arguments are evaluated from left to right in `scope` before the
    /// callee is resolved.
    ///
    /// # Returns
    /// The callee's result; `None` for functions that return nothing.
    pub(crate) fn eval_call(&mut self, call: &CallExpr, scope: ScopeId) -> EvalResult<Option<Value>> {
        let args = call.args
                       .iter()
                       .map(|arg| self.eval(arg, scope))
                       .collect::<EvalResult<Vec<_>>>()?;

        self.call_function(&call.name, args, call.line)
    }

    /// Calls a function by name with evaluated arguments.
    ///
    /// User functions are looked up before builtins.
    ///
    /// # Errors
    /// `UnknownFunction` if `name` is neither, plus whatever the callee
    /// raises.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                args: Vec<Value>,
                                line: usize)
                                -> EvalResult<Option<Value>> {
        if let Some(func) = self.functions.get(name) {
            let func = Rc::clone(func);
            return self.call_user_function(&func, args, line);
        }

        call_builtin(&mut self.out, name, &args, line).unwrap_or_else(|| {
            Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                line })
        })
    }

    /// Invokes a user function.
    ///
    /// The arguments are bound positionally, as given, in a fresh scope whose
    /// parent is the global scope, and the body runs in that scope. The
    /// returned value is checked against the declared return type.
    ///
    /// Only the argument count is checked here, not the argument types. A
    /// mistyped argument fails where the body uses it, so `қос(2, "з")`
    /// reports an operand type mismatch inside `қос`.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` for the wrong number of arguments.
    /// - `CallStackExhausted` past [`MAX_CALL_DEPTH`] nested calls.
    /// - `ReturnTypeMismatch` if the returned value has the wrong type, or if
    ///   a function returning `ештеңе` returns a value.
    /// - `MissingReturnValue` if a function with a return type ends without
    ///   returning a value.
    fn call_user_function(&mut self,
                          func: &FuncDecl,
                          args: Vec<Value>,
                          line: usize)
                          -> EvalResult<Option<Value>> {
        if args.len() != func.args.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: func.name.clone(),
                                                             expected: func.args.len(),
                                                             found: args.len(),
                                                             line });
        }
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::CallStackExhausted { depth: MAX_CALL_DEPTH,
                                                          line });
        }

        log::trace!("calling '{}' from line {line} at depth {}", func.name, self.depth);

        let scope = self.scopes.push(GLOBAL_SCOPE, false);
        self.depth += 1;

        let result = self.run_body(func, args, scope);

        self.depth -= 1;
        self.scopes.truncate(scope);

        result
    }

    fn run_body(&mut self, func: &FuncDecl, args: Vec<Value>, scope: ScopeId) -> EvalResult<Option<Value>> {
        for (param, arg) in func.args.iter().zip(args) {
            self.scopes.declare(scope, &param.name, arg, func.line)?;
        }

        let returned = match self.exec_statements(&func.body, scope)? {
            Signal::Return(value) => value,
            Signal::Normal | Signal::Break | Signal::Continue => None,
        };

        match returned {
            None if func.return_type.is_void() => Ok(None),
            None => Err(RuntimeError::MissingReturnValue { name:     func.name.clone(),
                                                           expected: func.return_type.to_string(),
                                                           line:     func.line, }),
            Some(value) if func.return_type.is_void() => {
                Err(RuntimeError::ReturnTypeMismatch { name:     func.name.clone(),
                                                       expected: VOID_TYPE.to_string(),
                                                       found:    value.type_name(),
                                                       line:     func.line, })
            },
            Some(value) if !is_of_type(&value, &func.return_type) => {
                Err(RuntimeError::ReturnTypeMismatch { name:     func.name.clone(),
                                                       expected: func.return_type.to_string(),
                                                       found:    value.type_name(),
                                                       line:     func.line, })
            },
            Some(value) => Ok(Some(value)),
        }
    }
}
