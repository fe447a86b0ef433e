use std::io::Write;

use crate::{
    ast::{ElseBranch, IfStmt, Stmt, VarDecl},
    error::RuntimeError,
    interpreter::{
        machine::{
            core::{EvalResult, Machine, Signal},
            scope::ScopeId,
        },
        value::types::{is_of_type, zero_value},
    },
};

impl<W: Write> Machine<W> {
    /// Runs a block in a fresh child scope of `parent`.
    ///
    /// Bindings made inside the block disappear when it ends; assignments to
    /// enclosing bindings persist. The child inherits the parent's loop flag.
    pub(crate) fn exec_block(&mut self, statements: &[Stmt], parent: ScopeId) -> EvalResult<Signal> {
        let in_loop = self.scopes.in_loop(parent);
        let scope = self.scopes.push(parent, in_loop);

        let signal = self.exec_statements(statements, scope);
        self.scopes.truncate(scope);

        signal
    }

    /// Runs statements in `scope` until one of them produces a signal other
    /// than [`Signal::Normal`], which is returned unchanged.
    pub(crate) fn exec_statements(&mut self,
                                  statements: &[Stmt],
                                  scope: ScopeId)
                                  -> EvalResult<Signal> {
        for statement in statements {
            let signal = self.exec_statement(statement, scope)?;
            if !matches!(signal, Signal::Normal) {
                return Ok(signal);
            }
        }
        Ok(Signal::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// - `Signal::Return` for `қайтар`, carrying the evaluated value.
    /// - `Signal::Break` / `Signal::Continue` for `тоқта` / `өткіз`.
    /// - Whatever a nested `егер` or `қайтала` propagates.
    /// - `Signal::Normal` otherwise.
    ///
    /// # Errors
    /// `BreakOutsideLoop` / `ContinueOutsideLoop` when `scope` is not inside a
    /// loop body, and any error raised by the statement's expressions.
    pub(crate) fn exec_statement(&mut self, statement: &Stmt, scope: ScopeId) -> EvalResult<Signal> {
        match statement {
            Stmt::Var(decl) => {
                self.declare_variable(decl, scope)?;
                Ok(Signal::Normal)
            },
            Stmt::Assign(assign) => {
                self.assign(assign, scope)?;
                Ok(Signal::Normal)
            },
            Stmt::Call(call) => {
                self.eval_call(call, scope)?;
                Ok(Signal::Normal)
            },
            Stmt::If(stmt) => self.exec_if(stmt, scope),
            Stmt::For(stmt) => self.exec_for(stmt, scope),
            Stmt::Return { value, .. } => {
                let value = value.as_ref().map(|expr| self.eval(expr, scope)).transpose()?;
                Ok(Signal::Return(value))
            },
            Stmt::Break { line } => {
                if !self.scopes.in_loop(scope) {
                    return Err(RuntimeError::BreakOutsideLoop { line: *line });
                }
                Ok(Signal::Break)
            },
            Stmt::Continue { line } => {
                if !self.scopes.in_loop(scope) {
                    return Err(RuntimeError::ContinueOutsideLoop { line: *line });
                }
                Ok(Signal::Continue)
            },
        }
    }

    /// Evaluates the condition and runs the matching branch in its own scope.
    fn exec_if(&mut self, stmt: &IfStmt, scope: ScopeId) -> EvalResult<Signal> {
        if self.eval(&stmt.cond, scope)?.as_condition(stmt.line)? {
            return self.exec_block(&stmt.then_block, scope);
        }

        match &stmt.else_branch {
            None => Ok(Signal::Normal),
            Some(ElseBranch::If(stmt)) => self.exec_if(stmt, scope),
            Some(ElseBranch::Block(block)) => self.exec_block(block, scope),
        }
    }

    /// Binds a declared variable in `scope`.
    ///
    /// Without an initializer the variable starts at the zero value of its
    /// type; with one, the value must match the declared type.
    ///
    /// # Errors
    /// - `DeclarationTypeMismatch` if the initializer has another type.
    /// - `VariableExists` if `scope` already binds the name.
    /// - Errors from building the zero value or evaluating the initializer.
    pub(crate) fn declare_variable(&mut self, decl: &VarDecl, scope: ScopeId) -> EvalResult<()> {
        let value = match &decl.value {
            Some(expr) => {
                let value = self.eval(expr, scope)?;
                if !is_of_type(&value, &decl.ty) {
                    return Err(RuntimeError::DeclarationTypeMismatch { name:     decl.name.clone(),
                                                                       expected: decl.ty
                                                                                     .to_string(),
                                                                       found:    value.type_name(),
                                                                       line:     decl.line, });
                }
                value
            },
            None => zero_value(&decl.ty, &self.structs, decl.line)?,
        };

        self.scopes.declare(scope, &decl.name, value, decl.line)
    }
}
