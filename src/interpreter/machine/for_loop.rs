use std::io::Write;

use crate::{
    ast::ForStmt,
    interpreter::machine::{
        core::{EvalResult, Machine, Signal},
        scope::ScopeId,
    },
};

impl<W: Write> Machine<W> {
    /// Executes a `қайтала` loop.
    ///
    /// The loop gets its own scope, marked as a loop body, holding the
    /// initializer's variable. Each iteration then:
    ///
    /// 1. evaluates the condition, which must be a boolean, and stops when it
    ///    is `жоқ`;
    /// 2. runs the body in a fresh child scope;
    /// 3. stops on `тоқта` without running the post-step, and propagates
    ///    `қайтар` immediately;
    /// 4. runs the post-step, also after `өткіз`.
    ///
    /// # Parameters
    /// - `stmt`: The loop.
    /// - `parent`: The scope the loop appears in.
    ///
    /// # Returns
    /// `Signal::Return` if the body returned, `Signal::Normal` otherwise.
    pub(crate) fn exec_for(&mut self, stmt: &ForStmt, parent: ScopeId) -> EvalResult<Signal> {
        let scope = self.scopes.push(parent, true);

        let signal = self.run_loop(stmt, scope);
        self.scopes.truncate(scope);

        signal
    }

    fn run_loop(&mut self, stmt: &ForStmt, scope: ScopeId) -> EvalResult<Signal> {
        self.declare_variable(&stmt.init, scope)?;

        while self.eval(&stmt.cond, scope)?.as_condition(stmt.line)? {
            match self.exec_block(&stmt.body, scope)? {
                Signal::Break => break,
                Signal::Return(value) => return Ok(Signal::Return(value)),
                Signal::Normal | Signal::Continue => {},
            }
            self.assign(&stmt.post, scope)?;
        }

        Ok(Signal::Normal)
    }
}
