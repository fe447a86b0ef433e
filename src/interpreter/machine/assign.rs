use std::io::Write;

use crate::{
    ast::{AssignStmt, Expr},
    error::RuntimeError,
    interpreter::{
        machine::{
            core::{EvalResult, Machine},
            scope::ScopeId,
        },
        value::core::Value,
    },
};

/// One step from a variable to the location being assigned.
enum Step<'a> {
    Field(&'a str),
    Index(Value),
}

impl<W: Write> Machine<W> {
    /// Executes an assignment.
    ///
    /// The value is evaluated first, then the target's index expressions from
    /// left to right. The location is reached from the nearest binding of the
    /// target's root name and overwritten only if the new value has the shape
    /// of the old one.
    ///
    /// # Errors
    /// - `UnknownVariable` if the root name is not bound.
    /// - `InvalidAssignmentTarget` if the target is not a name, field or
    ///   element.
    /// - `AssignmentTypeMismatch` if the value does not fit the location.
    /// - Field and index errors while walking to the location.
    pub(crate) fn assign(&mut self, stmt: &AssignStmt, scope: ScopeId) -> EvalResult<()> {
        let value = self.eval(&stmt.value, scope)?;

        let mut steps = Vec::new();
        let (root, line) = self.target_path(&stmt.target, scope, &mut steps)?;

        let mut slot =
            self.scopes
                .lookup_mut(scope, root)
                .ok_or_else(|| RuntimeError::UnknownVariable { name: root.to_string(),
                                                               line })?;

        let Some((last, path)) = steps.split_last() else {
            return slot.replace_with(value, stmt.line);
        };
        for step in path {
            slot = match step {
                Step::Field(name) => slot.field_mut(name, stmt.line)?,
                Step::Index(index) => slot.element_mut(index, stmt.line)?,
            };
        }

        match last {
            Step::Field(name) => slot.set_field(name, value, stmt.line),
            Step::Index(index) => slot.set_element(index, value, stmt.line),
        }
    }

    /// Flattens a target expression into its root name and the steps below
    /// it, evaluating index expressions on the way.
    fn target_path<'a>(&mut self,
                       target: &'a Expr,
                       scope: ScopeId,
                       steps: &mut Vec<Step<'a>>)
                       -> EvalResult<(&'a str, usize)> {
        match target {
            Expr::Name { name, line } => Ok((name, *line)),
            Expr::Selector { expr, field, .. } => {
                let root = self.target_path(expr, scope, steps)?;
                steps.push(Step::Field(field));
                Ok(root)
            },
            Expr::Index { array, index, .. } => {
                let root = self.target_path(array, scope, steps)?;
                steps.push(Step::Index(self.eval(index, scope)?));
                Ok(root)
            },
            other => Err(RuntimeError::InvalidAssignmentTarget { line: other.line_number() }),
        }
    }
}
