use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        machine::{
            binary::eval_binary,
            core::{EvalResult, Machine},
            scope::ScopeId,
            unary::eval_unary,
        },
        value::{core::Value, types::same_shape},
    },
};

impl<W: Write> Machine<W> {
    /// Evaluates an expression in `scope`.
    ///
    /// Operands are evaluated from left to right. Names resolve to a copy of
    /// their nearest binding, so mutating the result never affects the
    /// variable.
    ///
    /// # Errors
    /// - `UnknownVariable` for unbound names.
    /// - `NoValue` if a call used as a value returns nothing.
    /// - `MixedArrayElements` if array literal elements differ in type.
    /// - Operator, field and index errors.
    pub(crate) fn eval(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Name { name, line } => {
                self.scopes
                    .lookup(scope, name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::Array { elements, line } => self.eval_array(elements, scope, *line),
            Expr::Call(call) => {
                self.eval_call(call, scope)?
                    .ok_or_else(|| RuntimeError::NoValue { name: call.name.clone(),
                                                           line: call.line, })
            },
            Expr::Selector { expr, field, line } => self.eval(expr, scope)?.field(field, *line).cloned(),
            Expr::Index { array, index, line } => {
                let array = self.eval(array, scope)?;
                let index = self.eval(index, scope)?;
                array.element(&index, *line).cloned()
            },
            Expr::Unary { op, expr, line } => {
                let value = self.eval(expr, scope)?;
                eval_unary(*op, &value, *line)
            },
            Expr::Binary { left, op, right, line } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                eval_binary(*op, left, right, *line)
            },
        }
    }

    fn eval_array(&mut self, elements: &[Expr], scope: ScopeId, line: usize) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element, scope))
                             .collect::<EvalResult<Vec<_>>>()?;

        if let Some(first) = values.first()
           && let Some(odd) = values.iter().find(|value| !same_shape(first, value))
        {
            return Err(RuntimeError::MixedArrayElements { expected: first.type_name(),
                                                          found: odd.type_name(),
                                                          line });
        }

        Ok(Value::Array(values))
    }
}
