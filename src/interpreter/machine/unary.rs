use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{machine::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: negation of `бүтін` and `бөлшек` values. Negating the smallest
///   `бүтін` overflows.
/// - `Not`: negation of `логикалық` values.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `UnsupportedOperator` for any other operand type, `Overflow` for `-i64::MIN`.
///
/// # Example
/// ```
/// use qurt::{
///     ast::UnaryOperator,
///     interpreter::{machine::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Int(5), 1).unwrap();
/// assert_eq!(v, Value::Int(-5));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// assert!(eval_unary(UnaryOperator::Not, &Value::Int(1), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Negate, Value::Int(n)) => {
            n.checked_neg()
             .map(Value::Int)
             .ok_or_else(|| RuntimeError::Overflow { op: op.to_string(),
                                                     line })
        },
        (UnaryOperator::Negate, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                     ty: value.type_name(),
                                                     line }),
    }
}
