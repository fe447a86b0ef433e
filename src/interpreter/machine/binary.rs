use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        machine::core::EvalResult,
        value::{core::Value, types::is_same_type},
    },
};

/// Evaluates a binary operation.
///
/// Both operands must have the same runtime type; the operation is then
/// dispatched on that type:
///
/// | Type         | Operators                                  |
/// |--------------|--------------------------------------------|
/// | `бүтін`      | arithmetic (checked), `%`, comparisons     |
/// | `бөлшек`     | arithmetic, `%`, comparisons               |
/// | `жол`        | `+` (concatenation), comparisons           |
/// | `логикалық`  | `==`, `!=`, `&&`, `\|\|`                   |
///
/// Arrays and structs support no operators. Both operands are always
/// evaluated before this is called, so `&&` and `||` do not short-circuit.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `OperandTypeMismatch` if the operand types differ.
/// - `UnsupportedOperator` if the type does not support `op`.
/// - `Overflow` / `DivisionByZero` for `бүтін` arithmetic.
///
/// # Example
/// ```
/// use qurt::{
///     ast::BinaryOperator,
///     interpreter::{machine::binary::eval_binary, value::core::Value},
/// };
///
/// let v = eval_binary(BinaryOperator::Add, Value::Int(2), Value::Int(3), 1).unwrap();
/// assert_eq!(v, Value::Int(5));
///
/// let v = eval_binary(BinaryOperator::Add, "сәлем ".into(), "әлем".into(), 1).unwrap();
/// assert_eq!(v, Value::from("сәлем әлем"));
///
/// assert!(eval_binary(BinaryOperator::Add, Value::Int(2), "з".into(), 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    if !is_same_type(&[&left, &right]) {
        return Err(RuntimeError::OperandTypeMismatch { op: op.to_string(),
                                                       left: left.type_name(),
                                                       right: right.type_name(),
                                                       line });
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => int_op(op, a, b, line),
        (Value::Float(a), Value::Float(b)) => float_op(op, a, b, line),
        (Value::String(a), Value::String(b)) => string_op(op, a, &b, line),
        (Value::Bool(a), Value::Bool(b)) => bool_op(op, a, b, line),
        (left, _) => Err(unsupported(op, &left, line)),
    }
}

fn int_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    let overflow = || RuntimeError::Overflow { op: op.to_string(),
                                               line };

    let result = match op {
        BinaryOperator::Add => a.checked_add(b).ok_or_else(overflow)?,
        BinaryOperator::Sub => a.checked_sub(b).ok_or_else(overflow)?,
        BinaryOperator::Mul => a.checked_mul(b).ok_or_else(overflow)?,
        BinaryOperator::Div | BinaryOperator::Mod => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            let result = if op == BinaryOperator::Div {
                a.checked_div(b)
            } else {
                a.checked_rem(b)
            };
            result.ok_or_else(overflow)?
        },
        _ => {
            return compare(op, a.cmp(&b)).map(Value::Bool)
                                         .ok_or_else(|| unsupported(op, &Value::Int(a), line));
        },
    };

    Ok(Value::Int(result))
}

fn float_op(op: BinaryOperator, a: f32, b: f32, line: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
        BinaryOperator::Mod => a % b,
        _ => {
            let result = match a.partial_cmp(&b) {
                Some(ordering) => compare(op, ordering),
                // NaN is unordered: only `!=` holds.
                None => compare(op, Ordering::Equal).map(|_| op == BinaryOperator::NotEqual),
            };
            return result.map(Value::Bool)
                         .ok_or_else(|| unsupported(op, &Value::Float(a), line));
        },
    };

    Ok(Value::Float(result))
}

fn string_op(op: BinaryOperator, mut a: String, b: &str, line: usize) -> EvalResult<Value> {
    if op == BinaryOperator::Add {
        a.push_str(b);
        return Ok(Value::String(a));
    }

    compare(op, a.as_str().cmp(b)).map(Value::Bool)
                                  .ok_or_else(|| unsupported(op, &Value::String(a), line))
}

fn bool_op(op: BinaryOperator, a: bool, b: bool, line: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Equal => a == b,
        BinaryOperator::NotEqual => a != b,
        BinaryOperator::And => a && b,
        BinaryOperator::Or => a || b,
        _ => return Err(unsupported(op, &Value::Bool(a), line)),
    };

    Ok(Value::Bool(result))
}

/// Applies a comparison operator to an ordering, or returns `None` if `op`
/// is not a comparison.
const fn compare(op: BinaryOperator, ordering: Ordering) -> Option<bool> {
    match op {
        BinaryOperator::Less => Some(ordering.is_lt()),
        BinaryOperator::Greater => Some(ordering.is_gt()),
        BinaryOperator::LessEqual => Some(ordering.is_le()),
        BinaryOperator::GreaterEqual => Some(ordering.is_ge()),
        BinaryOperator::Equal => Some(ordering.is_eq()),
        BinaryOperator::NotEqual => Some(ordering.is_ne()),
        _ => None,
    }
}

fn unsupported(op: BinaryOperator, value: &Value, line: usize) -> RuntimeError {
    RuntimeError::UnsupportedOperator { op: op.to_string(),
                                        ty: value.type_name(),
                                        line }
}
