use std::collections::HashMap;

use crate::{
    ast::{Kind, StructDecl, TypeDesc},
    error::RuntimeError,
    interpreter::{
        machine::core::EvalResult,
        value::core::{StructValue, Value},
    },
};

/// Declared structs by name.
pub type StructTable = HashMap<String, StructDecl>;

/// Builds the zero value of a declared type.
///
/// Scalars start at `0`, `0.0`, `""` and `жоқ`. Arrays hold `N` zero values of
/// their element type, and structs hold the zero value of every declared
/// field, built recursively from the struct table.
///
/// # Parameters
/// - `ty`: The declared type.
/// - `structs`: Declared structs, for resolving struct kinds.
/// - `line`: Source code line number for error reporting.
///
/// # Returns
/// - `Ok(Value)`: The zero value.
/// - `Err(RuntimeError::UnknownStruct)`: A struct name does not resolve.
/// - `Err(RuntimeError::RecursiveStruct)`: A struct contains itself.
/// - `Err(RuntimeError::VoidValue)`: The type is `ештеңе`.
///
/// # Example
/// ```
/// use qurt::{
///     ast::{Kind, TypeDesc},
///     interpreter::value::{
///         core::Value,
///         types::{StructTable, zero_value},
///     },
/// };
///
/// let ty = TypeDesc { kind:      Kind::Int,
///                     array_len: Some(3), };
/// let zero = zero_value(&ty, &StructTable::new(), 1).unwrap();
///
/// assert_eq!(zero, Value::from(vec![Value::Int(0), Value::Int(0), Value::Int(0)]));
/// ```
pub fn zero_value(ty: &TypeDesc, structs: &StructTable, line: usize) -> EvalResult<Value> {
    build_zero(ty, structs, &mut Vec::new(), line)
}

fn build_zero<'a>(ty: &TypeDesc,
                  structs: &'a StructTable,
                  building: &mut Vec<&'a str>,
                  line: usize)
                  -> EvalResult<Value> {
    if let Some(len) = ty.array_len {
        let element = ty.element();
        return (0..len).map(|_| build_zero(&element, structs, building, line))
                       .collect::<EvalResult<Vec<_>>>()
                       .map(Value::Array);
    }

    match &ty.kind {
        Kind::Void => Err(RuntimeError::VoidValue { line }),
        Kind::Int => Ok(Value::Int(0)),
        Kind::Float => Ok(Value::Float(0.0)),
        Kind::String => Ok(Value::String(String::new())),
        Kind::Bool => Ok(Value::Bool(false)),
        Kind::Struct(name) => {
            let (name, decl) =
                structs.get_key_value(name)
                       .ok_or_else(|| RuntimeError::UnknownStruct { name: name.clone(),
                                                                    line })?;
            if building.contains(&name.as_str()) {
                return Err(RuntimeError::RecursiveStruct { name: name.clone(),
                                                           line });
            }

            building.push(name);
            let fields = decl.fields
                             .iter()
                             .map(|field| {
                                 Ok((field.name.clone(),
                                     build_zero(&field.ty, structs, building, line)?))
                             })
                             .collect::<EvalResult<Vec<_>>>();
            building.pop();

            Ok(Value::Struct(StructValue { name: name.clone(),
                                           fields: fields? }))
        },
    }
}

/// Checks a value against a declared type.
///
/// Scalars match by kind. An array matches only an array type of the same
/// length whose element type every element matches. A struct matches only the
/// struct type of the same name.
///
/// # Example
/// ```
/// use qurt::{
///     ast::{Kind, TypeDesc},
///     interpreter::value::{core::Value, types::is_of_type},
/// };
///
/// let pair = TypeDesc { kind:      Kind::Int,
///                       array_len: Some(2), };
///
/// assert!(is_of_type(&Value::from(vec![Value::Int(1), Value::Int(2)]), &pair));
/// assert!(!is_of_type(&Value::from(vec![Value::Int(1)]), &pair));
/// ```
#[must_use]
pub fn is_of_type(value: &Value, ty: &TypeDesc) -> bool {
    match (value, ty.array_len) {
        (Value::Array(elements), Some(len)) => {
            let element = ty.element();
            elements.len() == len && elements.iter().all(|value| is_of_type(value, &element))
        },
        (Value::Array(_), None) | (_, Some(_)) => false,
        (Value::Int(_), None) => ty.kind == Kind::Int,
        (Value::Float(_), None) => ty.kind == Kind::Float,
        (Value::String(_), None) => ty.kind == Kind::String,
        (Value::Bool(_), None) => ty.kind == Kind::Bool,
        (Value::Struct(value), None) => {
            matches!(&ty.kind, Kind::Struct(name) if *name == value.name)
        },
    }
}

/// Returns `true` if every value has the same top-level variant.
///
/// This is the check guarding operators. It does not look inside arrays or
/// structs.
#[must_use]
pub fn is_same_type(values: &[&Value]) -> bool {
    values.windows(2)
          .all(|pair| std::mem::discriminant(pair[0]) == std::mem::discriminant(pair[1]))
}

/// Returns `true` if `new` can replace `old` in storage: same variant, arrays
/// of equal length with elements of the same shape, structs of the same name.
#[must_use]
pub fn same_shape(old: &Value, new: &Value) -> bool {
    match (old, new) {
        (Value::Array(old), Value::Array(new)) => {
            old.len() == new.len() && old.iter().zip(new).all(|(old, new)| same_shape(old, new))
        },
        (Value::Struct(old), Value::Struct(new)) => old.name == new.name,
        _ => is_same_type(&[old, new]),
    }
}
