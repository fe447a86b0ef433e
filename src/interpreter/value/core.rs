use crate::{
    ast::{BOOL_TYPE, FLOAT_TYPE, INT_TYPE, LiteralValue, STRING_TYPE},
    error::RuntimeError,
    interpreter::machine::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the values a program can compute, bind, pass and
/// return. Arrays and structs are owned by the binding that holds them:
/// assigning one copies it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 32-bit float.
    Float(f32),
    /// A string.
    String(String),
    /// A boolean value, `иә` or `жоқ`.
    /// Produced by comparison and logical operators and required by `егер`
    /// and `қайтала` conditions.
    Bool(bool),
    /// A fixed-length array.
    Array(Vec<Self>),
    /// An instance of a user struct.
    Struct(StructValue),
}

/// An instance of a declared struct.
///
/// The field set is fixed when the value is built from its declaration; only
/// the field values change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    /// The struct's declared name.
    pub name:   String,
    /// Field names and values, in declaration order.
    pub fields: Vec<(String, Value)>,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Int(n) => Self::Int(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::String(s) => Self::String(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Returns the name of the value's type, as it would be written in a
    /// declaration.
    ///
    /// # Example
    /// ```
    /// use qurt::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Int(1).type_name(), "бүтін");
    /// assert_eq!(Value::from(vec![Value::Bool(true), Value::Bool(false)]).type_name(),
    ///            "[2]логикалық");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Int(_) => INT_TYPE.to_string(),
            Self::Float(_) => FLOAT_TYPE.to_string(),
            Self::String(_) => STRING_TYPE.to_string(),
            Self::Bool(_) => BOOL_TYPE.to_string(),
            Self::Array(elements) => {
                let element = elements.first().map(Self::type_name).unwrap_or_default();
                format!("[{}]{element}", elements.len())
            },
            Self::Struct(value) => value.name.clone(),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the conditions of `егер` and `қайтала`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::NonBooleanCondition)`: If not boolean.
    pub fn as_condition(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::NonBooleanCondition { found: self.type_name(),
                                                         line }),
        }
    }
}

impl std::fmt::Display for Value {
    /// Formats values the way `жаз` prints them.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Bool(true) => f.write_str("иә"),
            Self::Bool(false) => f.write_str("жоқ"),
            Self::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            },
            Self::Struct(value) => {
                write!(f, "{}{{", value.name)?;
                for (i, (name, field)) in value.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {field}")?;
                }
                f.write_str("}")
            },
        }
    }
}
