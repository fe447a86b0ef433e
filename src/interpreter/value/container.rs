use crate::{
    error::RuntimeError,
    interpreter::{
        machine::core::EvalResult,
        value::{core::Value, types::same_shape},
    },
};

impl Value {
    /// Returns the element at `index` of an array value.
    ///
    /// # Errors
    /// - `ExpectedArray` if `self` is not an array.
    /// - `InvalidIndex` if `index` is not an integer.
    /// - `IndexOutOfBounds` if `index` is negative or past the end.
    pub fn element(&self, index: &Self, line: usize) -> EvalResult<&Self> {
        let Self::Array(elements) = self else {
            return Err(RuntimeError::ExpectedArray { found: self.type_name(),
                                                     line });
        };
        let i = checked_index(index, elements.len(), line)?;

        Ok(&elements[i])
    }

    /// Mutable counterpart of [`Value::element`], used to reach nested
    /// assignment targets.
    ///
    /// # Errors
    /// Same as [`Value::element`].
    pub fn element_mut(&mut self, index: &Self, line: usize) -> EvalResult<&mut Self> {
        let found = self.type_name();
        let Self::Array(elements) = self else {
            return Err(RuntimeError::ExpectedArray { found, line });
        };
        let i = checked_index(index, elements.len(), line)?;

        Ok(&mut elements[i])
    }

    /// Returns the field `name` of a struct value.
    ///
    /// # Errors
    /// - `ExpectedStruct` if `self` is not a struct.
    /// - `UnknownField` if the struct has no such field.
    pub fn field(&self, name: &str, line: usize) -> EvalResult<&Self> {
        let Self::Struct(value) = self else {
            return Err(RuntimeError::ExpectedStruct { found: self.type_name(),
                                                      line });
        };

        value.fields
             .iter()
             .find_map(|(field, value)| (field.as_str() == name).then_some(value))
             .ok_or_else(|| RuntimeError::UnknownField { struct_name: value.name.clone(),
                                                         field: name.to_string(),
                                                         line })
    }

    /// Mutable counterpart of [`Value::field`], used to reach nested
    /// assignment targets.
    ///
    /// # Errors
    /// Same as [`Value::field`].
    pub fn field_mut(&mut self, name: &str, line: usize) -> EvalResult<&mut Self> {
        let found = self.type_name();
        let Self::Struct(value) = self else {
            return Err(RuntimeError::ExpectedStruct { found, line });
        };

        let struct_name = value.name.clone();
        value.fields
             .iter_mut()
             .find_map(|(field, value)| (field.as_str() == name).then_some(value))
             .ok_or_else(|| RuntimeError::UnknownField { struct_name,
                                                         field: name.to_string(),
                                                         line })
    }

    /// Replaces an array element, keeping the array's element type.
    ///
    /// # Errors
    /// The errors of [`Value::element`], or `AssignmentTypeMismatch` if the new
    /// value does not have the shape of the element it replaces.
    pub fn set_element(&mut self, index: &Self, value: Self, line: usize) -> EvalResult<()> {
        self.element_mut(index, line)?.replace_with(value, line)
    }

    /// Replaces a struct field, keeping the field's type.
    ///
    /// # Errors
    /// The errors of [`Value::field`], or `AssignmentTypeMismatch` if the new
    /// value does not have the shape of the field it replaces.
    pub fn set_field(&mut self, name: &str, value: Self, line: usize) -> EvalResult<()> {
        self.field_mut(name, line)?.replace_with(value, line)
    }

    /// Overwrites `self` with `value` if it has the same shape.
    ///
    /// # Errors
    /// `AssignmentTypeMismatch` if the shapes differ.
    pub fn replace_with(&mut self, value: Self, line: usize) -> EvalResult<()> {
        if !same_shape(self, &value) {
            return Err(RuntimeError::AssignmentTypeMismatch { expected: self.type_name(),
                                                              found: value.type_name(),
                                                              line });
        }
        *self = value;

        Ok(())
    }
}

fn checked_index(index: &Value, len: usize, line: usize) -> EvalResult<usize> {
    let Value::Int(index) = *index else {
        return Err(RuntimeError::InvalidIndex { found: index.type_name(),
                                                line });
    };

    usize::try_from(index).ok()
                          .filter(|&i| i < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { index, len, line })
}
