use std::sync::Arc;

use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::f64_to_i64_truncated,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an HRL expression can produce. Values are
/// produced fresh by each evaluation and copied into the tables on
/// assignment; arrays share their storage through an `Arc` so copies are
/// cheap and can cross into threadloops.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Double(f64),
    /// A string.
    String(String),
    /// A boolean, produced by comparisons and logical operators.
    Boolean(bool),
    /// An array of integers.
    IntArray(Arc<Vec<i64>>),
    /// An array of doubles.
    DoubleArray(Arc<Vec<f64>>),
    /// An array of booleans.
    BoolArray(Arc<Vec<bool>>),
    /// An array of strings.
    StringArray(Arc<Vec<String>>),
    /// The no-value sentinel, yielded by blocks without `return` and by
    /// declarations. Never stored in a variable.
    Null,
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl Value {
    /// Name of the value's variant, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Boolean(_) => "bool",
            Self::IntArray(_) => "int array",
            Self::DoubleArray(_) => "double array",
            Self::BoolArray(_) => "bool array",
            Self::StringArray(_) => "string array",
            Self::Null => "no value",
        }
    }

    /// Default value for a declared type name.
    ///
    /// Used for `x : int;` declarations without an initializer and for struct
    /// fields. Unknown type names default to integer zero.
    ///
    /// # Example
    /// ```
    /// use hrl::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::default_for_type("string"), Value::String(String::new()));
    /// assert_eq!(Value::default_for_type("bool"), Value::Boolean(false));
    /// assert_eq!(Value::default_for_type("Point"), Value::Integer(0));
    /// ```
    #[must_use]
    pub fn default_for_type(type_name: &str) -> Self {
        match type_name {
            "double" | "float" => Self::Double(0.0),
            "string" | "str" => Self::String(String::new()),
            "bool" | "boolean" => Self::Boolean(false),
            _ => Self::Integer(0),
        }
    }

    /// Returns `true` for the no-value sentinel.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for strings.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Coerces a scalar to an integer.
    ///
    /// Integers pass through, doubles truncate toward zero, booleans become
    /// `0`/`1`. Strings, arrays and the no-value sentinel are type errors.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use hrl::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Double(-3.7).coerce_to_integer(1).unwrap(), -3);
    /// assert_eq!(Value::Boolean(true).coerce_to_integer(1).unwrap(), 1);
    /// assert!(Value::from("5").coerce_to_integer(1).is_err());
    /// ```
    pub fn coerce_to_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Double(d) => f64_to_i64_truncated(*d, line),
            Self::Boolean(b) => Ok(i64::from(*b)),
            other => Err(RuntimeError::TypeError { details: format!("cannot use {} as a number",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Coerces a scalar to its truthiness.
    ///
    /// Booleans pass through; integers and doubles are `true` when nonzero.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn coerce_to_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Integer(n) => Ok(*n != 0),
            Self::Double(d) => Ok(*d != 0.0),
            other => Err(RuntimeError::TypeError { details: format!("cannot use {} as a boolean",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Extracts a boolean without coercion.
    ///
    /// Used for `if` and `while` conditions, which must be booleans.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_condition(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => Err(RuntimeError::ExpectedBoolean { found: other.type_name().to_string(),
                                                         line }),
        }
    }

    /// Number of elements if the value is an array.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::IntArray(items) => Some(items.len()),
            Self::DoubleArray(items) => Some(items.len()),
            Self::BoolArray(items) => Some(items.len()),
            Self::StringArray(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Returns the element at `position` of an array value.
    ///
    /// The caller is responsible for bounds checking; see
    /// [`checked_index`](crate::util::num::checked_index).
    #[must_use]
    pub fn element(&self, position: usize) -> Option<Self> {
        match self {
            Self::IntArray(items) => items.get(position).copied().map(Self::Integer),
            Self::DoubleArray(items) => items.get(position).copied().map(Self::Double),
            Self::BoolArray(items) => items.get(position).copied().map(Self::Boolean),
            Self::StringArray(items) => items.get(position).cloned().map(Self::String),
            _ => None,
        }
    }

    /// Builds a homogeneous array from evaluated elements.
    ///
    /// The first element decides the array kind; every other element must be
    /// of the same variant. An empty list produces an empty integer array.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` for mixed element types and for
    /// elements that are themselves arrays or the no-value sentinel.
    ///
    /// # Example
    /// ```
    /// use hrl::interpreter::value::core::Value;
    ///
    /// let xs = Value::array_from(vec![1.into(), 2.into()], 1).unwrap();
    /// assert_eq!(xs.element(1), Some(Value::Integer(2)));
    ///
    /// assert!(Value::array_from(vec![1.into(), "a".into()], 1).is_err());
    /// ```
    pub fn array_from(elements: Vec<Self>, line: usize) -> EvalResult<Self> {
        let mismatch = |expected: &Self, found: &Self| {
            RuntimeError::TypeError { details: format!("array elements must share one type, \
                                                        found {} after {}",
                                                       found.type_name(),
                                                       expected.type_name()),
                                      line }
        };

        let Some(first) = elements.first().cloned() else {
            return Ok(Self::IntArray(Arc::new(Vec::new())));
        };

        match first {
            Self::Integer(_) => {
                elements.iter()
                        .map(|e| match e {
                            Self::Integer(n) => Ok(*n),
                            other => Err(mismatch(&first, other)),
                        })
                        .collect::<EvalResult<Vec<_>>>()
                        .map(|items| Self::IntArray(Arc::new(items)))
            },
            Self::Double(_) => {
                elements.iter()
                        .map(|e| match e {
                            Self::Double(d) => Ok(*d),
                            other => Err(mismatch(&first, other)),
                        })
                        .collect::<EvalResult<Vec<_>>>()
                        .map(|items| Self::DoubleArray(Arc::new(items)))
            },
            Self::Boolean(_) => {
                elements.iter()
                        .map(|e| match e {
                            Self::Boolean(b) => Ok(*b),
                            other => Err(mismatch(&first, other)),
                        })
                        .collect::<EvalResult<Vec<_>>>()
                        .map(|items| Self::BoolArray(Arc::new(items)))
            },
            Self::String(_) => {
                elements.into_iter()
                        .map(|e| match e {
                            Self::String(s) => Ok(s),
                            other => Err(mismatch(&first, &other)),
                        })
                        .collect::<EvalResult<Vec<_>>>()
                        .map(|items| Self::StringArray(Arc::new(items)))
            },
            other => {
                Err(RuntimeError::TypeError { details: format!("{} cannot be an array element",
                                                               other.type_name()),
                                              line })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Value::Integer(3).coerce_to_bool(1).unwrap());
        assert!(!Value::Double(0.0).coerce_to_bool(1).unwrap());
        assert!(Value::from("x").coerce_to_bool(1).is_err());
    }

    #[test]
    fn conditions_are_strict() {
        assert!(Value::Boolean(true).as_condition(1).unwrap());
        assert_eq!(Value::Integer(1).as_condition(4),
                   Err(RuntimeError::ExpectedBoolean { found: "int".to_string(),
                                                       line:  4, }));
    }

    #[test]
    fn arrays_are_homogeneous() {
        let strings = Value::array_from(vec!["a".into(), "b".into()], 1).unwrap();
        assert_eq!(strings.array_len(), Some(2));
        assert!(Value::array_from(vec![true.into(), 1.into()], 1).is_err());
        assert!(Value::array_from(vec![Value::Null], 1).is_err());
        assert_eq!(Value::array_from(Vec::new(), 1).unwrap().array_len(), Some(0));
    }
}
