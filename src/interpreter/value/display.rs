use std::fmt::{self, Display};

use crate::{interpreter::value::core::Value, util::format::format_double};

/// Writes `items` as `[a, b, c]` using `show` for each element.
fn write_list<T>(f: &mut fmt::Formatter<'_>,
                 items: &[T],
                 show: impl Fn(&T) -> String)
                 -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", show(item))?;
    }
    write!(f, "]")
}

impl Display for Value {
    /// Canonical text form: integers in decimal, doubles as `%g`, strings
    /// as is, booleans as `1`/`0`, arrays as bracketed lists.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Double(d) => write!(f, "{}", format_double(*d)),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{}", u8::from(*b)),
            Self::IntArray(items) => write_list(f, items.as_slice(), ToString::to_string),
            Self::DoubleArray(items) => write_list(f, items.as_slice(), |d| format_double(*d)),
            Self::BoolArray(items) => write_list(f, items.as_slice(), |b| u8::from(*b).to_string()),
            Self::StringArray(items) => write_list(f, items.as_slice(), Clone::clone),
            Self::Null => Ok(()),
        }
    }
}

impl Value {
    /// Text form used by the `..` operator.
    ///
    /// Identical to the `Display` form except for doubles, which are written
    /// with six fixed decimals instead of `%g`.
    ///
    /// # Example
    /// ```
    /// use hrl::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Double(2.5).concat_text(), "2.500000");
    /// assert_eq!(Value::Double(2.5).to_string(), "2.5");
    /// assert_eq!(Value::Boolean(true).concat_text(), "1");
    /// ```
    #[must_use]
    pub fn concat_text(&self) -> String {
        match self {
            Self::Double(d) => format!("{d:.6}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Double(2.5).to_string(), "2.5");
        assert_eq!(Value::Boolean(true).to_string(), "1");
        assert_eq!(Value::Boolean(false).to_string(), "0");
        assert_eq!(Value::from("hi").to_string(), "hi");
    }

    #[test]
    fn arrays() {
        assert_eq!(Value::IntArray(Arc::new(vec![1, 2])).to_string(), "[1, 2]");
        assert_eq!(Value::BoolArray(Arc::new(vec![true, false])).to_string(), "[1, 0]");
        assert_eq!(Value::StringArray(Arc::new(vec!["a".into()])).to_string(), "[a]");
    }

    #[test]
    fn concatenation_uses_fixed_decimals() {
        assert_eq!(Value::Double(-0.125).concat_text(), "-0.125000");
        assert_eq!(Value::Double(1_234_567.0).concat_text(), "1234567.000000");
        assert_eq!(Value::Integer(42).concat_text(), "42");
        assert_eq!(Value::from("x").concat_text(), "x");
    }
}
