use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single scalar value stored in a table cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Convenience constructor for text cells
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Empty, blank text, `false`, zero or NaN
    pub fn is_falsy(&self) -> bool {
        match self {
            Cell::Bool(b) => !b,
            Cell::Integer(i) => *i == 0,
            Cell::Float(x) => *x == 0.0 || x.is_nan(),
            _ => self.is_empty(),
        }
    }
}

impl From<Value> for Cell {
    /// Arrays and objects are kept as their compact JSON text
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            Value::Bool(b) => Cell::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Cell::Integer(i),
                None => Cell::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Cell::Text(s),
            other @ (Value::Array(_) | Value::Object(_)) => Cell::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}
