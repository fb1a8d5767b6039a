// dynamic values + error taxonomy
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value passed through a call site. Serialized untagged so a named
/// mapping renders as plain JSON, e.g. `{"e":5,"f":6,"g":7}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    //only numeric values take part in the minimum computation
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) | Value::Bool(_) => None,
        }
    }

    pub fn is_comparable(&self) -> bool {
        self.as_number().is_some()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

#[derive(Debug, Error)]
pub enum CallError {
    //no required value was supplied, by position or by name
    #[error("missing required argument")]
    MissingRequiredArgument,

    //the minimum computation needs at least two comparable values
    #[error("minimum needs at least two comparable values, got {comparable}")]
    InvalidArgumentCount { comparable: usize },

    #[error("failed to render named mapping: {0}")]
    RenderNamedMapping(#[from] serde_json::Error),
}
