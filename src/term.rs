//! Values exchanged with the calling interpreter

use crate::keys::KeyMaterial;
use std::fmt;
use std::sync::Arc;

/// A single argument or result value
///
/// Keys travel behind an `Arc` so the same key object can be handed to many
/// cipher calls (and threads) without copying secret material.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(String),
    Bytes(Vec<u8>),
    Key(Arc<KeyMaterial>),
}

impl Term {
    /// Short type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Term::Bool(_) => "bool",
            Term::Int(_) => "int",
            Term::Long(_) => "long",
            Term::Float(_) => "float",
            Term::Double(_) => "double",
            Term::Text(_) => "text",
            Term::Bytes(_) => "bytes",
            Term::Key(_) => "key",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&KeyMaterial> {
        match self {
            Term::Key(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Bool(v) => write!(f, "{v}"),
            Term::Int(v) => write!(f, "{v}"),
            Term::Long(v) => write!(f, "{v}"),
            Term::Float(v) => write!(f, "{v}"),
            Term::Double(v) => write!(f, "{v}"),
            Term::Text(v) => f.write_str(v),
            Term::Bytes(v) => f.write_str(&hex::encode(v)),
            Term::Key(key) => write!(f, "<{key}>"),
        }
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Bool(value)
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Int(value)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Long(value)
    }
}

impl From<f32> for Term {
    fn from(value: f32) -> Self {
        Term::Float(value)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Double(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Text(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Text(value)
    }
}

impl From<Vec<u8>> for Term {
    fn from(value: Vec<u8>) -> Self {
        Term::Bytes(value)
    }
}

impl From<KeyMaterial> for Term {
    fn from(value: KeyMaterial) -> Self {
        Term::Key(Arc::new(value))
    }
}

impl From<Arc<KeyMaterial>> for Term {
    fn from(value: Arc<KeyMaterial>) -> Self {
        Term::Key(value)
    }
}
