//! The [`Value`] data model carried on edges and held in node state.

use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt;

/// An opaque unit of data flowing on an edge within one tick.
///
/// The same closed set of variants is used for node configuration
/// values, persistent state values, and edge payloads, so a value read
/// from an input port can be stored or re-emitted without conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer (counters, quantities).
    Int(i64),
    /// Floating-point measurement.
    Float(f64),
    /// Text token.
    Text(String),
    /// Ordered list of values (e.g., a depot's accumulated store).
    List(Vec<Value>),
}

impl Value {
    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The float payload, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The text payload, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// The list payload, if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

/// The sequence of values a port transmits in one tick.
///
/// Ports carry batches, not scalars: an empty batch is a null-op tick,
/// a longer batch carries several values at once. Inline capacity of 4
/// keeps typical single-value ticks off the heap.
pub type Batch = SmallVec<[Value; 4]>;

/// Ordered key/value mapping used for node configuration, node state,
/// and state patches.
///
/// `IndexMap` keeps iteration in insertion order, which keeps state
/// snapshots and patch application deterministic.
pub type ValueMap = IndexMap<String, Value>;
