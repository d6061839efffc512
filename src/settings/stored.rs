//! The storable value representation.
//!
//! [`Stored`] is the closed set of shapes a settings store can hold. Typed
//! values cross into and out of this representation through the codec traits
//! in [`convert`](super::convert); the store itself only ever sees `Stored`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A value in its storable representation.
///
/// ## The nine shapes
///
/// 1. `String` - UTF-8 text
/// 2. `Int` - 64-bit signed integer
/// 3. `UInt` - 64-bit unsigned integer
/// 4. `Float` - 64-bit IEEE-754 floating point
/// 5. `Bool` - boolean
/// 6. `Timestamp` - UTC timestamp
/// 7. `Bytes` - opaque binary blob (distinct from `String`)
/// 8. `Array` - homogeneous-by-convention sequence of stored values
/// 9. `Map` - string-keyed map of stored values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stored {
    /// UTF-8 text.
    String(String),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit unsigned integer.
    UInt(u64),
    /// 64-bit IEEE-754 floating point.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// Opaque binary blob. Not equivalent to `String`.
    Bytes(Vec<u8>),
    /// Sequence of stored values.
    Array(Vec<Stored>),
    /// String-keyed map of stored values.
    Map(HashMap<String, Stored>),
}

impl Stored {
    /// The shape name, for log and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Stored::String(_) => "String",
            Stored::Int(_) => "Int",
            Stored::UInt(_) => "UInt",
            Stored::Float(_) => "Float",
            Stored::Bool(_) => "Bool",
            Stored::Timestamp(_) => "Timestamp",
            Stored::Bytes(_) => "Bytes",
            Stored::Array(_) => "Array",
            Stored::Map(_) => "Map",
        }
    }

    /// Try to view as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Stored::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Stored::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to view as a timestamp.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Stored::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to view as a bytes slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Stored::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to view as an array slice.
    pub fn as_array(&self) -> Option<&[Stored]> {
        match self {
            Stored::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to view as a map reference.
    pub fn as_map(&self) -> Option<&HashMap<String, Stored>> {
        match self {
            Stored::Map(m) => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_cover_every_shape() {
        assert_eq!(Stored::String("x".into()).type_name(), "String");
        assert_eq!(Stored::Int(-1).type_name(), "Int");
        assert_eq!(Stored::UInt(1).type_name(), "UInt");
        assert_eq!(Stored::Float(0.5).type_name(), "Float");
        assert_eq!(Stored::Bool(true).type_name(), "Bool");
        assert_eq!(Stored::Timestamp(Utc::now()).type_name(), "Timestamp");
        assert_eq!(Stored::Bytes(vec![0]).type_name(), "Bytes");
        assert_eq!(Stored::Array(vec![]).type_name(), "Array");
        assert_eq!(Stored::Map(HashMap::new()).type_name(), "Map");
    }

    #[test]
    fn accessors_reject_other_shapes() {
        let text = Stored::String("abc".into());
        assert_eq!(text.as_str(), Some("abc"));
        assert_eq!(text.as_bool(), None);
        assert_eq!(text.as_bytes(), None);

        // Bytes and String stay distinct shapes.
        let blob = Stored::Bytes(vec![97, 98, 99]);
        assert_eq!(blob.as_str(), None);
        assert_eq!(blob.as_bytes(), Some(&[97u8, 98, 99][..]));
    }
}
