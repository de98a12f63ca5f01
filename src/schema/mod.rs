//! Declarative shapes for the static content documents.
//!
//! Every document under `data/` is checked against a [`Shape`] before it is
//! decoded into typed records, so a malformed document is reported with the
//! exact path that broke (e.g. `courses[2].name.de`) instead of a generic
//! decode failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use learning_content::schema::{validate, Shape};
//!
//! let shape = Shape::array_of(Shape::record([("id", Shape::String), ("grade", Shape::Count)]));
//! validate(&value, &shape)?;
//! ```

mod validator;

pub use validator::{validate, validate_named, ValidationError};

use std::fmt;

/// Expected shape of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    String,
    /// A whole number (rejects `1.5`).
    Integer,
    /// A whole number in `0..=u32::MAX` (counts, grades, ordinals).
    Count,
    Bool,
    /// A string restricted to a closed set of values.
    OneOf(&'static [&'static str]),
    /// An object with one string per supported locale.
    Localized,
    /// An object with the listed fields; unknown fields are ignored.
    Record(Vec<Field>),
    /// An array whose elements all match the inner shape.
    Array(Box<Shape>),
    /// An object with arbitrary keys whose values all match the inner shape.
    Map(Box<Shape>),
    /// A page copy tree: an object whose values are either `Localized` leaves
    /// or nested copy trees. An object holding any locale key is a leaf.
    Copy,
}

/// A named field of a [`Shape::Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

impl Shape {
    pub fn record<I>(fields: I) -> Shape
    where
        I: IntoIterator<Item = (&'static str, Shape)>,
    {
        Shape::Record(
            fields
                .into_iter()
                .map(|(name, shape)| Field { name, shape })
                .collect(),
        )
    }

    pub fn array_of(shape: Shape) -> Shape {
        Shape::Array(Box::new(shape))
    }

    pub fn map_of(shape: Shape) -> Shape {
        Shape::Map(Box::new(shape))
    }

    /// The kind of JSON value this shape expects at its root.
    pub fn kind(&self) -> Kind {
        match self {
            Shape::String | Shape::OneOf(_) => Kind::String,
            Shape::Integer | Shape::Count => Kind::Integer,
            Shape::Bool => Kind::Boolean,
            Shape::Localized | Shape::Record(_) | Shape::Map(_) | Shape::Copy => Kind::Object,
            Shape::Array(_) => Kind::Array,
        }
    }
}

/// Primitive kind of a JSON value, used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl Kind {
    pub fn of(value: &serde_json::Value) -> Kind {
        use serde_json::Value;

        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Kind::Integer,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Null => "null",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of_values() {
        assert_eq!(Kind::of(&json!(null)), Kind::Null);
        assert_eq!(Kind::of(&json!(true)), Kind::Boolean);
        assert_eq!(Kind::of(&json!(3)), Kind::Integer);
        assert_eq!(Kind::of(&json!(-3)), Kind::Integer);
        assert_eq!(Kind::of(&json!(1.5)), Kind::Number);
        assert_eq!(Kind::of(&json!("x")), Kind::String);
        assert_eq!(Kind::of(&json!([])), Kind::Array);
        assert_eq!(Kind::of(&json!({})), Kind::Object);
    }

    #[test]
    fn test_shape_kind() {
        assert_eq!(Shape::OneOf(&["a"]).kind(), Kind::String);
        assert_eq!(Shape::Copy.kind(), Kind::Object);
        assert_eq!(Shape::Count.kind(), Kind::Integer);
        assert_eq!(Shape::array_of(Shape::Bool).kind(), Kind::Array);
    }

    #[test]
    fn test_record_builder_keeps_field_order() {
        let shape = Shape::record([("id", Shape::String), ("enabled", Shape::Bool)]);
        match shape {
            Shape::Record(fields) => {
                let names: Vec<_> = fields.iter().map(|f| f.name).collect();
                assert_eq!(names, vec!["id", "enabled"]);
            }
            other => panic!("Expected record shape, got {:?}", other),
        }
    }
}
