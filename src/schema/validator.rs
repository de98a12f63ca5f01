//! Shape validation for content documents.
//!
//! Validation is depth-first in declaration order and stops at the first
//! violation, so the reported path is always the first offending field.

use crate::i18n::SUPPORTED_LOCALES;
use crate::schema::{Kind, Shape};
use serde_json::{Map, Value};
use thiserror::Error;

/// First violation found while checking a value against a [`Shape`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing field `{path}`")]
    MissingField { path: String },

    #[error("`{path}`: expected {expected}, found {actual}")]
    WrongKind {
        path: String,
        expected: Kind,
        actual: Kind,
    },

    #[error("`{path}`: expected one of [{allowed}], found \"{actual}\"")]
    NotOneOf {
        path: String,
        allowed: String,
        actual: String,
    },

    #[error("`{path}`: {actual} is outside {min}..={max}")]
    OutOfRange {
        path: String,
        min: u64,
        max: u64,
        actual: String,
    },

    #[error("unexpected field `{path}`")]
    UnexpectedField { path: String },
}

impl ValidationError {
    /// Path of the offending field.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::MissingField { path }
            | ValidationError::WrongKind { path, .. }
            | ValidationError::NotOneOf { path, .. }
            | ValidationError::OutOfRange { path, .. }
            | ValidationError::UnexpectedField { path } => path,
        }
    }
}

/// Validate `value` against `shape`, returning it unchanged on success.
pub fn validate<'v>(value: &'v Value, shape: &Shape) -> Result<&'v Value, ValidationError> {
    validate_named("", value, shape)
}

/// Like [`validate`], but error paths are rooted at `name` (e.g. `courses[2].grade`).
pub fn validate_named<'v>(
    name: &str,
    value: &'v Value,
    shape: &Shape,
) -> Result<&'v Value, ValidationError> {
    check(name, value, shape)?;
    Ok(value)
}

fn check(path: &str, value: &Value, shape: &Shape) -> Result<(), ValidationError> {
    match shape {
        Shape::String => expect_kind(path, value, Kind::String, value.is_string()),
        Shape::Integer => expect_kind(path, value, Kind::Integer, value.is_i64() || value.is_u64()),
        Shape::Count => {
            expect_kind(path, value, Kind::Integer, value.is_i64() || value.is_u64())?;
            match value.as_u64() {
                Some(n) if n <= u64::from(u32::MAX) => Ok(()),
                _ => Err(ValidationError::OutOfRange {
                    path: path.to_string(),
                    min: 0,
                    max: u64::from(u32::MAX),
                    actual: value.to_string(),
                }),
            }
        }
        Shape::Bool => expect_kind(path, value, Kind::Boolean, value.is_boolean()),
        Shape::OneOf(allowed) => {
            let actual = value.as_str().ok_or_else(|| wrong_kind(path, Kind::String, value))?;
            if allowed.iter().any(|name| *name == actual) {
                Ok(())
            } else {
                Err(ValidationError::NotOneOf {
                    path: path.to_string(),
                    allowed: allowed.join(", "),
                    actual: actual.to_string(),
                })
            }
        }
        Shape::Localized => check_localized(path, object(path, value)?),
        Shape::Record(fields) => {
            let object = object(path, value)?;
            for field in fields {
                let field_path = child(path, field.name);
                match object.get(field.name) {
                    Some(field_value) => check(&field_path, field_value, &field.shape)?,
                    None => return Err(ValidationError::MissingField { path: field_path }),
                }
            }
            Ok(())
        }
        Shape::Array(element) => {
            let items = value
                .as_array()
                .ok_or_else(|| wrong_kind(path, Kind::Array, value))?;
            for (index, item) in items.iter().enumerate() {
                check(&format!("{}[{}]", path, index), item, element)?;
            }
            Ok(())
        }
        Shape::Map(inner) => {
            for (key, entry) in object(path, value)? {
                check(&child(path, key), entry, inner)?;
            }
            Ok(())
        }
        Shape::Copy => {
            for (key, entry) in object(path, value)? {
                let entry_path = child(path, key);
                let node = object(&entry_path, entry)?;
                if is_localized_leaf(node) {
                    check_localized(&entry_path, node)?;
                } else {
                    check(&entry_path, entry, &Shape::Copy)?;
                }
            }
            Ok(())
        }
    }
}

/// An object holding any locale key is treated as a localized leaf, so a
/// leaf missing one translation fails instead of passing as a nested record.
pub(crate) fn is_localized_leaf(object: &Map<String, Value>) -> bool {
    SUPPORTED_LOCALES.iter().any(|code| object.contains_key(*code))
}

fn check_localized(path: &str, object: &Map<String, Value>) -> Result<(), ValidationError> {
    for code in SUPPORTED_LOCALES {
        let locale_path = child(path, code);
        match object.get(code) {
            Some(text) => expect_kind(&locale_path, text, Kind::String, text.is_string())?,
            None => return Err(ValidationError::MissingField { path: locale_path }),
        }
    }
    // A leaf holds locale keys only.
    match object.keys().find(|key| !SUPPORTED_LOCALES.iter().any(|code| *code == key.as_str())) {
        Some(key) => Err(ValidationError::UnexpectedField {
            path: child(path, key),
        }),
        None => Ok(()),
    }
}

fn object<'v>(path: &str, value: &'v Value) -> Result<&'v Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| wrong_kind(path, Kind::Object, value))
}

fn expect_kind(path: &str, value: &Value, expected: Kind, ok: bool) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(wrong_kind(path, expected, value))
    }
}

fn wrong_kind(path: &str, expected: Kind, value: &Value) -> ValidationError {
    ValidationError::WrongKind {
        path: path.to_string(),
        expected,
        actual: Kind::of(value),
    }
}

fn child(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}
