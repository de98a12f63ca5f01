//! Record types held by the catalog, each with the shape its document must match.

use crate::i18n::LocalizedText;
use crate::schema::Shape;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the app can be used in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// ISO 639-1 code, unique within the catalog
    pub id: String,

    /// English name (e.g., "Spanish")
    pub name: String,

    /// Name in the language itself (e.g., "Español")
    pub native_name: String,

    /// Flag emoji shown next to the name
    pub flag: String,

    pub enabled: bool,
}

impl Language {
    pub fn shape() -> Shape {
        Shape::record([
            ("id", Shape::String),
            ("name", Shape::String),
            ("nativeName", Shape::String),
            ("flag", Shape::String),
            ("enabled", Shape::Bool),
        ])
    }
}

/// A school year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub grade: u32,
    pub name: LocalizedText,

    /// Free-form age range label (e.g., "8-9")
    pub age_range: String,

    pub enabled: bool,
}

impl Course {
    pub fn shape() -> Shape {
        Shape::record([
            ("id", Shape::String),
            ("grade", Shape::Count),
            ("name", Shape::Localized),
            ("ageRange", Shape::String),
            ("enabled", Shape::Bool),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub icon: String,
    pub name: LocalizedText,

    /// Design token for the subject card (e.g., "blue")
    pub color: String,

    pub enabled: bool,
}

impl Subject {
    pub fn shape() -> Shape {
        Shape::record([
            ("id", Shape::String),
            ("icon", Shape::String),
            ("name", Shape::Localized),
            ("color", Shape::String),
            ("enabled", Shape::Bool),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub number: u32,
    pub name: LocalizedText,
    pub enabled: bool,
}

impl Level {
    pub fn shape() -> Shape {
        Shape::record([
            ("id", Shape::String),
            ("number", Shape::Count),
            ("name", Shape::Localized),
            ("enabled", Shape::Bool),
        ])
    }
}

/// The levels offered for one subject within one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseLevels {
    pub course_id: String,
    pub subject_id: String,
    pub levels: Vec<Level>,
}

impl CourseLevels {
    pub fn shape() -> Shape {
        Shape::record([
            ("courseId", Shape::String),
            ("subjectId", Shape::String),
            ("levels", Shape::array_of(Level::shape())),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
}

impl OperationKind {
    pub const NAMES: &'static [&'static str] = &["addition", "subtraction", "multiplication"];

    /// Apply the operation; `None` on overflow.
    pub fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            OperationKind::Addition => a.checked_add(b),
            OperationKind::Subtraction => a.checked_sub(b),
            OperationKind::Multiplication => a.checked_mul(b),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            OperationKind::Addition => '+',
            OperationKind::Subtraction => '-',
            OperationKind::Multiplication => '×',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Difficulty {
    pub const NAMES: &'static [&'static str] = &["easy", "medium"];

    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            _ => None,
        }
    }
}

/// A math exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    pub kind: OperationKind,
    pub operand_a: i64,
    pub operand_b: i64,
    pub answer: i64,
    pub difficulty: Difficulty,
}

impl Operation {
    pub fn shape() -> Shape {
        Shape::record([
            ("id", Shape::String),
            ("kind", Shape::OneOf(OperationKind::NAMES)),
            ("operandA", Shape::Integer),
            ("operandB", Shape::Integer),
            ("answer", Shape::Integer),
            ("difficulty", Shape::OneOf(Difficulty::NAMES)),
        ])
    }

    /// Whether the stored answer is what the operation actually evaluates to.
    pub fn is_consistent(&self) -> bool {
        self.kind.apply(self.operand_a, self.operand_b) == Some(self.answer)
    }
}

/// Renders the prompt shown to the child, e.g. `7 × 6`.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operand_a, self.kind.symbol(), self.operand_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use serde_json::json;

    fn operation(kind: OperationKind, a: i64, b: i64, answer: i64) -> Operation {
        Operation {
            id: "op".to_string(),
            kind,
            operand_a: a,
            operand_b: b,
            answer,
            difficulty: Difficulty::Easy,
        }
    }

    // ==================== Operation Tests ====================

    #[test]
    fn test_apply() {
        assert_eq!(OperationKind::Addition.apply(2, 3), Some(5));
        assert_eq!(OperationKind::Subtraction.apply(2, 3), Some(-1));
        assert_eq!(OperationKind::Multiplication.apply(4, 3), Some(12));
        assert_eq!(OperationKind::Multiplication.apply(i64::MAX, 2), None);
    }

    #[test]
    fn test_is_consistent() {
        assert!(operation(OperationKind::Addition, 2, 3, 5).is_consistent());
        assert!(!operation(OperationKind::Addition, 2, 3, 6).is_consistent());
    }

    #[test]
    fn test_display() {
        let op = operation(OperationKind::Multiplication, 7, 6, 42);
        assert_eq!(op.to_string(), "7 × 6");
    }

    #[test]
    fn test_operation_deserialization() {
        let json = r#"{
            "id": "add-1", "kind": "subtraction", "operandA": 9, "operandB": 4,
            "answer": 5, "difficulty": "medium"
        }"#;
        let op: Operation = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(op.kind, OperationKind::Subtraction);
        assert_eq!(op.difficulty, Difficulty::Medium);
        assert!(op.is_consistent());
    }

    #[test]
    fn test_kind_names_match_serde() {
        for name in OperationKind::NAMES {
            let kind: Result<OperationKind, _> = serde_json::from_value(json!(name));
            assert!(kind.is_ok(), "{} should decode", name);
        }
        for name in Difficulty::NAMES {
            assert!(Difficulty::from_name(name).is_some());
        }
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_language_shape_matches_serde_names() {
        let value = json!({
            "id": "es", "name": "Spanish", "nativeName": "Español",
            "flag": "🇪🇸", "enabled": true
        });
        assert!(validate(&value, &Language::shape()).is_ok());
        let language: Language = serde_json::from_value(value).expect("Should deserialize");
        assert_eq!(language.native_name, "Español");
    }

    #[test]
    fn test_course_levels_shape_checks_nested_levels() {
        let value = json!({
            "courseId": "first",
            "subjectId": "math",
            "levels": [{"id": "l1", "number": 1, "name": {"es": "Uno", "en": "One"}, "enabled": true}]
        });
        let err = validate(&value, &CourseLevels::shape()).unwrap_err();
        assert_eq!(err.path(), "levels[0].name.de");
    }

    #[test]
    fn test_operation_shape_rejects_unknown_kind() {
        let value = json!({
            "id": "x", "kind": "division", "operandA": 4, "operandB": 2,
            "answer": 2, "difficulty": "easy"
        });
        assert!(validate(&value, &Operation::shape()).is_err());
    }
}
