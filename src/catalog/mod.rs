//! Content catalog: languages, courses, subjects, levels, operations and page copy.
//!
//! The catalog is built once from six JSON documents. Each document is parsed,
//! checked against its declared shape, decoded, and then cross-checked
//! (unique ids, references, answers) before the catalog is handed out.
//! There is no mutation path: after construction the catalog is read-only.
//!
//! # Example
//!
//! ```rust,ignore
//! use learning_content::catalog::Catalog;
//!
//! let catalog = Catalog::global();
//! let spanish = catalog.find_language("es");
//! let levels = catalog.course_levels("third", "math");
//! ```

mod lookup;
mod pages;
mod records;

pub use lookup::{find, Identified};
pub use pages::{CopyNode, CopyRef, PageCopy, PAGE_KEYS};
pub use records::{
    Course, CourseLevels, Difficulty, Language, Level, Operation, OperationKind, Subject,
};

use crate::error::{CatalogError, Result};
use crate::schema::{validate_named, Shape};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Raw JSON text of every content document.
#[derive(Debug, Clone)]
pub struct Documents {
    pub languages: String,
    pub courses: String,
    pub subjects: String,
    pub course_levels: String,
    pub operations: String,
    pub pages: String,
}

impl Documents {
    /// Documents compiled into the binary from `data/`.
    pub fn embedded() -> Self {
        Self {
            languages: include_str!("../../data/languages.json").to_string(),
            courses: include_str!("../../data/courses.json").to_string(),
            subjects: include_str!("../../data/subjects.json").to_string(),
            course_levels: include_str!("../../data/course_levels.json").to_string(),
            operations: include_str!("../../data/operations.json").to_string(),
            pages: include_str!("../../data/pages.json").to_string(),
        }
    }

    /// Read the same six documents from a directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };

        Ok(Self {
            languages: read("languages.json")?,
            courses: read("courses.json")?,
            subjects: read("subjects.json")?,
            course_levels: read("course_levels.json")?,
            operations: read("operations.json")?,
            pages: read("pages.json")?,
        })
    }
}

/// Validated, immutable content.
#[derive(Debug, Clone)]
pub struct Catalog {
    languages: Vec<Language>,
    courses: Vec<Course>,
    subjects: Vec<Subject>,
    course_levels: Vec<CourseLevels>,
    operations: Vec<Operation>,
    pages: BTreeMap<String, PageCopy>,
}

/// Process-wide catalog built from embedded content (initialized lazily)
static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The process-wide catalog built from embedded content.
    ///
    /// # Panics
    /// Panics if the embedded content fails to load. Embedded content is
    /// fixed at compile time, so this is a build defect, never a runtime one.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(|| match Catalog::embedded() {
            Ok(catalog) => catalog,
            Err(e) => panic!("Embedded content failed to load: {}", e),
        })
    }

    /// Build a catalog from the embedded documents.
    pub fn embedded() -> Result<Catalog> {
        Catalog::load(&Documents::embedded())
    }

    /// Build a catalog from documents in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Catalog> {
        info!("Loading content from {}", dir.display());
        Catalog::load(&Documents::from_dir(dir)?)
    }

    /// Parse, validate and cross-check every document.
    pub fn load(documents: &Documents) -> Result<Catalog> {
        let catalog = Catalog {
            languages: decode(
                "languages.json",
                &documents.languages,
                &Shape::array_of(Language::shape()),
            )?,
            courses: decode(
                "courses.json",
                &documents.courses,
                &Shape::array_of(Course::shape()),
            )?,
            subjects: decode(
                "subjects.json",
                &documents.subjects,
                &Shape::array_of(Subject::shape()),
            )?,
            course_levels: decode(
                "course_levels.json",
                &documents.course_levels,
                &Shape::array_of(CourseLevels::shape()),
            )?,
            operations: decode(
                "operations.json",
                &documents.operations,
                &Shape::array_of(Operation::shape()),
            )?,
            pages: decode(
                "pages.json",
                &documents.pages,
                &Shape::map_of(Shape::Copy),
            )?,
        };

        catalog.check_invariants()?;

        info!(
            "✓ Content loaded: {} languages, {} courses, {} subjects, {} level sets, {} operations, {} pages",
            catalog.languages.len(),
            catalog.courses.len(),
            catalog.subjects.len(),
            catalog.course_levels.len(),
            catalog.operations.len(),
            catalog.pages.len()
        );

        Ok(catalog)
    }

    fn check_invariants(&self) -> Result<()> {
        ensure_unique_ids("languages", &self.languages)?;
        ensure_unique_ids("courses", &self.courses)?;
        ensure_unique_ids("subjects", &self.subjects)?;
        ensure_unique_ids("operations", &self.operations)?;

        let mut pairs = HashSet::new();
        for entry in &self.course_levels {
            let from = format!("course_levels[{}/{}]", entry.course_id, entry.subject_id);

            if find(&self.courses, &entry.course_id).is_none() {
                return Err(CatalogError::UnknownReference {
                    from,
                    kind: "course",
                    id: entry.course_id.clone(),
                });
            }
            if find(&self.subjects, &entry.subject_id).is_none() {
                return Err(CatalogError::UnknownReference {
                    from,
                    kind: "subject",
                    id: entry.subject_id.clone(),
                });
            }
            if !pairs.insert((entry.course_id.as_str(), entry.subject_id.as_str())) {
                return Err(CatalogError::DuplicateLevels {
                    course_id: entry.course_id.clone(),
                    subject_id: entry.subject_id.clone(),
                });
            }
            ensure_unique_ids(&from, &entry.levels)?;
        }

        for operation in &self.operations {
            if !operation.is_consistent() {
                let expected = operation
                    .kind
                    .apply(operation.operand_a, operation.operand_b)
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "a value that fits in 64 bits".to_string());
                return Err(CatalogError::InconsistentOperation {
                    id: operation.id.clone(),
                    answer: operation.answer,
                    expected,
                });
            }
        }

        for key in PAGE_KEYS {
            if !self.pages.contains_key(key) {
                return Err(CatalogError::MissingPage(key));
            }
        }

        Ok(())
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn course_level_entries(&self) -> &[CourseLevels] {
        &self.course_levels
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn pages(&self) -> &BTreeMap<String, PageCopy> {
        &self.pages
    }

    /// Copy record for a page identifier, if the page exists.
    pub fn page(&self, key: &str) -> Option<&PageCopy> {
        self.pages.get(key)
    }
}

/// Parse one document, check it against `shape`, then decode it.
fn decode<T: DeserializeOwned>(document: &'static str, raw: &str, shape: &Shape) -> Result<T> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|source| CatalogError::Parse { document, source })?;

    let root = document.trim_end_matches(".json");
    validate_named(root, &value, shape)
        .map_err(|source| CatalogError::Validation { document, source })?;
    debug!("{} passed validation", document);

    serde_json::from_value(value).map_err(|source| CatalogError::Parse { document, source })
}

fn ensure_unique_ids<T: Identified>(catalog: &str, items: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(CatalogError::DuplicateId {
                catalog: catalog.to_string(),
                id: item.id().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValidationError;
    use serde_json::json;

    fn documents() -> Documents {
        Documents::embedded()
    }

    fn load_err(documents: &Documents) -> CatalogError {
        Catalog::load(documents).expect_err("Should fail to load")
    }

    // ==================== Embedded Content Tests ====================

    #[test]
    fn test_embedded_content_loads() {
        let catalog = Catalog::embedded().expect("Embedded content should be valid");
        assert!(!catalog.languages().is_empty());
        assert!(!catalog.courses().is_empty());
        assert!(!catalog.subjects().is_empty());
        assert!(!catalog.operations().is_empty());
        assert_eq!(catalog.pages().len(), PAGE_KEYS.len());
    }

    #[test]
    fn test_global_returns_singleton() {
        let catalog1 = Catalog::global();
        let catalog2 = Catalog::global();
        assert!(std::ptr::eq(catalog1, catalog2));
    }

    #[test]
    fn test_embedded_operations_are_consistent() {
        let catalog = Catalog::global();
        assert!(catalog.operations().iter().all(Operation::is_consistent));
    }

    // ==================== Validation Failure Tests ====================

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut docs = documents();
        docs.subjects = "[{".to_string();

        match load_err(&docs) {
            CatalogError::Parse { document, .. } => assert_eq!(document, "subjects.json"),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_locale_is_validation_error_with_path() {
        let mut docs = documents();
        docs.courses = json!([{
            "id": "first", "grade": 1, "ageRange": "6-7", "enabled": true,
            "name": {"es": "Primero", "en": "First Grade"}
        }])
        .to_string();

        match load_err(&docs) {
            CatalogError::Validation { document, source } => {
                assert_eq!(document, "courses.json");
                assert_eq!(
                    source,
                    ValidationError::MissingField {
                        path: "courses[0].name.de".to_string()
                    }
                );
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_grade_is_validation_error_with_path() {
        let mut docs = documents();
        docs.courses = json!([{
            "id": "first", "grade": -1, "ageRange": "6-7", "enabled": true,
            "name": {"es": "Primero", "en": "First Grade", "de": "Erste Klasse"}
        }])
        .to_string();

        match load_err(&docs) {
            CatalogError::Validation { document, source } => {
                assert_eq!(document, "courses.json");
                assert_eq!(source.path(), "courses[0].grade");
                assert!(matches!(source, ValidationError::OutOfRange { .. }));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_leaf_with_extra_group_is_rejected() {
        let mut docs = documents();
        let mut pages: serde_json::Value =
            serde_json::from_str(&docs.pages).expect("Embedded pages should parse");
        pages["exercise"]["title"]["hint"] = json!({"es": "Pista", "en": "Hint", "de": "Tipp"});
        docs.pages = pages.to_string();

        match load_err(&docs) {
            CatalogError::Validation { document, source } => {
                assert_eq!(document, "pages.json");
                assert_eq!(
                    source,
                    ValidationError::UnexpectedField {
                        path: "pages.exercise.title.hint".to_string()
                    }
                );
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_language_id() {
        let mut docs = documents();
        let language = json!({
            "id": "es", "name": "Spanish", "nativeName": "Español", "flag": "🇪🇸", "enabled": true
        });
        docs.languages = json!([language, language]).to_string();

        match load_err(&docs) {
            CatalogError::DuplicateId { catalog, id } => {
                assert_eq!(catalog, "languages");
                assert_eq!(id, "es");
            }
            other => panic!("Expected duplicate id, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_course_levels_pair() {
        let mut docs = documents();
        let entry = json!({"courseId": "first", "subjectId": "math", "levels": []});
        docs.course_levels = json!([entry, entry]).to_string();

        assert!(matches!(
            load_err(&docs),
            CatalogError::DuplicateLevels { .. }
        ));
    }

    #[test]
    fn test_course_levels_unknown_subject() {
        let mut docs = documents();
        docs.course_levels =
            json!([{"courseId": "first", "subjectId": "astronomy", "levels": []}]).to_string();

        match load_err(&docs) {
            CatalogError::UnknownReference { kind, id, .. } => {
                assert_eq!(kind, "subject");
                assert_eq!(id, "astronomy");
            }
            other => panic!("Expected unknown reference, got {:?}", other),
        }
    }

    #[test]
    fn test_inconsistent_operation() {
        let mut docs = documents();
        docs.operations = json!([{
            "id": "bad", "kind": "multiplication", "operandA": 3, "operandB": 4,
            "answer": 7, "difficulty": "easy"
        }])
        .to_string();

        let err = load_err(&docs);
        assert_eq!(err.to_string(), "Operation 'bad' has answer 7, expected 12");
    }

    #[test]
    fn test_missing_page() {
        let mut docs = documents();
        docs.pages = json!({}).to_string();

        assert!(matches!(
            load_err(&docs),
            CatalogError::MissingPage("languageSelection")
        ));
    }

    // ==================== Directory Source Tests ====================

    #[test]
    fn test_from_dir_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        match Catalog::from_dir(dir.path()).expect_err("Should fail") {
            CatalogError::Io { path, .. } => assert!(path.ends_with("languages.json")),
            other => panic!("Expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_dir_loads_written_documents() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let docs = documents();
        for (name, body) in [
            ("languages.json", &docs.languages),
            ("courses.json", &docs.courses),
            ("subjects.json", &docs.subjects),
            ("course_levels.json", &docs.course_levels),
            ("operations.json", &docs.operations),
            ("pages.json", &docs.pages),
        ] {
            std::fs::write(dir.path().join(name), body).expect("Should write document");
        }

        let catalog = Catalog::from_dir(dir.path()).expect("Should load");
        assert_eq!(catalog.courses(), Catalog::global().courses());
    }
}
