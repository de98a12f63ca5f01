//! Id lookups over the catalog.
//!
//! Catalogs hold at most a few dozen records, so every lookup is a linear
//! scan. A miss is `None` (or an empty slice), never an error.

use crate::catalog::{Catalog, Course, Difficulty, Language, Level, Operation, Subject};

/// A record with an id that is unique within its catalog.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),*) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_identified!(Language, Course, Subject, Level, Operation);

/// Find the record with `id`, scanning in catalog order.
pub fn find<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

impl Catalog {
    /// Get a language by its code.
    ///
    /// # Arguments
    /// * `id` - The ISO 639-1 code (e.g., "es", "en")
    ///
    /// # Returns
    /// * `Some(&Language)` if the language exists, enabled or not
    /// * `None` if the code is not in the catalog
    pub fn find_language(&self, id: &str) -> Option<&Language> {
        find(self.languages(), id)
    }

    /// Get a course by id (e.g., "third").
    pub fn find_course(&self, id: &str) -> Option<&Course> {
        find(self.courses(), id)
    }

    /// Get a subject by id (e.g., "math").
    pub fn find_subject(&self, id: &str) -> Option<&Subject> {
        find(self.subjects(), id)
    }

    pub fn find_operation(&self, id: &str) -> Option<&Operation> {
        find(self.operations(), id)
    }

    /// Levels offered for a subject within a course.
    ///
    /// # Arguments
    /// * `course_id` - Course id (e.g., "first")
    /// * `subject_id` - Subject id (e.g., "math")
    ///
    /// Returns an empty slice when no entry matches. Loading rejects duplicate
    /// (course, subject) pairs; if one ever slipped through, the first entry wins.
    pub fn course_levels(&self, course_id: &str, subject_id: &str) -> &[Level] {
        self.course_level_entries()
            .iter()
            .find(|entry| entry.course_id == course_id && entry.subject_id == subject_id)
            .map(|entry| entry.levels.as_slice())
            .unwrap_or(&[])
    }

    // Enabled flags are advisory: these helpers exist for presentation code,
    // the find_* lookups above still return disabled records.

    /// Languages to offer in the language picker, in catalog order.
    pub fn enabled_languages(&self) -> Vec<&Language> {
        self.languages().iter().filter(|l| l.enabled).collect()
    }

    pub fn enabled_courses(&self) -> Vec<&Course> {
        self.courses().iter().filter(|c| c.enabled).collect()
    }

    pub fn enabled_subjects(&self) -> Vec<&Subject> {
        self.subjects().iter().filter(|s| s.enabled).collect()
    }

    /// All operations of one difficulty tier, in catalog order.
    pub fn operations_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Operation> {
        self.operations()
            .iter()
            .filter(|op| op.difficulty == difficulty)
            .collect()
    }
}
