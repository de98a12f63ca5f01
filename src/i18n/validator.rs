//! Translation quality validation module.
//!
//! Shape validation guarantees every locale is present; this module checks
//! that the translations agree with each other: no empty strings, and the
//! same `{placeholders}` in every locale (order may differ between languages).

use crate::catalog::Catalog;
use crate::i18n::{Locale, LocalizedText};
use crate::text::placeholders;
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Check one localized text. `context` names it in messages (e.g. `courses.third.name`).
    ///
    /// Every locale is compared against the default locale:
    /// - an empty translation is an error
    /// - a different set of placeholders is a warning
    pub fn validate(context: &str, text: &LocalizedText) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference = Locale::default();
        let reference_placeholders = Self::placeholder_set(text.in_locale(reference));

        for locale in Locale::all() {
            let translated = text.in_locale(locale);
            if translated.trim().is_empty() {
                report
                    .errors
                    .push(format!("Empty {} text in {}", locale, context));
                continue;
            }

            if locale == reference {
                continue;
            }

            let translated_placeholders = Self::placeholder_set(translated);
            if translated_placeholders != reference_placeholders {
                report.warnings.push(format!(
                    "Placeholder mismatch in {}: {} has {:?}, {} has {:?}",
                    context, reference, reference_placeholders, locale, translated_placeholders
                ));
            }
        }

        report
    }

    /// Check every localized text in the catalog.
    pub fn validate_catalog(catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        for course in catalog.courses() {
            report.merge(Self::validate(&format!("courses.{}.name", course.id), &course.name));
        }
        for subject in catalog.subjects() {
            report.merge(Self::validate(&format!("subjects.{}.name", subject.id), &subject.name));
        }
        for entry in catalog.course_level_entries() {
            for level in &entry.levels {
                let context = format!(
                    "course_levels.{}/{}.{}.name",
                    entry.course_id, entry.subject_id, level.id
                );
                report.merge(Self::validate(&context, &level.name));
            }
        }
        for (page_key, page) in catalog.pages() {
            for (path, text) in page.leaves() {
                report.merge(Self::validate(&format!("pages.{}.{}", page_key, path), text));
            }
        }

        report
    }

    fn placeholder_set(text: &str) -> BTreeSet<&str> {
        placeholders(text).into_iter().collect()
    }
}
