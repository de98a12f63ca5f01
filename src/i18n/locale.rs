//! Locale type: the fixed set of display locales every piece of copy is written in.
//!
//! Unlike the language catalog (which is content and may list languages that are
//! not yet enabled), the locale set is part of the data model: every
//! `LocalizedText` carries exactly one string per supported locale.

use anyhow::{bail, Result};
use std::fmt;

/// Codes of every supported display locale, in declaration order.
pub const SUPPORTED_LOCALES: [&str; 3] = ["es", "en", "de"];

/// A validated display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 code (e.g., "es", "en")
    code: &'static str,
}

impl Locale {
    pub const SPANISH: Locale = Locale { code: "es" };
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const GERMAN: Locale = Locale { code: "de" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is one of [`SUPPORTED_LOCALES`]
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Locale> {
        match SUPPORTED_LOCALES.iter().copied().find(|supported| *supported == code) {
            Some(supported) => Ok(Locale { code: supported }),
            None if code.is_empty() => bail!("Empty locale code"),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// All supported locales, in declaration order.
    pub fn all() -> [Locale; 3] {
        [Locale::SPANISH, Locale::ENGLISH, Locale::GERMAN]
    }

    /// Whether `code` names a supported locale.
    pub fn is_supported(code: &str) -> bool {
        SUPPORTED_LOCALES.iter().any(|supported| *supported == code)
    }

    /// The ISO 639-1 code as a static string.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// English name of the locale.
    pub fn name(&self) -> &'static str {
        match self.code {
            "en" => "English",
            "de" => "German",
            _ => "Spanish",
        }
    }
}

/// Spanish is the primary audience of the app.
impl Default for Locale {
    fn default() -> Self {
        Locale::SPANISH
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_supported() {
        for code in SUPPORTED_LOCALES {
            let locale = Locale::from_code(code).expect("Should succeed");
            assert_eq!(locale.code(), code);
        }
    }

    #[test]
    fn test_from_code_unknown() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        let result = Locale::from_code("");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Empty"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Locale::from_code("EN").is_err());
    }

    // ==================== Constant Tests ====================

    #[test]
    fn test_constants_match_from_code() {
        assert_eq!(Locale::SPANISH, Locale::from_code("es").unwrap());
        assert_eq!(Locale::ENGLISH, Locale::from_code("en").unwrap());
        assert_eq!(Locale::GERMAN, Locale::from_code("de").unwrap());
    }

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Locale::default(), Locale::SPANISH);
    }

    #[test]
    fn test_all_follows_supported_order() {
        let codes: Vec<_> = Locale::all().iter().map(|l| l.code()).collect();
        assert_eq!(codes, SUPPORTED_LOCALES);
    }

    #[test]
    fn test_is_supported() {
        assert!(Locale::is_supported("de"));
        assert!(!Locale::is_supported("xx"));
    }

    #[test]
    fn test_names_and_display() {
        assert_eq!(Locale::GERMAN.name(), "German");
        assert_eq!(Locale::ENGLISH.to_string(), "en");
    }
}
