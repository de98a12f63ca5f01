use crate::i18n::Locale;
use serde::{Deserialize, Serialize};

/// One string per supported locale.
///
/// All three fields are required, so a decoded value can never be missing a
/// translation. Lookups by arbitrary code go through [`LocalizedText::get`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
    pub de: String,
}

impl LocalizedText {
    pub fn new(es: impl Into<String>, en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
            de: de.into(),
        }
    }

    /// Text for a raw locale code, or `None` if the code is not a supported locale.
    pub fn get(&self, code: &str) -> Option<&str> {
        match code {
            "es" => Some(&self.es),
            "en" => Some(&self.en),
            "de" => Some(&self.de),
            _ => None,
        }
    }

    /// Text for a validated locale. Always present.
    pub fn in_locale(&self, locale: Locale) -> &str {
        match locale.code() {
            "en" => &self.en,
            "de" => &self.de,
            _ => &self.es,
        }
    }

    /// `(code, text)` pairs in supported-locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Locale::all()
            .into_iter()
            .map(move |locale| (locale.code(), self.in_locale(locale)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocalizedText {
        LocalizedText::new("Hola", "Hello", "Hallo")
    }

    #[test]
    fn test_get_known_codes() {
        let text = sample();
        assert_eq!(text.get("es"), Some("Hola"));
        assert_eq!(text.get("en"), Some("Hello"));
        assert_eq!(text.get("de"), Some("Hallo"));
    }

    #[test]
    fn test_get_unknown_code() {
        assert_eq!(sample().get("xx"), None);
        assert_eq!(sample().get(""), None);
    }

    #[test]
    fn test_in_locale() {
        assert_eq!(sample().in_locale(Locale::GERMAN), "Hallo");
    }

    #[test]
    fn test_iter_order() {
        let text = sample();
        let pairs: Vec<_> = text.iter().collect();
        assert_eq!(pairs, vec![("es", "Hola"), ("en", "Hello"), ("de", "Hallo")]);
    }

    #[test]
    fn test_deserialize_requires_every_locale() {
        let result: Result<LocalizedText, _> =
            serde_json::from_str(r#"{"es": "Hola", "en": "Hello"}"#);
        assert!(result.is_err());
    }
}
