//! Resolve `page` + dotted path + locale to a display string.

use crate::catalog::{Catalog, CopyRef};
use thiserror::Error;
use tracing::debug;

/// Why a copy lookup produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("Unknown page '{0}'")]
    UnknownPage(String),

    #[error("No copy at '{page}.{path}'")]
    MissingField { page: String, path: String },

    #[error("'{page}.{path}' has no text for locale '{locale}'")]
    MissingLocale {
        page: String,
        path: String,
        locale: String,
    },

    #[error("'{page}.{path}' is a {tag}, not text")]
    NotText {
        page: String,
        path: String,
        tag: &'static str,
    },
}

impl Catalog {
    /// Strict copy lookup.
    ///
    /// Walks `dotted_path` from the page root one segment at a time. A
    /// localized leaf at the end yields its `locale` entry; a segment that
    /// indexes into a leaf (e.g. `title.en`) yields that entry directly.
    pub fn resolve(
        &self,
        page_key: &str,
        dotted_path: &str,
        locale: &str,
    ) -> Result<&str, TextError> {
        let page = self
            .page(page_key)
            .ok_or_else(|| TextError::UnknownPage(page_key.to_string()))?;

        let segments: Vec<&str> = dotted_path.split('.').collect();
        let mut node = page.root();
        for (depth, segment) in segments.iter().enumerate() {
            node = match node.child(segment) {
                Some(next) => next,
                None if matches!(node, CopyRef::Localized(_)) => {
                    return Err(TextError::MissingLocale {
                        page: page_key.to_string(),
                        path: segments[..depth].join("."),
                        locale: segment.to_string(),
                    })
                }
                None => {
                    return Err(TextError::MissingField {
                        page: page_key.to_string(),
                        path: segments[..=depth].join("."),
                    })
                }
            };
        }

        match node {
            CopyRef::Scalar(text) => Ok(text),
            CopyRef::Localized(text) => text.get(locale).ok_or_else(|| TextError::MissingLocale {
                page: page_key.to_string(),
                path: dotted_path.to_string(),
                locale: locale.to_string(),
            }),
            CopyRef::Record(_) => Err(TextError::NotText {
                page: page_key.to_string(),
                path: dotted_path.to_string(),
                tag: node.tag(),
            }),
        }
    }

    /// Lenient copy lookup for display code: any miss renders as `""`.
    pub fn ui_text(&self, page_key: &str, dotted_path: &str, locale: &str) -> String {
        match self.resolve(page_key, dotted_path, locale) {
            Ok(text) => text.to_string(),
            Err(e) => {
                debug!("Copy lookup returned empty: {}", e);
                String::new()
            }
        }
    }
}

/// [`Catalog::ui_text`] against the process-wide catalog.
pub fn get_ui_text(page_key: &str, dotted_path: &str, locale: &str) -> String {
    Catalog::global().ui_text(page_key, dotted_path, locale)
}
