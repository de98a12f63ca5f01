//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `locale`: the fixed set of display locales
//! - `localized`: `LocalizedText`, one string per supported locale
//! - `validator`: translation quality checks across locales

mod locale;
mod localized;
mod validator;

pub use locale::{Locale, SUPPORTED_LOCALES};
pub use localized::LocalizedText;
pub use validator::{TranslationValidator, ValidationReport};
