//! Localized text resolution and placeholder substitution.
//!
//! Display code calls the lenient pair: [`get_ui_text`] (any miss is `""`)
//! and [`replace_variables`] (unknown placeholders stay verbatim). The strict
//! variants, [`Catalog::resolve`](crate::catalog::Catalog::resolve) and
//! [`replace_variables_strict`], report the same misses as errors for tooling
//! and the server's strict mode.
//!
//! # Example
//!
//! ```rust,ignore
//! use learning_content::text::{get_ui_text, replace_variables};
//! use std::collections::HashMap;
//!
//! let title = get_ui_text("subjectListing", "title", "en");
//! let vars = HashMap::from([("course", "Third Grade")]);
//! assert_eq!(replace_variables(&title, &vars), "Third Grade - Select a subject");
//! ```

mod resolver;
mod template;

pub use resolver::{get_ui_text, TextError};
pub use template::{placeholders, replace_variables, replace_variables_strict, TemplateError};
