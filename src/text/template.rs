//! `{name}` placeholder substitution for resolved copy.

use regex::{Captures, Regex};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::sync::OnceLock;
use thiserror::Error;

// Cached for performance
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unbound placeholders: {}", .0.join(", "))]
    Unbound(Vec<String>),
}

/// Replace every `{name}` in `text` with `variables[name]`.
///
/// Placeholders without a value are left verbatim. Substitution is a single
/// pass: braces inside a substituted value are not scanned again.
///
/// # Example
/// ```ignore
/// let vars = HashMap::from([("course", "Third Grade")]);
/// assert_eq!(
///     replace_variables("{course} - Select a subject", &vars),
///     "Third Grade - Select a subject"
/// );
/// ```
pub fn replace_variables<K, V, S>(text: &str, variables: &HashMap<K, V, S>) -> String
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    placeholder_regex()
        .replace_all(text, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.as_ref().to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Like [`replace_variables`], but fails if any placeholder has no value.
pub fn replace_variables_strict<K, V, S>(
    text: &str,
    variables: &HashMap<K, V, S>,
) -> Result<String, TemplateError>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    let mut unbound: Vec<String> = Vec::new();
    for name in placeholders(text) {
        if !variables.contains_key(name) && !unbound.iter().any(|u| u == name) {
            unbound.push(name.to_string());
        }
    }

    if unbound.is_empty() {
        Ok(replace_variables(text, variables))
    } else {
        Err(TemplateError::Unbound(unbound))
    }
}

/// Placeholder names in `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<&str> {
    placeholder_regex()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}
