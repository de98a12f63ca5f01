//! Page copy: the localized strings of one screen, as a tree.
//!
//! Leaves are always [`LocalizedText`]; inner nodes group related fields
//! (e.g. `buttons.back`). Walking the tree goes through [`CopyRef`], which
//! adds a third, scalar tag for the string reached by indexing a leaf with a
//! locale code.

use crate::i18n::LocalizedText;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pages the app renders. Every one must be present in `pages.json`.
pub const PAGE_KEYS: [&str; 5] = [
    "languageSelection",
    "courseSelection",
    "subjectListing",
    "levelSelection",
    "exercise",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CopyNode {
    Localized(LocalizedText),
    Record(BTreeMap<String, CopyNode>),
}

/// Copy record for one page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCopy(BTreeMap<String, CopyNode>);

impl PageCopy {
    /// Root of the tree, for walking.
    pub fn root(&self) -> CopyRef<'_> {
        CopyRef::Record(&self.0)
    }

    pub fn field(&self, name: &str) -> Option<&CopyNode> {
        self.0.get(name)
    }

    /// Every leaf with its dotted path, in key order.
    pub fn leaves(&self) -> Vec<(String, &LocalizedText)> {
        let mut leaves = Vec::new();
        collect_leaves("", &self.0, &mut leaves);
        leaves
    }
}

fn collect_leaves<'a>(
    prefix: &str,
    fields: &'a BTreeMap<String, CopyNode>,
    out: &mut Vec<(String, &'a LocalizedText)>,
) {
    for (name, node) in fields {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match node {
            CopyNode::Localized(text) => out.push((path, text)),
            CopyNode::Record(children) => collect_leaves(&path, children, out),
        }
    }
}

/// Borrowed, tagged view of a position in a copy tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyRef<'a> {
    Record(&'a BTreeMap<String, CopyNode>),
    Localized(&'a LocalizedText),
    Scalar(&'a str),
}

impl<'a> CopyRef<'a> {
    /// Descend one step. Records index by field name, localized leaves by
    /// locale code; scalars have no children.
    pub fn child(self, key: &str) -> Option<CopyRef<'a>> {
        match self {
            CopyRef::Record(fields) => fields.get(key).map(CopyRef::from),
            CopyRef::Localized(text) => text.get(key).map(CopyRef::Scalar),
            CopyRef::Scalar(_) => None,
        }
    }

    /// Tag name used in diagnostics.
    pub fn tag(self) -> &'static str {
        match self {
            CopyRef::Record(_) => "record",
            CopyRef::Localized(_) => "localized-text",
            CopyRef::Scalar(_) => "scalar",
        }
    }
}

impl<'a> From<&'a CopyNode> for CopyRef<'a> {
    fn from(node: &'a CopyNode) -> Self {
        match node {
            CopyNode::Localized(text) => CopyRef::Localized(text),
            CopyNode::Record(fields) => CopyRef::Record(fields),
        }
    }
}
