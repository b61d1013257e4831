// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dot-path lookup into the translation table.
//!
//! A path such as `"header.home"` is split on `.` and walked one key at a
//! time from the active language's root. Lookups never fail loudly: a
//! missing key yields [`Translation::Unresolved`] carrying the original path,
//! and a `warn` diagnostic is emitted so the gap shows up in logs while the
//! page still renders the raw path.

use super::catalog::{self, Node};
use super::language::LanguageTag;
use tracing::warn;

/// Outcome of resolving a translation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The node found at the path (a text leaf, a list leaf, or a whole section).
    Resolved(Node),
    /// No node at the path; carries the path unchanged.
    Unresolved(String),
}

impl Translation {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Translation::Resolved(_))
    }

    pub fn node(&self) -> Option<Node> {
        match self {
            Translation::Resolved(node) => Some(*node),
            Translation::Unresolved(_) => None,
        }
    }

    /// The string at the path, if the path resolved to a text leaf.
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            Translation::Resolved(Node::Text(text)) => Some(*text),
            _ => None,
        }
    }

    /// The ordered strings at the path, if the path resolved to a list leaf.
    pub fn as_list(&self) -> Option<&'static [&'static str]> {
        match self {
            Translation::Resolved(Node::List(items)) => Some(*items),
            _ => None,
        }
    }
}

/// Resolve `path` against the subtree for `tag`.
///
/// Tags that name no configured language fail on the first step.
///
/// ```
/// use folio::i18n::{translate, Language, LanguageTag};
/// let tag = LanguageTag::from(Language::PtBr);
/// assert_eq!(translate("header.home", &tag).as_text(), Some("Início"));
/// assert!(!translate("header.blog", &tag).is_resolved());
/// ```
pub fn translate(path: &str, tag: &LanguageTag) -> Translation {
    match walk(path, tag) {
        Some(node) => Translation::Resolved(node),
        None => {
            warn!(path, language = %tag, "translation not found");
            Translation::Unresolved(path.to_string())
        }
    }
}

/// Label form of [`translate`]: the text leaf at `path`, or `path` itself.
///
/// A path that resolves to a list or a section is not a label either, so it
/// falls back the same way.
pub fn text<'a>(path: &'a str, tag: &LanguageTag) -> &'a str {
    match translate(path, tag) {
        Translation::Resolved(Node::Text(text)) => text,
        Translation::Resolved(node) => {
            warn!(path, language = %tag, found = node.kind(), "translation is not text");
            path
        }
        Translation::Unresolved(_) => path,
    }
}

/// Paragraph form of [`translate`]: list items, a single text leaf, or the
/// path as the only line.
pub fn lines<'a>(path: &'a str, tag: &LanguageTag) -> Vec<&'a str> {
    match translate(path, tag) {
        Translation::Resolved(Node::List(items)) => items.to_vec(),
        Translation::Resolved(Node::Text(text)) => vec![text],
        Translation::Resolved(node) => {
            warn!(path, language = %tag, found = node.kind(), "translation is not a list");
            vec![path]
        }
        Translation::Unresolved(_) => vec![path],
    }
}

fn walk(path: &str, tag: &LanguageTag) -> Option<Node> {
    let mut current = catalog::root(tag.language()?);
    for key in path.split('.') {
        current = *current.child(key)?;
    }
    Some(current)
}
