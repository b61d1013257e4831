// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shape comparison between language subtrees.
//!
//! Nothing in the table's type stops one language from missing a key the
//! other has; at runtime that only shows up as a fallback path on the page.
//! This check walks two trees side by side and lists every path that is
//! absent on one side or holds a different kind of node.

use super::catalog::{self, Node};
use super::language::Language;
use serde::Serialize;
use std::fmt;

/// One disagreement between two trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Divergence {
    /// `path` exists in `present` but not in `missing`.
    Missing {
        path: String,
        present: String,
        missing: String,
    },
    /// `path` exists on both sides with different node kinds.
    Shape {
        path: String,
        left: &'static str,
        right: &'static str,
    },
    /// Both sides hold lists of different length at `path`.
    Length {
        path: String,
        left: usize,
        right: usize,
    },
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Divergence::Missing {
                path,
                present,
                missing,
            } => write!(f, "{} present in {} but missing in {}", path, present, missing),
            Divergence::Shape { path, left, right } => {
                write!(f, "{} is {} on one side and {} on the other", path, left, right)
            }
            Divergence::Length { path, left, right } => {
                write!(f, "{} has {} items on one side and {} on the other", path, left, right)
            }
        }
    }
}

/// Compare every configured language against the first one.
pub fn check() -> Vec<Divergence> {
    let languages = Language::all();
    let Some((&base, rest)) = languages.split_first() else {
        return Vec::new();
    };
    rest.iter()
        .flat_map(|&other| {
            compare(
                base.code(),
                &catalog::root(base),
                other.code(),
                &catalog::root(other),
            )
        })
        .collect()
}

/// Compare two trees labelled `left_name` and `right_name`.
pub fn compare(left_name: &str, left: &Node, right_name: &str, right: &Node) -> Vec<Divergence> {
    let mut out = Vec::new();
    compare_at("", left_name, left, right_name, right, &mut out);
    out
}

fn compare_at(
    prefix: &str,
    left_name: &str,
    left: &Node,
    right_name: &str,
    right: &Node,
    out: &mut Vec<Divergence>,
) {
    match (left, right) {
        (Node::Branch(left_entries), Node::Branch(right_entries)) => {
            for (key, left_child) in left_entries.iter() {
                let path = join(prefix, key);
                match right.child(key) {
                    Some(right_child) => {
                        compare_at(&path, left_name, left_child, right_name, right_child, out)
                    }
                    None => out.push(Divergence::Missing {
                        path,
                        present: left_name.to_string(),
                        missing: right_name.to_string(),
                    }),
                }
            }
            for (key, _) in right_entries.iter() {
                if left.child(key).is_none() {
                    out.push(Divergence::Missing {
                        path: join(prefix, key),
                        present: right_name.to_string(),
                        missing: left_name.to_string(),
                    });
                }
            }
        }
        (Node::List(a), Node::List(b)) if a.len() != b.len() => out.push(Divergence::Length {
            path: prefix.to_string(),
            left: a.len(),
            right: b.len(),
        }),
        (a, b) if a.kind() != b.kind() => out.push(Divergence::Shape {
            path: prefix.to_string(),
            left: a.kind(),
            right: b.kind(),
        }),
        _ => {}
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
