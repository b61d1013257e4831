// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported translations

use crate::i18n::{LanguageTag, Node, Translation};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

/// Machine-readable result of a single lookup.
#[derive(Debug, Serialize)]
pub struct LookupRecord<'a> {
    pub path: &'a str,
    pub language: &'a LanguageTag,
    pub resolved: bool,
    pub value: Option<Node>,
}

impl<'a> LookupRecord<'a> {
    pub fn new(path: &'a str, language: &'a LanguageTag, translation: &Translation) -> Self {
        Self {
            path,
            language,
            resolved: translation.is_resolved(),
            value: translation.node(),
        }
    }
}

/// Format one lookup. Text output follows the page's fail-soft rule: the
/// value when resolved, the path otherwise.
pub fn format_lookup(
    format: OutputFormat,
    path: &str,
    language: &LanguageTag,
    translation: &Translation,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match translation {
            Translation::Resolved(node) => node_as_text(node),
            Translation::Unresolved(path) => path.clone(),
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&LookupRecord::new(
            path,
            language,
            translation,
        ))?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&LookupRecord::new(
            path,
            language,
            translation,
        ))?),
    }
}

/// Format a whole subtree, as used by `export`.
pub fn format_tree(format: OutputFormat, node: &Node) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(node_as_text(node)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(node)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(node)?),
    }
}

fn node_as_text(node: &Node) -> String {
    let mut lines = Vec::new();
    flatten("", node, &mut lines);
    lines.join("\n")
}

fn flatten(prefix: &str, node: &Node, lines: &mut Vec<String>) {
    match node {
        Node::Text(text) if prefix.is_empty() => lines.push(text.to_string()),
        Node::Text(text) => lines.push(format!("{} = {}", prefix, text)),
        Node::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if prefix.is_empty() {
                    lines.push(item.to_string());
                } else {
                    lines.push(format!("{}[{}] = {}", prefix, i, item));
                }
            }
        }
        Node::Branch(entries) => {
            for (key, child) in entries.iter() {
                let path = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{translate, Language};

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(OutputFormat::parse("YML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("txt"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("toml"), None);
    }

    #[test]
    fn text_lookup_is_value_or_path() {
        let tag = LanguageTag::from(Language::PtBr);
        let hit = translate("projects.viewCode", &tag);
        assert_eq!(
            format_lookup(OutputFormat::Text, "projects.viewCode", &tag, &hit).unwrap(),
            "Ver Código"
        );
        let miss = translate("projects.repo", &tag);
        assert_eq!(
            format_lookup(OutputFormat::Text, "projects.repo", &tag, &miss).unwrap(),
            "projects.repo"
        );
    }

    #[test]
    fn json_lookup_marks_resolution() {
        let tag = LanguageTag::new("xx");
        let miss = translate("header.home", &tag);
        let json = format_lookup(OutputFormat::Json, "header.home", &tag, &miss).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["resolved"], false);
        assert_eq!(value["language"], "xx");
        assert!(value["value"].is_null());
    }

    #[test]
    fn text_tree_flattens_to_paths() {
        let tag = LanguageTag::from(Language::EnUs);
        let node = translate("about", &tag).node().unwrap();
        let text = format_tree(OutputFormat::Text, &node).unwrap();
        assert!(text.contains("title = About Me"));
        assert!(text.contains("description[2] =  When I'm not coding"));
    }

    #[test]
    fn yaml_tree_keeps_nesting() {
        let tag = LanguageTag::from(Language::PtBr);
        let node = translate("header", &tag).node().unwrap();
        let yaml = format_tree(OutputFormat::Yaml, &node).unwrap();
        assert!(yaml.contains("about: Sobre"));
    }
}
