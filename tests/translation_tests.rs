// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup, parity and export behaviour through the public API

use folio::i18n::{self, parity, Language, LanguageTag, Node, Translation};
use folio::render::{format_lookup, format_tree, OutputFormat};
use folio::site;

#[test]
fn test_leaf_lookup_per_language() {
    let en = LanguageTag::from(Language::EnUs);
    let pt = LanguageTag::from(Language::PtBr);

    assert_eq!(i18n::text("header.home", &en), "Home");
    assert_eq!(i18n::text("header.home", &pt), "Início");
    assert_eq!(i18n::text("contact.title", &pt), "Entre em Contato");
}

#[test]
fn test_list_lookup_keeps_order() {
    let en = LanguageTag::from(Language::EnUs);
    let paragraphs = i18n::lines("about.description", &en);
    assert_eq!(paragraphs.len(), 3);
    assert!(paragraphs.iter().all(|p| !p.is_empty()));
}

#[test]
fn test_missing_and_non_leaf_paths_fall_back_to_path() {
    let en = LanguageTag::from(Language::EnUs);

    for path in ["header.nonexistent", "", "header.home.extra", "header..home"] {
        assert_eq!(
            i18n::translate(path, &en),
            Translation::Unresolved(path.to_string()),
            "{:?}",
            path
        );
        assert_eq!(i18n::text(path, &en), path);
    }

    // A section resolves, but it is not a label.
    assert!(matches!(
        i18n::translate("header", &en),
        Translation::Resolved(Node::Branch(_))
    ));
    assert_eq!(i18n::text("header", &en), "header");
}

#[test]
fn test_no_cross_language_fallback() {
    let tag = LanguageTag::new("fr");
    assert!(!tag.is_configured());
    assert_eq!(i18n::text("header.home", &tag), "header.home");
}

#[test]
fn test_shipped_tables_are_symmetric() {
    assert!(parity::check().is_empty(), "{:?}", parity::check());
}

#[test]
fn test_parity_reports_missing_leaf() {
    const LEFT: Node = Node::Branch(&[("a", Node::Text("x")), ("b", Node::Text("y"))]);
    const RIGHT: Node = Node::Branch(&[("a", Node::Text("x"))]);

    let divergences = parity::compare("left", &LEFT, "right", &RIGHT);
    assert_eq!(divergences.len(), 1);
    assert!(divergences[0].to_string().contains('b'));
}

#[test]
fn test_lookup_json_marks_unresolved() {
    let tag = LanguageTag::from(Language::PtBr);
    let translation = i18n::translate("hero.missing", &tag);

    let json = format_lookup(OutputFormat::Json, "hero.missing", &tag, &translation).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["resolved"], false);
    assert_eq!(value["language"], "pt-br");
    assert!(value["value"].is_null());
}

#[test]
fn test_export_text_flattens_paths() {
    let text = format_tree(OutputFormat::Text, &i18n::root(Language::EnUs)).unwrap();
    assert!(text.lines().any(|line| line == "header.home = Home"));
    assert!(text.lines().any(|line| line.starts_with("about.description[2] = ")));
}

#[test]
fn test_toggle_label_names_the_other_language() {
    assert_eq!(
        site::toggle_label(&LanguageTag::from(Language::PtBr)),
        "Switch to English"
    );
    assert_eq!(
        site::toggle_label(&LanguageTag::from(Language::EnUs)),
        "Switch to Português"
    );
}
