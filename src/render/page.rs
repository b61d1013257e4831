// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering of the portfolio page

use crate::preference::PreferenceStore;
use crate::site::{
    self, TechCategory, ABOUT_TECH_STACK, HERO_TECH_STACK, METADATA, RESUME, SOCIAL_LINKS,
};
use crate::storage::PreferenceBackend;
use clap::ValueEnum;
use colored::*;
use std::fmt::Write;

/// Page sections, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Header,
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Header,
            Section::Hero,
            Section::About,
            Section::Projects,
            Section::Contact,
        ]
    }

    /// Top-level key of this section in the translation table.
    pub fn key(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// Renders page sections as plain text in the store's active language.
pub struct PageRenderer<'s, B: PreferenceBackend> {
    store: &'s PreferenceStore<B>,
}

impl<'s, B: PreferenceBackend> PageRenderer<'s, B> {
    pub fn new(store: &'s PreferenceStore<B>) -> Self {
        Self { store }
    }

    pub fn render(&self, sections: &[Section]) -> String {
        let mut out = String::new();
        if self.store.is_resolving() {
            // Nothing language-dependent is drawn until the store settles.
            out.push_str("...\n");
            return out;
        }
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_section(*section, &mut out);
        }
        out
    }

    pub fn print(&self, sections: &[Section]) {
        print!("{}", self.render(sections));
    }

    fn render_section(&self, section: Section, out: &mut String) {
        match section {
            Section::Header => self.render_header(out),
            Section::Hero => self.render_hero(out),
            Section::About => self.render_about(out),
            Section::Projects => self.render_projects(out),
            Section::Contact => self.render_contact(out),
        }
    }

    fn render_header(&self, out: &mut String) {
        let t = |path| self.store.text(path);
        let language = self.store.language();
        let _ = writeln!(out, "{}", METADATA.title.bold().cyan());
        let _ = writeln!(
            out,
            "  {} | {} | {} | {}",
            t("header.home"),
            t("header.about"),
            t("header.projects"),
            t("header.contact")
        );
        match language.language() {
            Some(active) => {
                let flag = site::flag_icon(active);
                let _ = writeln!(out, "  [{}] {} ({})", active, flag.alt, flag.src);
            }
            None => {
                let _ = writeln!(out, "  [{}]", language);
            }
        }
        let _ = writeln!(out, "  {}", site::toggle_label(language).dimmed());
    }

    fn render_hero(&self, out: &mut String) {
        let t = |path| self.store.text(path);
        let _ = writeln!(out, "{}", t("hero.title").bold().yellow());
        let _ = writeln!(out, "  {} React, Node.js, PostgreSQL", t("hero.subtitle"));
        let _ = writeln!(out, "  {}", t("hero.description"));
        let names: Vec<&str> = HERO_TECH_STACK.iter().map(|item| item.name).collect();
        let _ = writeln!(out, "  {}", names.join(" · "));
        let _ = writeln!(out, "  > {}", t("hero.viewProjects"));
        let _ = writeln!(
            out,
            "  > {} ({} as {})",
            t("hero.downloadResume"),
            RESUME.source,
            RESUME.file_name
        );
    }

    fn render_about(&self, out: &mut String) {
        let _ = writeln!(out, "{}", self.store.text("about.title").bold().yellow());
        for paragraph in self.store.lines("about.description") {
            let _ = writeln!(out, "  {}", paragraph);
        }
        let _ = writeln!(out, "  {}", self.store.text("about.techStackTitle").bold());
        for category in TechCategory::all() {
            let names = site::stack_names(ABOUT_TECH_STACK, *category);
            let _ = writeln!(out, "    {:9} {}", format!("{:?}", category), names.join(", "));
        }
    }

    fn render_projects(&self, out: &mut String) {
        let t = |path| self.store.text(path);
        let _ = writeln!(out, "{}", t("projects.title").bold().yellow());
        let _ = writeln!(out, "  > {} | > {}", t("projects.viewDemo"), t("projects.viewCode"));
    }

    fn render_contact(&self, out: &mut String) {
        let t = |path| self.store.text(path);
        let _ = writeln!(out, "{}", t("contact.title").bold().yellow());
        let _ = writeln!(out, "  {}", t("contact.subtitle"));
        for field in ["contact.name", "contact.email", "contact.message"] {
            let _ = writeln!(out, "  {}: ____", t(field));
        }
        let _ = writeln!(out, "  > {}", t("contact.send"));
        let _ = writeln!(out, "  GitHub   {}", SOCIAL_LINKS.github);
        let _ = writeln!(out, "  LinkedIn {}", SOCIAL_LINKS.linkedin);
        let _ = writeln!(out, "  Email    {}", SOCIAL_LINKS.mailto());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::storage::{MemoryBackend, LANGUAGE_KEY};

    fn store(language: Language) -> PreferenceStore<MemoryBackend> {
        PreferenceStore::initialize(language, MemoryBackend::new())
    }

    #[test]
    fn section_keys_match_table_sections() {
        let keys: Vec<_> = Section::all().iter().map(|s| s.key()).collect();
        let table: Vec<_> = crate::i18n::sections().collect();
        assert_eq!(keys, table);
    }

    #[test]
    fn renders_in_active_language() {
        let pt = store(Language::PtBr);
        let page = PageRenderer::new(&pt).render(&[Section::Header, Section::Contact]);
        assert!(page.contains("Início"));
        assert!(page.contains("Entre em Contato"));
        assert!(page.contains("Switch to English"));

        let en = store(Language::EnUs);
        let page = PageRenderer::new(&en).render(&[Section::Header]);
        assert!(page.contains("Home"));
        assert!(page.contains("USA flag"));
    }

    #[test]
    fn about_lists_every_paragraph() {
        let en = store(Language::EnUs);
        let page = PageRenderer::new(&en).render(&[Section::About]);
        assert!(page.contains("What drives me most"));
        assert!(page.contains("When I'm not coding"));
        assert!(page.contains("Database  PostgreSQL, MongoDB, Redis, MySQL"));
        assert!(page.contains("Tools     AWS, Git, Linux"));
    }

    #[test]
    fn hero_names_resume_file() {
        let pt = store(Language::PtBr);
        let page = PageRenderer::new(&pt).render(&[Section::Hero]);
        assert!(page.contains("Baixar Currículo"));
        assert!(page.contains("Vinicius_Guterres_Resume.pdf"));
    }

    #[test]
    fn foreign_tag_renders_raw_paths() {
        let backend = MemoryBackend::with_entry(LANGUAGE_KEY, "en");
        let foreign = PreferenceStore::initialize(Language::EnUs, backend);
        let page = PageRenderer::new(&foreign).render(&[Section::Projects]);
        assert!(page.contains("projects.title"));
        assert!(page.contains("projects.viewCode"));
    }
}
