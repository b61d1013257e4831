// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static site content that sits next to the translations.
//!
//! None of this is translated: social links, the tech stack, page metadata,
//! and the asset paths the language toggle and the resume button point at.

use crate::i18n::{Language, LanguageTag};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

impl SocialLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const SOCIAL_LINKS: SocialLinks = SocialLinks {
    github: "https://github.com/ViniciusGuterres",
    linkedin: "https://www.linkedin.com/in/vinicius-carvalho-guterres/",
    email: "viniguter@gmail.com",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl TechCategory {
    /// Display order on the about section.
    pub fn all() -> &'static [TechCategory] {
        &[
            TechCategory::Frontend,
            TechCategory::Backend,
            TechCategory::Database,
            TechCategory::Tools,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechStackItem {
    pub name: &'static str,
    pub category: TechCategory,
}

const fn tech(name: &'static str, category: TechCategory) -> TechStackItem {
    TechStackItem { name, category }
}

/// Short stack shown under the hero title.
pub const HERO_TECH_STACK: &[TechStackItem] = &[
    tech("React", TechCategory::Frontend),
    tech("TypeScript", TechCategory::Frontend),
    tech("Tailwind CSS", TechCategory::Frontend),
    tech("Node.js", TechCategory::Backend),
    tech("Express.js", TechCategory::Backend),
    tech("PostgreSQL", TechCategory::Database),
];

/// Full stack listed in the about section, grouped by category.
pub const ABOUT_TECH_STACK: &[TechStackItem] = &[
    tech("React", TechCategory::Frontend),
    tech("Next.js", TechCategory::Frontend),
    tech("TypeScript", TechCategory::Frontend),
    tech("Tailwind CSS", TechCategory::Frontend),
    tech("Node.js", TechCategory::Backend),
    tech("Express.js", TechCategory::Backend),
    tech("PostgreSQL", TechCategory::Database),
    tech("MongoDB", TechCategory::Database),
    tech("Redis", TechCategory::Database),
    tech("MySQL", TechCategory::Database),
    tech("AWS", TechCategory::Tools),
    tech("Git", TechCategory::Tools),
    tech("Linux", TechCategory::Tools),
];

/// Names in `stack` that belong to `category`, in listed order.
pub fn stack_names(stack: &[TechStackItem], category: TechCategory) -> Vec<&'static str> {
    stack
        .iter()
        .filter(|item| item.category == category)
        .map(|item| item.name)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub const METADATA: SiteMetadata = SiteMetadata {
    title: "Vinicius Guterre - Full-Stack Developer",
    description: "Full-Stack Developer specializing in React, Node.js, and PostgreSQL. Building scalable web solutions with modern technologies.",
    keywords: &[
        "Full-Stack Developer",
        "React",
        "Node.js",
        "PostgreSQL",
        "TypeScript",
        "Web Development",
    ],
};

/// An image asset with its accessible description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagIcon {
    pub src: &'static str,
    pub alt: &'static str,
}

pub fn flag_icon(language: Language) -> FlagIcon {
    match language {
        Language::EnUs => FlagIcon {
            src: "/eua_flag.svg",
            alt: "USA flag",
        },
        Language::PtBr => FlagIcon {
            src: "/brazil_flag.svg",
            alt: "Brazil flag",
        },
    }
}

/// Accessible label of the toggle button, naming the language it switches to.
pub fn toggle_label(current: &LanguageTag) -> String {
    format!("Switch to {}", current.toggled().native_name())
}

/// A file served for download under a fixed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Download {
    pub source: &'static str,
    pub file_name: &'static str,
}

pub const RESUME: Download = Download {
    source: "/vinicius_guterres_CV.pdf",
    file_name: "Vinicius_Guterres_Resume.pdf",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_follows_language() {
        assert_eq!(flag_icon(Language::PtBr).src, "/brazil_flag.svg");
        assert_eq!(flag_icon(Language::EnUs).alt, "USA flag");
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(toggle_label(&Language::EnUs.into()), "Switch to Português");
        assert_eq!(toggle_label(&Language::PtBr.into()), "Switch to English");
        assert_eq!(toggle_label(&LanguageTag::new("xx")), "Switch to Português");
    }

    #[test]
    fn resume_downloads_under_fixed_name() {
        assert_eq!(RESUME.file_name, "Vinicius_Guterres_Resume.pdf");
        assert!(RESUME.source.ends_with(".pdf"));
    }

    #[test]
    fn about_stack_covers_every_category() {
        for category in TechCategory::all() {
            assert!(!stack_names(ABOUT_TECH_STACK, *category).is_empty(), "{:?}", category);
        }
        assert_eq!(ABOUT_TECH_STACK.len(), 13);
        assert_eq!(stack_names(ABOUT_TECH_STACK, TechCategory::Tools), ["AWS", "Git", "Linux"]);
        assert_eq!(
            stack_names(ABOUT_TECH_STACK, TechCategory::Database),
            ["PostgreSQL", "MongoDB", "Redis", "MySQL"]
        );
    }

    #[test]
    fn hero_stack_is_a_subset_of_about_stack() {
        assert_eq!(HERO_TECH_STACK.len(), 6);
        assert!(HERO_TECH_STACK.iter().all(|item| ABOUT_TECH_STACK.contains(item)));
        assert!(stack_names(HERO_TECH_STACK, TechCategory::Tools).is_empty());
    }

    #[test]
    fn mailto_link() {
        assert_eq!(SOCIAL_LINKS.mailto(), "mailto:viniguter@gmail.com");
    }
}
