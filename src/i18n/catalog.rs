// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation table for the portfolio site.
//!
//! Every user-facing string is embedded at compile time as a static tree per
//! language. A tree is a [`Node::Branch`] of `(key, node)` pairs; leaves are
//! either a single string or an ordered list of strings (the about-section
//! paragraphs). Child lookup is a linear scan, which is fine for a handful of
//! keys per branch.
//!
//! ## Adding a new key
//!
//! 1. Add the entry to `EN_US` under the right section
//! 2. Add the same key, with the same leaf shape, to `PT_BR`
//!
//! The parity check in [`crate::i18n::parity`] flags any key or shape that
//! exists on one side only.

use super::language::Language;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// One node of the translation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Text(&'static str),
    List(&'static [&'static str]),
    Branch(&'static [(&'static str, Node)]),
}

impl Node {
    /// Direct child named `key`, if this node is a branch that has one.
    pub fn child(&self, key: &str) -> Option<&'static Node> {
        match *self {
            Node::Branch(entries) => entries.iter().find(|(k, _)| *k == key).map(|(_, n)| n),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Branch(_))
    }

    /// Short name of the node's shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Text(_) => "text",
            Node::List(_) => "list",
            Node::Branch(_) => "section",
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Text(text) => serializer.serialize_str(text),
            Node::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Branch(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, node) in entries.iter() {
                    map.serialize_entry(key, node)?;
                }
                map.end()
            }
        }
    }
}

/// Root of the translation tree for `language`.
pub fn root(language: Language) -> Node {
    match language {
        Language::EnUs => Node::Branch(EN_US),
        Language::PtBr => Node::Branch(PT_BR),
    }
}

/// Top-level section names, in page order.
pub fn sections() -> impl Iterator<Item = &'static str> {
    EN_US.iter().map(|(name, _)| *name)
}

// ─── English (United States) ────────────────────────────────────────

const EN_US: &[(&str, Node)] = &[
    (
        "header",
        Node::Branch(&[
            ("home", Node::Text("Home")),
            ("about", Node::Text("About")),
            ("projects", Node::Text("Projects")),
            ("contact", Node::Text("Contact")),
        ]),
    ),
    (
        "hero",
        Node::Branch(&[
            ("title", Node::Text("Full-Stack Developer")),
            ("subtitle", Node::Text("Building scalable web solutions with")),
            (
                "description",
                Node::Text(
                    "Passionate about creating efficient, user-friendly applications that solve real-world problems.",
                ),
            ),
            ("viewProjects", Node::Text("View My Projects")),
            ("downloadResume", Node::Text("Download Resume")),
        ]),
    ),
    (
        "about",
        Node::Branch(&[
            ("title", Node::Text("About Me")),
            (
                "description",
                Node::List(&[
                    "I'm a passionate full-stack developer with over 4+ years of experience building scalable web applications that solve real-world problems. My journey in software development began with a fascination for turning complex ideas into elegant, user-friendly solutions.",
                    "What drives me most is the challenge of creating seamless user experiences while maintaining robust, efficient code. I believe in the power of clean architecture and continuous learning, always staying up-to-date with the latest technologies and best practices in the industry.",
                    " When I'm not coding, you'll find me collaborating with teams, mentoring junior developers, or exploring new frameworks. I'm passionate about open-source contributions and believe in the importance of giving back to the developer community that has shaped my career.",
                ]),
            ),
            ("techStackTitle", Node::Text("Technologies I Work With")),
        ]),
    ),
    (
        "projects",
        Node::Branch(&[
            ("title", Node::Text("My Projects")),
            ("viewDemo", Node::Text("View Demo")),
            ("viewCode", Node::Text("View Code")),
        ]),
    ),
    (
        "contact",
        Node::Branch(&[
            ("title", Node::Text("Get In Touch")),
            ("subtitle", Node::Text("Let's work together")),
            ("name", Node::Text("Name")),
            ("email", Node::Text("Email")),
            ("message", Node::Text("Message")),
            ("send", Node::Text("Send Message")),
        ]),
    ),
];

// ─── Portuguese (Brazil) ────────────────────────────────────────────

const PT_BR: &[(&str, Node)] = &[
    (
        "header",
        Node::Branch(&[
            ("home", Node::Text("Início")),
            ("about", Node::Text("Sobre")),
            ("projects", Node::Text("Projetos")),
            ("contact", Node::Text("Contato")),
        ]),
    ),
    (
        "hero",
        Node::Branch(&[
            ("title", Node::Text("Desenvolvedor Full-Stack")),
            ("subtitle", Node::Text("Construindo soluções web escaláveis com")),
            (
                "description",
                Node::Text(
                    "Apaixonado por criar aplicações eficientes e user-friendly que resolvem problemas reais.",
                ),
            ),
            ("viewProjects", Node::Text("Meus Projetos")),
            ("downloadResume", Node::Text("Baixar Currículo")),
        ]),
    ),
    (
        "about",
        Node::Branch(&[
            ("title", Node::Text("Sobre Mim")),
            (
                "description",
                Node::List(&[
                    "Sou um desenvolvedor full-stack focado, com mais de 4 anos de experiência na construção de aplicações web escaláveis que resolvem problemas do mundo real. Minha jornada no desenvolvimento de software começou com um fascínio por transformar ideias complexas em soluções elegantes e amigáveis ao usuário.",
                    "O que mais me move é o desafio de criar **experiências de usuário fluidas** (seamless) enquanto mantenho um código robusto e eficiente. Acredito no poder da arquitetura limpa e do aprendizado contínuo, mantendo-me sempre atualizado com as últimas tecnologias e melhores práticas do setor.",
                    "Quando não estou programando, você me encontrará colaborando com equipes, **mentorando** desenvolvedores juniores ou explorando novos *frameworks*. Sou apaixonado por **contribuições de código aberto** (open-source) e acredito na importância de retribuir à comunidade de desenvolvedores que moldou minha carreira.",
                ]),
            ),
            ("techStackTitle", Node::Text("Tecnologias que eu trabalho")),
        ]),
    ),
    (
        "projects",
        Node::Branch(&[
            ("title", Node::Text("Meus Projetos")),
            ("viewDemo", Node::Text("Ver Demo")),
            ("viewCode", Node::Text("Ver Código")),
        ]),
    ),
    (
        "contact",
        Node::Branch(&[
            ("title", Node::Text("Entre em Contato")),
            ("subtitle", Node::Text("Vamos trabalhar juntos")),
            ("name", Node::Text("Nome")),
            ("email", Node::Text("Email")),
            ("message", Node::Text("Mensagem")),
            ("send", Node::Text("Enviar Mensagem")),
        ]),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_branch_root() {
        for language in Language::all() {
            assert!(!root(*language).is_leaf(), "{} root should be a section", language);
        }
    }

    #[test]
    fn child_walks_one_level() {
        let header = root(Language::EnUs).child("header").expect("header section");
        assert_eq!(header.child("home"), Some(&Node::Text("Home")));
        assert_eq!(header.child("missing"), None);
    }

    #[test]
    fn leaves_have_no_children() {
        let leaf = Node::Text("Home");
        assert_eq!(leaf.child("anything"), None);
        assert_eq!(leaf.kind(), "text");
    }

    #[test]
    fn sections_follow_page_order() {
        let names: Vec<_> = sections().collect();
        assert_eq!(names, ["header", "hero", "about", "projects", "contact"]);
    }

    #[test]
    fn about_description_is_three_paragraphs() {
        for language in Language::all() {
            let node = root(*language)
                .child("about")
                .and_then(|about| about.child("description"))
                .copied();
            match node {
                Some(Node::List(items)) => assert_eq!(items.len(), 3, "{}", language),
                other => panic!("{}: expected list, got {:?}", language, other),
            }
        }
    }

    #[test]
    fn english_about_paragraphs_are_verbatim() {
        let node = root(Language::EnUs)
            .child("about")
            .and_then(|about| about.child("description"))
            .copied();
        assert_eq!(
            node,
            Some(Node::List(&[
                "I'm a passionate full-stack developer with over 4+ years of experience building scalable web applications that solve real-world problems. My journey in software development began with a fascination for turning complex ideas into elegant, user-friendly solutions.",
                "What drives me most is the challenge of creating seamless user experiences while maintaining robust, efficient code. I believe in the power of clean architecture and continuous learning, always staying up-to-date with the latest technologies and best practices in the industry.",
                // Leading space is part of the shipped copy.
                " When I'm not coding, you'll find me collaborating with teams, mentoring junior developers, or exploring new frameworks. I'm passionate about open-source contributions and believe in the importance of giving back to the developer community that has shaped my career.",
            ]))
        );
    }

    #[test]
    fn serializes_as_nested_json() {
        let json = serde_json::to_value(root(Language::PtBr)).unwrap();
        assert_eq!(json["header"]["home"], "Início");
        assert_eq!(json["about"]["description"].as_array().map(Vec::len), Some(3));
    }
}
