// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the portfolio site.
//!
//! The site ships two languages:
//!
//! | Tag     | Language               | Native name |
//! |---------|------------------------|-------------|
//! | `en-us` | English (US)           | English     |
//! | `pt-br` | Portuguese (Brazil)    | Português   |
//!
//! ## Design
//!
//! Translation paths use dotted namespaces: `"header.home"`,
//! `"about.description"`. The table is a static tree per language whose
//! leaves are a string or an ordered list of strings. A lookup that cannot
//! be satisfied returns [`Translation::Unresolved`] with the path itself
//! (fail-open, never panics), so a missing entry shows up on the page as the
//! raw path instead of breaking the render.
//!
//! There is no fallback to another language: a key missing in `pt-br` is
//! shown as its path even if `en-us` has it. [`parity::check`] is the tool
//! for catching that before it ships.

mod catalog;
mod language;
pub mod parity;
mod translate;

pub use catalog::{root, sections, Node};
pub use language::{Language, LanguageTag};
pub use translate::{lines, text, translate, Translation};
