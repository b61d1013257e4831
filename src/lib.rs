// SPDX-License-Identifier: PMPL-1.0-or-later

//! Folio: language preference and translation core of a bilingual portfolio site.
//!
//! The site renders every label through a dot-path lookup into a static
//! translation table (English and Brazilian Portuguese), against whichever
//! language the preference store currently holds.
//!
//! PIECES:
//! 1. **i18n**: the typed translation tree, the fail-soft `translate` lookup,
//!    and a parity check between language subtrees.
//! 2. **preference**: the application-root store that seeds the active
//!    language from the persisted flag and persists every change.
//! 3. **storage**: key-value backends for the persisted flag (in-memory
//!    and a JSON file under the user's config directory).
//!
//! The remaining modules (`site`, `render`, `config`, `diagnostics`) serve
//! the `folio` command-line front end.

pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod preference;
pub mod render;
pub mod site;
pub mod storage;
