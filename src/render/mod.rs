// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output for the command-line front end

pub mod output;
pub mod page;

use crate::preference::PreferenceStore;
use crate::storage::PreferenceBackend;

pub use output::{format_lookup, format_tree, OutputFormat};
pub use page::{PageRenderer, Section};

/// Print `sections` in the store's active language
pub fn print_page<B: PreferenceBackend>(store: &PreferenceStore<B>, sections: &[Section]) {
    PageRenderer::new(store).print(sections);
}
