// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime settings for the command-line front end.
//!
//! Precedence is command-line flag, then environment, then built-in default.

use crate::i18n::{Language, LanguageTag};
use crate::preference::PreferenceStore;
use crate::render::OutputFormat;
use crate::storage::{BackendKind, FileBackend, MemoryBackend, PreferenceBackend};
use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const STORE_ENV: &str = "FOLIO_STORE";
pub const BACKEND_ENV: &str = "FOLIO_BACKEND";
pub const DEFAULT_LANG_ENV: &str = "FOLIO_DEFAULT_LANG";
pub const FORMAT_ENV: &str = "FOLIO_FORMAT";

/// Language the site root starts in when nothing is persisted.
pub const SITE_DEFAULT_LANGUAGE: Language = Language::PtBr;

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store: Option<PathBuf>,
    pub default_language: Option<String>,
    pub ephemeral: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_language: LanguageTag,
    pub backend: BackendKind,
    /// Preference file; `None` means the platform default location.
    pub store_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: SITE_DEFAULT_LANGUAGE.into(),
            backend: BackendKind::File,
            store_path: None,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Resolve against the process environment.
    pub fn resolve(overrides: &Overrides) -> Self {
        Self::resolve_with(overrides, |key| env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn resolve_with(overrides: &Overrides, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(tag) = overrides.default_language.clone().or_else(|| var(DEFAULT_LANG_ENV)) {
            let tag = LanguageTag::new(tag.trim());
            if !tag.is_configured() {
                warn!(language = %tag, "default language has no translations");
            }
            settings.default_language = tag;
        }

        if overrides.ephemeral {
            settings.backend = BackendKind::Memory;
        } else if let Some(raw) = var(BACKEND_ENV) {
            match BackendKind::parse(&raw) {
                Some(kind) => settings.backend = kind,
                None => warn!(value = %raw, "ignoring unknown {}", BACKEND_ENV),
            }
        }

        settings.store_path = overrides
            .store
            .clone()
            .or_else(|| var(STORE_ENV).map(PathBuf::from));

        if let Some(raw) = var(FORMAT_ENV) {
            match OutputFormat::parse(&raw) {
                Some(format) => settings.format = format,
                None => warn!(value = %raw, "ignoring unknown {}", FORMAT_ENV),
            }
        }

        settings
    }

    /// Location of the preference file, if the file backend is in use.
    pub fn preference_path(&self) -> Option<PathBuf> {
        match self.backend {
            BackendKind::Memory => None,
            BackendKind::File => self.store_path.clone().or_else(FileBackend::default_path),
        }
    }

    pub fn open_backend(&self) -> Result<Box<dyn PreferenceBackend>> {
        match self.backend {
            BackendKind::Memory => Ok(Box::new(MemoryBackend::new())),
            BackendKind::File => {
                let path = self
                    .preference_path()
                    .ok_or_else(|| anyhow!("no preference file location; set {}", STORE_ENV))?;
                Ok(Box::new(FileBackend::new(path)))
            }
        }
    }

    /// Build the application-root store.
    pub fn open_store(&self) -> Result<PreferenceStore<Box<dyn PreferenceBackend>>> {
        let backend = self.open_backend()?;
        Ok(PreferenceStore::initialize(self.default_language.clone(), backend))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env_or_flags() {
        let settings = Settings::resolve_with(&Overrides::default(), lookup(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_language, Language::PtBr);
    }

    #[test]
    fn env_fills_in_when_flags_absent() {
        let settings = Settings::resolve_with(
            &Overrides::default(),
            lookup(&[
                (DEFAULT_LANG_ENV, "en-us"),
                (BACKEND_ENV, "memory"),
                (STORE_ENV, "/tmp/folio.json"),
                (FORMAT_ENV, "json"),
            ]),
        );
        assert_eq!(settings.default_language, Language::EnUs);
        assert_eq!(settings.backend, BackendKind::Memory);
        assert_eq!(settings.store_path, Some(PathBuf::from("/tmp/folio.json")));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn flags_beat_env() {
        let overrides = Overrides {
            store: Some(PathBuf::from("/elsewhere.json")),
            default_language: Some("pt-br".to_string()),
            ephemeral: true,
        };
        let settings = Settings::resolve_with(
            &overrides,
            lookup(&[
                (DEFAULT_LANG_ENV, "en-us"),
                (BACKEND_ENV, "file"),
                (STORE_ENV, "/tmp/folio.json"),
            ]),
        );
        assert_eq!(settings.default_language, Language::PtBr);
        assert_eq!(settings.backend, BackendKind::Memory);
        assert_eq!(settings.store_path, Some(PathBuf::from("/elsewhere.json")));
    }

    #[test]
    fn blank_and_unknown_env_values_are_ignored() {
        let settings = Settings::resolve_with(
            &Overrides::default(),
            lookup(&[(DEFAULT_LANG_ENV, "  "), (BACKEND_ENV, "redis"), (FORMAT_ENV, "xml")]),
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn memory_backend_has_no_path() {
        let settings = Settings {
            backend: BackendKind::Memory,
            store_path: Some(PathBuf::from("/ignored.json")),
            ..Settings::default()
        };
        assert_eq!(settings.preference_path(), None);
    }

    #[test]
    fn open_store_persists_through_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            store_path: Some(dir.path().join("preferences.json")),
            ..Settings::default()
        };

        let mut store = settings.open_store().unwrap();
        assert_eq!(*store.language(), Language::PtBr);
        store.set_language(Language::EnUs);

        let reopened = settings.open_store().unwrap();
        assert_eq!(*reopened.language(), Language::EnUs);
    }
}
