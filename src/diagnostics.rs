// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics behind `folio check`.

use crate::config::{Settings, BACKEND_ENV, DEFAULT_LANG_ENV, FORMAT_ENV, STORE_ENV};
use crate::i18n::{parity, LanguageTag};
use crate::storage::{FileBackend, PreferenceBackend, LANGUAGE_KEY};
use anyhow::{anyhow, Result};
use colored::*;
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(settings: &Settings) -> Result<()> {
    println!("folio self-diagnostics");

    let checks = collect(settings);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Run every check without printing.
pub fn collect(settings: &Settings) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("folio {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.extend(check_parity());
    checks.push(check_default_language(&settings.default_language));
    match settings.preference_path() {
        Some(path) => checks.push(check_preference_file(&path)),
        None => checks.push(Diagnostic::ok(
            "preference store",
            format!("{} backend, nothing persisted", settings.backend.as_str()),
        )),
    }
    for key in [STORE_ENV, BACKEND_ENV, DEFAULT_LANG_ENV, FORMAT_ENV] {
        checks.push(check_env(key));
    }
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:20} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_parity() -> Vec<Diagnostic> {
    let divergences = parity::check();
    if divergences.is_empty() {
        return vec![Diagnostic::ok(
            "translation parity",
            "all languages share the same keys".to_string(),
        )];
    }
    divergences
        .iter()
        .map(|d| Diagnostic::error("translation parity", d.to_string()))
        .collect()
}

fn check_default_language(tag: &LanguageTag) -> Diagnostic {
    if tag.is_configured() {
        Diagnostic::ok("default language", tag.to_string())
    } else {
        Diagnostic::warning(
            "default language",
            format!("{} has no translations (every label will show its path)", tag),
        )
    }
}

fn check_preference_file(path: &Path) -> Diagnostic {
    if !path.exists() {
        return Diagnostic::ok(
            "preference store",
            format!("{} not created yet (written on first change)", path.display()),
        );
    }
    if !path.is_file() {
        return Diagnostic::error(
            "preference store",
            format!("{} exists but is not a regular file", path.display()),
        );
    }
    match FileBackend::new(path).read(LANGUAGE_KEY) {
        Ok(Some(stored)) => {
            let tag = LanguageTag::new(stored);
            if tag.is_configured() {
                Diagnostic::ok("preference store", format!("{} stores {}", path.display(), tag))
            } else {
                Diagnostic::warning(
                    "preference store",
                    format!(
                        "{} stores unknown language {:?} (toggle to replace it)",
                        path.display(),
                        tag.as_str()
                    ),
                )
            }
        }
        Ok(None) => Diagnostic::ok(
            "preference store",
            format!("{} has no language entry", path.display()),
        ),
        Err(err) => Diagnostic::warning(
            "preference store",
            format!("unable to read {}: {:#}", path.display(), err),
        ),
    }
}

fn check_env(key: &'static str) -> Diagnostic {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Diagnostic::ok(key, format!("set to {}", value)),
        _ => Diagnostic::ok(key, "not set (using default)".to_string()),
    }
}
