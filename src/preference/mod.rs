// SPDX-License-Identifier: PMPL-1.0-or-later

//! Active-language store.
//!
//! The store is built once at the root of the application and handed to
//! every consumer by reference. It owns the active language tag and the
//! backend holding the persisted flag, and it tells observers about every
//! change synchronously.
//!
//! STATE:
//! - `language`: the active tag. Seeded from the `default` passed to
//!   [`PreferenceStore::initialize`], then overwritten by a non-empty
//!   persisted value. Persisted values are taken as-is, so a stale tag
//!   survives until the next [`PreferenceStore::set_language`].
//! - `resolving`: `true` only while `initialize` or `set_language` is
//!   running. Observers see the window as a `ResolvingStarted` /
//!   `ResolvingFinished` pair; at rest the flag is always `false`.
//!
//! Storage failures never reach the caller. A failed read keeps the default,
//! a failed write keeps the in-memory value; both are logged.

use crate::i18n::{self, Language, LanguageTag, Translation};
use crate::storage::{PreferenceBackend, LANGUAGE_KEY};
use std::fmt;
use tracing::{debug, warn};

/// Language used when the caller has no better default.
pub const DEFAULT_LANGUAGE: Language = Language::EnUs;

/// Snapshot of the store's state, handed to observers with each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub language: LanguageTag,
    pub resolving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceEvent {
    ResolvingStarted,
    LanguageChanged(LanguageTag),
    ResolvingFinished,
}

pub type Observer = Box<dyn FnMut(&PreferenceEvent, &Preference)>;

pub struct PreferenceStore<B: PreferenceBackend> {
    backend: B,
    state: Preference,
    observers: Vec<Observer>,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    /// Seed the store from `backend`, falling back to `default`.
    pub fn initialize(default: impl Into<LanguageTag>, backend: B) -> Self {
        Self::initialize_observed(default, backend, Vec::new())
    }

    /// Like [`initialize`](Self::initialize), with observers attached before
    /// the persisted flag is read so they see the seeding window too.
    pub fn initialize_observed(
        default: impl Into<LanguageTag>,
        backend: B,
        observers: Vec<Observer>,
    ) -> Self {
        let mut store = Self {
            backend,
            state: Preference {
                language: default.into(),
                resolving: false,
            },
            observers,
        };
        store.begin();
        match store.backend.read(LANGUAGE_KEY) {
            Ok(Some(persisted)) if !persisted.is_empty() => {
                let tag = LanguageTag::new(persisted);
                if !tag.is_configured() {
                    warn!(language = %tag, "persisted language has no translations");
                }
                if tag == store.state.language {
                    debug!(language = %tag, "persisted language matches default");
                } else {
                    debug!(language = %tag, "restored persisted language");
                    store.state.language = tag.clone();
                    store.emit(PreferenceEvent::LanguageChanged(tag));
                }
            }
            Ok(_) => debug!(language = %store.state.language, "no persisted language, using default"),
            Err(err) => warn!("reading language preference failed, using default: {:#}", err),
        }
        store.finish();
        store
    }

    /// Current active tag.
    pub fn language(&self) -> &LanguageTag {
        &self.state.language
    }

    pub fn is_resolving(&self) -> bool {
        self.state.resolving
    }

    pub fn preference(&self) -> &Preference {
        &self.state
    }

    /// Make `language` active and persist it.
    pub fn set_language(&mut self, language: impl Into<LanguageTag>) {
        let tag = language.into();
        self.begin();
        self.state.language = tag.clone();
        if let Err(err) = self.backend.write(LANGUAGE_KEY, tag.as_str()) {
            warn!("persisting language preference failed: {:#}", err);
        }
        debug!(language = %tag, "language changed");
        self.emit(PreferenceEvent::LanguageChanged(tag));
        self.finish();
    }

    /// Switch to the other configured language and persist it.
    ///
    /// A tag that names no configured language toggles to Portuguese.
    pub fn toggle(&mut self) -> Language {
        let next = self.state.language.toggled();
        self.set_language(next);
        next
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&PreferenceEvent, &Preference) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Resolve `path` against the active language.
    pub fn translate(&self, path: &str) -> Translation {
        i18n::translate(path, &self.state.language)
    }

    /// Label at `path` in the active language, or `path` itself.
    pub fn text<'a>(&self, path: &'a str) -> &'a str {
        i18n::text(path, &self.state.language)
    }

    /// Paragraphs at `path` in the active language.
    pub fn lines<'a>(&self, path: &'a str) -> Vec<&'a str> {
        i18n::lines(path, &self.state.language)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn begin(&mut self) {
        self.state.resolving = true;
        self.emit(PreferenceEvent::ResolvingStarted);
    }

    fn finish(&mut self) {
        self.state.resolving = false;
        self.emit(PreferenceEvent::ResolvingFinished);
    }

    fn emit(&mut self, event: PreferenceEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event, &self.state);
        }
    }
}

impl<B: PreferenceBackend + fmt::Debug> fmt::Debug for PreferenceStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("backend", &self.backend)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
